use serde::{Deserialize, Serialize};

// Toggle de un id individual
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSelectionRequest<K> {
    pub id: K,
}

// Toggle de la página visible completa
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePageSelectionRequest<K> {
    pub page_ids: Vec<K>,
}

// Estado de la selección tras una operación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse<K> {
    pub selected_ids: Vec<K>,
    pub count: usize,
}

impl<K> SelectionResponse<K> {
    pub fn new(selected_ids: Vec<K>) -> Self {
        let count = selected_ids.len();
        Self {
            selected_ids,
            count,
        }
    }
}
