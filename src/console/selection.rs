//! Modelo de selección
//!
//! Conjunto de identificadores seleccionados, acotado a la colección
//! visible. La selección sobrevive a los cambios de página pero se
//! reinicia al cambiar el modo de vista (activos vs. archivados).

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Default)]
pub struct Selection<K: Eq + Hash + Clone> {
    ids: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Selection<K> {
    pub fn new() -> Self {
        Self { ids: HashSet::new() }
    }

    /// Alterna un identificador: lo agrega si no está, lo quita si está.
    pub fn toggle(&mut self, id: K) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Alterna la página visible completa: si todos los ids de la página ya
    /// están seleccionados los quita, de lo contrario agrega los faltantes.
    /// Con una página vacía no hace nada.
    pub fn toggle_page(&mut self, page_ids: &[K]) {
        if page_ids.is_empty() {
            return;
        }

        if self.is_page_selected(page_ids) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            for id in page_ids {
                self.ids.insert(id.clone());
            }
        }
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    /// True si la página tiene elementos y todos están seleccionados
    pub fn is_page_selected(&self, page_ids: &[K]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Quita los ids que salieron de la colección
    /// (archivados, restaurados o eliminados).
    pub fn remove_ids(&mut self, ids: &[K]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<K> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection: Selection<u32> = Selection::new();
        selection.toggle(7);
        assert!(selection.is_selected(&7));
        selection.toggle(7);
        assert!(!selection.is_selected(&7));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_page_is_a_toggle_not_select_all() {
        let mut selection: Selection<u32> = Selection::new();
        let page = vec![1, 2, 3];

        // Nada seleccionado: selecciona la página completa
        selection.toggle_page(&page);
        assert_eq!(selection.len(), 3);

        // Todos seleccionados: los quita
        selection.toggle_page(&page);
        assert!(selection.is_empty());

        // Selección parcial: completa la página en vez de limpiarla
        selection.toggle(2);
        selection.toggle_page(&page);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_toggle_page_keeps_other_pages() {
        let mut selection: Selection<u32> = Selection::new();
        selection.toggle(99); // id de otra página
        selection.toggle_page(&[1, 2]);
        selection.toggle_page(&[1, 2]);
        assert!(selection.is_selected(&99));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_empty_page_is_a_noop() {
        let mut selection: Selection<u32> = Selection::new();
        selection.toggle_page(&[]);
        assert!(selection.is_empty());
        assert!(!selection.is_page_selected(&[]));
    }

    #[test]
    fn test_remove_ids_drops_departed_records() {
        let mut selection: Selection<String> = Selection::new();
        selection.toggle("REQ-1".to_string());
        selection.toggle("REQ-2".to_string());
        selection.remove_ids(&["REQ-1".to_string(), "REQ-9".to_string()]);
        assert!(!selection.is_selected(&"REQ-1".to_string()));
        assert!(selection.is_selected(&"REQ-2".to_string()));
    }
}
