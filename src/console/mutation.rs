//! Mutación optimista con rollback
//!
//! Protocolo en tres fases: snapshot de los valores previos por id,
//! aplicación síncrona del nuevo valor sobre el estado en memoria, y
//! reconciliación contra los resultados de persistencia. La reconciliación
//! es el único lugar donde se maneja el fallo parcial, y es la misma para
//! acciones individuales y por lote: cada id con persistencia fallida
//! vuelve a su valor previo; los que persistieron conservan el nuevo valor.

use std::collections::HashMap;
use std::hash::Hash;

/// Snapshot de los valores previos de los registros a mutar
#[derive(Debug, Clone)]
pub struct MutationSnapshot<K: Eq + Hash + Clone, V: Clone> {
    prior: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V: Clone> MutationSnapshot<K, V> {
    /// Captura el valor previo de cada id presente en la colección.
    /// Ids sin registro correspondiente simplemente no se capturan.
    pub fn capture<'a, I>(ids: I, mut lookup: impl FnMut(&K) -> Option<V>) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut prior = HashMap::new();
        for id in ids {
            if let Some(value) = lookup(id) {
                prior.insert(id.clone(), value);
            }
        }
        Self { prior }
    }

    pub fn prior(&self, id: &K) -> Option<&V> {
        self.prior.get(id)
    }

    /// Ids efectivamente capturados (los que existían al momento del snapshot)
    pub fn captured_ids(&self) -> Vec<K> {
        self.prior.keys().cloned().collect()
    }

    /// Fase de reconciliación: separa los resultados de persistencia en
    /// ganadores y perdedores, emparejando cada perdedor con su valor previo.
    pub fn reconcile<E>(self, results: Vec<(K, Result<(), E>)>) -> Reconciliation<K, V> {
        let mut failed = Vec::new();
        let mut succeeded = Vec::new();
        let prior = self.prior;

        for (id, result) in results {
            match result {
                Ok(()) => succeeded.push(id),
                Err(_) => {
                    if let Some(value) = prior.get(&id) {
                        failed.push((id, value.clone()));
                    }
                }
            }
        }

        Reconciliation { failed, succeeded }
    }
}

/// Resultado de la reconciliación
#[derive(Debug, Clone)]
pub struct Reconciliation<K, V> {
    /// Pares (id, valor previo) a restaurar en el estado
    pub failed: Vec<(K, V)>,
    pub succeeded: Vec<K>,
}

impl<K, V> Reconciliation<K, V> {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Mensaje agregado de error nombrando la cantidad de fallos,
    /// o None si todo persistió.
    pub fn error_message(&self, noun: &str) -> Option<String> {
        if self.failed.is_empty() {
            None
        } else {
            Some(format!(
                "Unable to update {} {}(s). Please try again.",
                self.failed.len(),
                noun
            ))
        }
    }
}
