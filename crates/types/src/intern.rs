use std::{
    collections::HashSet,
    hash::Hash,
    sync::{Arc, Mutex, PoisonError},
};

/// Pool of shared immutable values: equal values come back as the same allocation.
pub(crate) struct Interner<T> {
    pool: Mutex<HashSet<Arc<T>>>,
}

impl<T: Eq + Hash> Interner<T> {
    pub(crate) fn new() -> Self {
        Self {
            pool: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn intern(&self, value: T) -> Arc<T> {
        // the pool only ever grows, a poisoned lock still holds a consistent set
        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = pool.get(&value) {
            return Arc::clone(existing);
        }
        let value = Arc::new(value);
        pool.insert(Arc::clone(&value));
        value
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
