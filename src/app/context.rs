use crate::ports::{DocumentConverter, DocumentStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DocumentStore, C: DocumentConverter> {
    store: S,
    converter: C,
}

impl<S: DocumentStore, C: DocumentConverter> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, converter: C) -> Self {
        Self { store, converter }
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the document converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }
}
