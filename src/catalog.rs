use thiserror::Error;

use crate::model::Module;

/// Error from a module catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not produce the module list.
    #[error("storage: {0}")]
    Storage(String),
}

/// Source of the active-module snapshot the projection runs over.
///
/// Injected explicitly at each call instead of read from process-wide
/// state, so the projection stays independently testable. The returned
/// list must be a consistent snapshot: the projection will not observe
/// mutations made after the call returns.
pub trait ModuleCatalog: Send + Sync {
    /// The currently active modules, in catalog order.
    fn active_modules(&self) -> Result<Vec<Module>, CatalogError>;
}

/// In-memory catalog over a fixed module list.
///
/// Used by tests and by callers who already hold a snapshot (e.g. an
/// application that registered its modules at startup).
pub struct StaticCatalog {
    modules: Vec<Module>,
}

impl StaticCatalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

impl ModuleCatalog for StaticCatalog {
    fn active_modules(&self) -> Result<Vec<Module>, CatalogError> {
        Ok(self.modules.clone())
    }
}
