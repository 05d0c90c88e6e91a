use core::fmt::{Debug, Display};

/// General error type returned by [`crate::Module::call`] and [`crate::Module::genesis`].
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// Custom error thrown by a module.
    #[error(transparent)]
    ModuleError(#[from] anyhow::Error),
}

impl ModuleError {
    /// Returns the typed error a module raised, if it was of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        match self {
            ModuleError::ModuleError(err) => err.downcast_ref::<E>(),
        }
    }
}
