use std::sync::Arc;

use vetrina_core::{VetrinaConnector, VetrinaError};

/// Registry that routes each capability to the first connector advertising it.
pub struct Vetrina {
    pub(crate) connectors: Vec<Arc<dyn VetrinaConnector>>,
}

/// Builder for constructing a [`Vetrina`] registry.
pub struct VetrinaBuilder {
    connectors: Vec<Arc<dyn VetrinaConnector>>,
}

impl Default for VetrinaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VetrinaBuilder {
    /// Create an empty builder; at least one connector must be registered
    /// before building.
    #[must_use]
    pub fn new() -> Self {
        Self { connectors: vec![] }
    }

    /// Register a provider connector.
    ///
    /// Registration order decides which connector serves a capability when
    /// several advertise it: the first capable one wins. There is no failure
    /// fallback to later connectors; a provider error is surfaced as-is.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VetrinaConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(self) -> Result<Vetrina, VetrinaError> {
        if self.connectors.is_empty() {
            return Err(VetrinaError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Vetrina {
            connectors: self.connectors,
        })
    }
}

impl Vetrina {
    /// Start building a new `Vetrina` instance.
    #[must_use]
    pub fn builder() -> VetrinaBuilder {
        VetrinaBuilder::new()
    }
}
