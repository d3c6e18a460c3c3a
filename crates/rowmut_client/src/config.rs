//! Client configuration.

/// Client-side limits applied before a mutation is handed to the transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Largest serialized cell the client will send (0 = unlimited).
    pub max_key_value_size: usize,

    /// Whether a mutation without any cells is rejected.
    pub reject_empty: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_key_value_size: 10 * 1024 * 1024, // 10 MB
            reject_empty: true,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest serialized cell size.
    #[must_use]
    pub const fn max_key_value_size(mut self, size: usize) -> Self {
        self.max_key_value_size = size;
        self
    }

    /// Sets whether empty mutations are rejected.
    #[must_use]
    pub const fn reject_empty(mut self, value: bool) -> Self {
        self.reject_empty = value;
        self
    }
}
