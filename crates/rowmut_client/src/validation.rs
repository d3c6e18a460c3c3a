//! Pre-flight checks run before a mutation is handed to the transport.

use crate::config::ClientConfig;
use crate::error::{MutationError, MutationResult};
use crate::mutation::{Kind, Mutation};
use rowmut_cell::buf::to_string_binary;
use tracing::debug;

impl<K: Kind> Mutation<K> {
    /// Checks this mutation against client-side limits.
    ///
    /// Rejects empty mutations (unless disabled) and any cell whose
    /// serialized size exceeds `config.max_key_value_size`.
    pub fn validate(&self, config: &ClientConfig) -> MutationResult<()> {
        if config.reject_empty && self.is_empty() {
            debug!(kind = %K::KIND, row = %to_string_binary(self.row()), "empty mutation rejected");
            return Err(MutationError::NoColumns);
        }
        if config.max_key_value_size > 0 {
            for cell in self.cells() {
                let size = cell.serialized_size();
                if size > config.max_key_value_size {
                    debug!(
                        kind = %K::KIND,
                        cell = %cell,
                        size,
                        max = config.max_key_value_size,
                        "oversized cell rejected"
                    );
                    return Err(MutationError::CellTooLarge {
                        size,
                        max: config.max_key_value_size,
                    });
                }
            }
        }
        Ok(())
    }
}
