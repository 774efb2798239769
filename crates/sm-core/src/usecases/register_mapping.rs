use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::mapping::SampleMapping;
use crate::ports::{MappingRepositoryError, MappingRepositoryPort};

/// Structured outcome of a registration attempt.
///
/// Failures carry this receipt inside [`RegisterMappingError::Storage`] in
/// addition to the error itself, so callers get both the `{success, message}`
/// payload and the raised failure signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterReceipt {
    pub success: bool,
    pub message: String,
}

impl RegisterReceipt {
    fn added() -> Self {
        Self {
            success: true,
            message: "Mapping added successfully".to_string(),
        }
    }

    fn rejected() -> Self {
        Self {
            success: false,
            message: "Failed to add mapping to the database".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegisterMappingError {
    /// Caller input failed validation; storage was never touched.
    #[error("invalid arguments: {}", .fields.join(", "))]
    InvalidArgument { fields: Vec<&'static str> },

    /// The insert failed. Carries the structured failure receipt alongside
    /// the underlying storage error so neither channel is lost.
    #[error("{}", .receipt.message)]
    Storage {
        receipt: RegisterReceipt,
        #[source]
        source: MappingRepositoryError,
    },
}

/// Use case: record that an item id resolves to a sample item under a set of
/// CLM segments.
pub struct RegisterMapping {
    repository: Arc<dyn MappingRepositoryPort>,
}

impl RegisterMapping {
    pub fn new(repository: Arc<dyn MappingRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        item_id: String,
        sample_item_id: String,
        clm_segments: Vec<String>,
    ) -> Result<RegisterReceipt, RegisterMappingError> {
        let mut fields = Vec::new();
        if clm_segments.is_empty() || clm_segments.iter().any(|s| s.trim().is_empty()) {
            fields.push("clm_segments");
        }
        if item_id.trim().is_empty() {
            fields.push("item_id");
        }
        if sample_item_id.trim().is_empty() {
            fields.push("sample_item_id");
        }
        if !fields.is_empty() {
            return Err(RegisterMappingError::InvalidArgument { fields });
        }

        let mapping = SampleMapping {
            item_id,
            sample_item_id,
            clm_segments,
        };

        match self.repository.insert(mapping).await {
            Ok(()) => Ok(RegisterReceipt::added()),
            Err(source) => {
                warn!(error = %source, "mapping insert failed");
                Err(RegisterMappingError::Storage {
                    receipt: RegisterReceipt::rejected(),
                    source,
                })
            }
        }
    }
}
