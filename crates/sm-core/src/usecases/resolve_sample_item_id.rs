use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::ports::{MappingRepositoryError, MappingRepositoryPort};

#[derive(Debug, Error)]
pub enum ResolveSampleItemIdError {
    /// Caller input failed validation; no query was issued.
    #[error("invalid arguments: {}", .fields.join(", "))]
    InvalidArgument { fields: Vec<&'static str> },

    /// No mapping matched the item id and requested segments.
    #[error("Mapping not found")]
    NotFound,

    /// The query itself failed for a reason other than zero matches.
    #[error("Failed to fetch mapping from database")]
    Internal {
        #[source]
        source: MappingRepositoryError,
    },
}

/// Use case: resolve the canonical sample item id for an item id, constrained
/// to mappings whose segment set overlaps the requested segments.
///
/// Read-only and idempotent.
pub struct ResolveSampleItemId {
    repository: Arc<dyn MappingRepositoryPort>,
}

impl ResolveSampleItemId {
    pub fn new(repository: Arc<dyn MappingRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        item_id: String,
        clm_segments: Vec<String>,
    ) -> Result<String, ResolveSampleItemIdError> {
        let mut fields = Vec::new();
        if clm_segments.is_empty() || clm_segments.iter().any(|s| s.trim().is_empty()) {
            fields.push("clm_segments");
        }
        if item_id.trim().is_empty() {
            fields.push("item_id");
        }
        if !fields.is_empty() {
            return Err(ResolveSampleItemIdError::InvalidArgument { fields });
        }

        let matches = self
            .repository
            .find_overlapping(&item_id, &clm_segments)
            .await
            .map_err(|source| {
                warn!(error = %source, %item_id, "mapping lookup failed");
                ResolveSampleItemIdError::Internal { source }
            })?;

        // Matches arrive ordered by sample_item_id, so the first one wins
        // deterministically when several mappings overlap.
        match matches.into_iter().next() {
            Some(mapping) => Ok(mapping.sample_item_id),
            None => Err(ResolveSampleItemIdError::NotFound),
        }
    }
}
