use async_trait::async_trait;

use crate::mapping::SampleMapping;
use crate::ports::errors::MappingRepositoryError;

#[async_trait]
pub trait MappingRepositoryPort: Send + Sync {
    /// Insert a single mapping row.
    ///
    /// A uniqueness violation on `(item_id, sample_item_id)` is reported as
    /// [`MappingRepositoryError::Duplicate`].
    async fn insert(&self, mapping: SampleMapping) -> Result<(), MappingRepositoryError>;

    /// Find mappings with the given item id whose segment set shares at least
    /// one element with `clm_segments`.
    ///
    /// Matches are ordered by `sample_item_id` ascending so multi-match
    /// resolution is deterministic. Zero matches is `Ok(vec![])`, not an
    /// error.
    async fn find_overlapping(
        &self,
        item_id: &str,
        clm_segments: &[String],
    ) -> Result<Vec<SampleMapping>, MappingRepositoryError>;
}
