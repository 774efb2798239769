use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingRepositoryError {
    /// The `(item_id, sample_item_id)` pair is already registered.
    #[error("mapping ({item_id}, {sample_item_id}) already exists")]
    Duplicate {
        item_id: String,
        sample_item_id: String,
    },

    #[error("storage error: {0}")]
    Storage(String),
}
