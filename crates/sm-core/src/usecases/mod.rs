mod register_mapping;
mod resolve_sample_item_id;

pub use register_mapping::{RegisterMapping, RegisterMappingError, RegisterReceipt};
pub use resolve_sample_item_id::{ResolveSampleItemId, ResolveSampleItemIdError};
