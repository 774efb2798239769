use diesel::prelude::*;

use sm_core::mapping::SampleMapping;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::db::schema::sample_mappings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SampleMappingRow {
    pub item_id: String,
    pub sample_item_id: String,
    pub clm_segments: Vec<String>,
}

impl From<SampleMapping> for SampleMappingRow {
    fn from(mapping: SampleMapping) -> Self {
        Self {
            item_id: mapping.item_id,
            sample_item_id: mapping.sample_item_id,
            clm_segments: mapping.clm_segments,
        }
    }
}

impl From<SampleMappingRow> for SampleMapping {
    fn from(row: SampleMappingRow) -> Self {
        Self {
            item_id: row.item_id,
            sample_item_id: row.sample_item_id,
            clm_segments: row.clm_segments,
        }
    }
}
