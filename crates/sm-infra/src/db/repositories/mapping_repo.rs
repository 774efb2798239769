use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use sm_core::mapping::SampleMapping;
use sm_core::ports::{MappingRepositoryError, MappingRepositoryPort};

use crate::db::{models::SampleMappingRow, pool::DbPool, schema::sample_mappings::dsl::*};

pub struct DieselMappingRepository {
    pool: DbPool,
}

impl DieselMappingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepositoryPort for DieselMappingRepository {
    async fn insert(&self, mapping: SampleMapping) -> Result<(), MappingRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| MappingRepositoryError::Storage(e.to_string()))?;

        let row = SampleMappingRow::from(mapping);

        diesel::insert_into(sample_mappings)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    MappingRepositoryError::Duplicate {
                        item_id: row.item_id.clone(),
                        sample_item_id: row.sample_item_id.clone(),
                    }
                }
                other => MappingRepositoryError::Storage(other.to_string()),
            })?;

        Ok(())
    }

    async fn find_overlapping(
        &self,
        wanted_item_id: &str,
        segments: &[String],
    ) -> Result<Vec<SampleMapping>, MappingRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| MappingRepositoryError::Storage(e.to_string()))?;

        let rows: Vec<SampleMappingRow> = sample_mappings
            .filter(
                item_id
                    .eq(wanted_item_id)
                    .and(clm_segments.overlaps_with(segments.to_vec())),
            )
            .order(sample_item_id.asc())
            .select(SampleMappingRow::as_select())
            .load(&mut conn)
            .map_err(|e| MappingRepositoryError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(SampleMapping::from).collect())
    }
}
