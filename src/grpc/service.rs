use std::sync::Arc;

use tonic::{Request, Response, Status};

use sm_core::ports::MappingRepositoryPort;
use sm_core::usecases::{
    RegisterMapping, RegisterMappingError, ResolveSampleItemId, ResolveSampleItemIdError,
};

use super::api::sample_manager_service_server::SampleManagerService;
use super::api::{
    RegisterMappingRequest, RegisterMappingResponse, ResolveSampleItemIdRequest,
    ResolveSampleItemIdResponse,
};

/// gRPC adapter over the mapping use cases.
///
/// Holds no state beyond the wired use cases; each call is handled
/// independently by the tonic/tokio runtime.
pub struct SampleManagerGrpc {
    register: RegisterMapping,
    resolve: ResolveSampleItemId,
}

impl SampleManagerGrpc {
    pub fn new(repository: Arc<dyn MappingRepositoryPort>) -> Self {
        Self {
            register: RegisterMapping::new(repository.clone()),
            resolve: ResolveSampleItemId::new(repository),
        }
    }
}

#[tonic::async_trait]
impl SampleManagerService for SampleManagerGrpc {
    async fn register_mapping(
        &self,
        request: Request<RegisterMappingRequest>,
    ) -> Result<Response<RegisterMappingResponse>, Status> {
        let req = request.into_inner();

        match self
            .register
            .execute(req.item_id, req.sample_item_id, req.clm_segments)
            .await
        {
            Ok(receipt) => Ok(Response::new(RegisterMappingResponse {
                success: receipt.success,
                message: receipt.message,
            })),
            Err(err @ RegisterMappingError::InvalidArgument { .. }) => {
                Err(Status::invalid_argument(err.to_string()))
            }
            Err(RegisterMappingError::Storage { receipt, source }) => {
                Err(Status::internal(format!("{}: {source}", receipt.message)))
            }
        }
    }

    async fn resolve_sample_item_id(
        &self,
        request: Request<ResolveSampleItemIdRequest>,
    ) -> Result<Response<ResolveSampleItemIdResponse>, Status> {
        let req = request.into_inner();

        match self.resolve.execute(req.item_id, req.clm_segments).await {
            Ok(sample_item_id) => Ok(Response::new(ResolveSampleItemIdResponse {
                sample_item_id,
            })),
            Err(err @ ResolveSampleItemIdError::InvalidArgument { .. }) => {
                Err(Status::invalid_argument(err.to_string()))
            }
            Err(err @ ResolveSampleItemIdError::NotFound) => {
                Err(Status::not_found(err.to_string()))
            }
            Err(ResolveSampleItemIdError::Internal { source }) => Err(Status::internal(format!(
                "Failed to fetch mapping from database: {source}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::mapping::SampleMapping;
    use sm_core::ports::MappingRepositoryError;
    use std::sync::Mutex;
    use tonic::Code;

    struct MockMappingRepository {
        rows: Vec<SampleMapping>,
        fail_insert_with: Mutex<Option<MappingRepositoryError>>,
        fail_find_with: Mutex<Option<MappingRepositoryError>>,
    }

    impl MockMappingRepository {
        fn empty() -> Self {
            Self {
                rows: Vec::new(),
                fail_insert_with: Mutex::new(None),
                fail_find_with: Mutex::new(None),
            }
        }

        fn with_rows(rows: Vec<SampleMapping>) -> Self {
            Self {
                rows,
                fail_insert_with: Mutex::new(None),
                fail_find_with: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl MappingRepositoryPort for MockMappingRepository {
        async fn insert(&self, _mapping: SampleMapping) -> Result<(), MappingRepositoryError> {
            if let Some(err) = self.fail_insert_with.lock().unwrap().take() {
                return Err(err);
            }
            Ok(())
        }

        async fn find_overlapping(
            &self,
            item_id: &str,
            clm_segments: &[String],
        ) -> Result<Vec<SampleMapping>, MappingRepositoryError> {
            if let Some(err) = self.fail_find_with.lock().unwrap().take() {
                return Err(err);
            }
            let mut matched: Vec<SampleMapping> = self
                .rows
                .iter()
                .filter(|row| row.item_id == item_id && row.overlaps(clm_segments))
                .cloned()
                .collect();
            matched.sort_by(|a, b| a.sample_item_id.cmp(&b.sample_item_id));
            Ok(matched)
        }
    }

    fn service(repo: MockMappingRepository) -> SampleManagerGrpc {
        SampleManagerGrpc::new(Arc::new(repo))
    }

    fn segments(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn mapping(item_id: &str, sample_item_id: &str, segs: &[&str]) -> SampleMapping {
        SampleMapping {
            item_id: item_id.to_string(),
            sample_item_id: sample_item_id.to_string(),
            clm_segments: segments(segs),
        }
    }

    #[tokio::test]
    async fn register_with_empty_segments_is_invalid_argument() {
        let svc = service(MockMappingRepository::empty());

        let status = svc
            .register_mapping(Request::new(RegisterMappingRequest {
                item_id: "item_id".to_string(),
                sample_item_id: "sample_item_id".to_string(),
                clm_segments: vec![],
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("clm_segments"));
    }

    #[tokio::test]
    async fn register_with_empty_item_id_is_invalid_argument() {
        let svc = service(MockMappingRepository::empty());

        let status = svc
            .register_mapping(Request::new(RegisterMappingRequest {
                item_id: String::new(),
                sample_item_id: "sample_item_id".to_string(),
                clm_segments: segments(&["segment1"]),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("item_id"));
    }

    #[tokio::test]
    async fn register_success_returns_structured_ack() {
        let svc = service(MockMappingRepository::empty());

        let response = svc
            .register_mapping(Request::new(RegisterMappingRequest {
                item_id: "item_id".to_string(),
                sample_item_id: "sample_item_id".to_string(),
                clm_segments: segments(&["segment1", "segment2", "segment3"]),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(response.success);
        assert_eq!(response.message, "Mapping added successfully");
    }

    #[tokio::test]
    async fn register_duplicate_surfaces_internal_with_failure_message() {
        let repo = MockMappingRepository::empty();
        *repo.fail_insert_with.lock().unwrap() = Some(MappingRepositoryError::Duplicate {
            item_id: "item_id".to_string(),
            sample_item_id: "sample_item_id".to_string(),
        });
        let svc = service(repo);

        let status = svc
            .register_mapping(Request::new(RegisterMappingRequest {
                item_id: "item_id".to_string(),
                sample_item_id: "sample_item_id".to_string(),
                clm_segments: segments(&["segment1"]),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert!(status
            .message()
            .contains("Failed to add mapping to the database"));
        assert!(status.message().contains("already exists"));
    }

    #[tokio::test]
    async fn resolve_with_empty_segments_is_invalid_argument() {
        let svc = service(MockMappingRepository::empty());

        let status = svc
            .resolve_sample_item_id(Request::new(ResolveSampleItemIdRequest {
                item_id: "item_id".to_string(),
                clm_segments: vec![],
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn resolve_overlap_returns_sample_item_id() {
        let svc = service(MockMappingRepository::with_rows(vec![mapping(
            "item_id",
            "sample_item_id",
            &["segment1", "segment3"],
        )]));

        let response = svc
            .resolve_sample_item_id(Request::new(ResolveSampleItemIdRequest {
                item_id: "item_id".to_string(),
                clm_segments: segments(&["segment1", "segment2"]),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.sample_item_id, "sample_item_id");
    }

    #[tokio::test]
    async fn resolve_without_match_is_not_found() {
        let svc = service(MockMappingRepository::empty());

        let status = svc
            .resolve_sample_item_id(Request::new(ResolveSampleItemIdRequest {
                item_id: "item_id".to_string(),
                clm_segments: segments(&["segment1"]),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("Mapping not found"));
    }

    #[tokio::test]
    async fn resolve_storage_failure_is_internal() {
        let repo = MockMappingRepository::empty();
        *repo.fail_find_with.lock().unwrap() =
            Some(MappingRepositoryError::Storage("connection refused".to_string()));
        let svc = service(repo);

        let status = svc
            .resolve_sample_item_id(Request::new(ResolveSampleItemIdRequest {
                item_id: "item_id".to_string(),
                clm_segments: segments(&["segment1", "segment2"]),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert!(status
            .message()
            .contains("Failed to fetch mapping from database"));
    }

    #[tokio::test]
    async fn resolve_multiple_matches_is_deterministic() {
        let svc = service(MockMappingRepository::with_rows(vec![
            mapping("item_id", "sample_b", &["segment1"]),
            mapping("item_id", "sample_a", &["segment1"]),
        ]));

        let response = svc
            .resolve_sample_item_id(Request::new(ResolveSampleItemIdRequest {
                item_id: "item_id".to_string(),
                clm_segments: segments(&["segment1"]),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.sample_item_id, "sample_a");
    }
}
