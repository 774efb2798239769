use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use sample_manager::bootstrap::{logging, AppConfig};
use sample_manager::grpc::api::sample_manager_service_server::SampleManagerServiceServer;
use sample_manager::grpc::SampleManagerGrpc;
use sm_infra::db::pool::init_db_pool;
use sm_infra::db::repositories::DieselMappingRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env()?;

    let pool = init_db_pool(&config.database_url)?;
    let repository = Arc::new(DieselMappingRepository::new(pool));
    let service = SampleManagerGrpc::new(repository);

    info!("sample-manager listening on {}", config.grpc_bind);
    Server::builder()
        .add_service(SampleManagerServiceServer::new(service))
        .serve(config.grpc_bind)
        .await?;

    Ok(())
}
