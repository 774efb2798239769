use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_GRPC_BIND: &str = "127.0.0.1:8002";

/// Runtime configuration resolved from the process environment.
///
/// Connection parameters are an external concern; there is no CLI surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub grpc_bind: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("SAMPLE_MANAGER_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .context("SAMPLE_MANAGER_DATABASE_URL or DATABASE_URL must be set")?;

        let bind = env::var("SAMPLE_MANAGER_GRPC_BIND")
            .unwrap_or_else(|_| DEFAULT_GRPC_BIND.to_string());
        let grpc_bind = bind
            .parse()
            .with_context(|| format!("invalid SAMPLE_MANAGER_GRPC_BIND: {bind}"))?;

        Ok(Self {
            database_url,
            grpc_bind,
        })
    }
}
