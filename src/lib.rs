pub mod bootstrap;
pub mod grpc;
