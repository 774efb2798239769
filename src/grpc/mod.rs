pub mod api {
    tonic::include_proto!("samplemanager.v1");
}

mod service;

pub use service::SampleManagerGrpc;
