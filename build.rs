fn main() {
    let proto_file = "proto/sample_manager.proto";
    println!("cargo:rerun-if-changed={proto_file}");
    tonic_build::configure()
        .build_server(true)
        .compile_protos(&[proto_file], &["proto"])
        .expect("sample manager proto compilation must succeed");
}
