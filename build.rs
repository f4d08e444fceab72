fn main() {
    // The gRPC bindings for `proto/docsync.proto` are vendored in
    // `src/proto_gen.rs` (see `src/proto.rs`) so the crate builds in
    // environments without a local `protoc`. Regenerate them with
    // tonic-build if the proto changes.
    println!("cargo:rerun-if-changed=proto/docsync.proto");
    println!("cargo:rerun-if-changed=src/proto_gen.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
