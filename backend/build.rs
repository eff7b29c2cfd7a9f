fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/reservation.proto");
    println!("cargo:rerun-if-changed=migrations");

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(false)
        .compile_protos(&["proto/reservation.proto"], &["proto"])?;

    Ok(())
}
