pub fn run() -> anyhow::Result<()> {
    println!("webstage {}", env!("CARGO_PKG_VERSION"));
    println!("Gzip web assets and stage them for device filesystem images");
    Ok(())
}
