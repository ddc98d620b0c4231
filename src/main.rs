fn main() -> anyhow::Result<()> {
    tabhome::run()?;
    Ok(())
}
