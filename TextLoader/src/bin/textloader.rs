fn main() -> anyhow::Result<()> {
    textloader::cli::run_cli()
}
