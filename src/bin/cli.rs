// src/bin/cli.rs
use data_table_deps::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
