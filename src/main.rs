use anyhow::Result;
use clap::Parser;
use odoo2pgbadger::cli::Cli;
use odoo2pgbadger::process::{convert_file_with_progress, write_report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    let _guard = odoo2pgbadger::logging::init_logging(cli.log_config()?)?;

    let config = cli.convert_config();
    let stats = convert_file_with_progress(&config, |lines| {
        eprintln!("Processed {lines} lines...");
    })?;

    write_report(&mut std::io::stderr().lock(), &stats, &config.output)?;
    Ok(())
}
