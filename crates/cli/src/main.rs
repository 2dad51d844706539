use clap::Parser;

use foodorder_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    foodorder_observability::init(&cli.log_config());

    let output = foodorder_cli::run(&cli).inspect_err(|err| {
        tracing::error!(error = format!("{err:#}"), "command failed");
    })?;

    println!("{output}");
    Ok(())
}
