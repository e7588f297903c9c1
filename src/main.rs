use clap::Parser;

use table_shuffle::cli::Cli;
use table_shuffle::runtime::lifetime::{shutdown, startup};
use table_shuffle::runtime::modes::{self, Mode};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match modes::detect_mode(cli.command()) {
        Mode::GenerateConfig { output } => {
            modes::generate_config(output.as_deref())?;
        }
        Mode::Run => {
            let context = startup::prepare_startup(cli.config.as_deref())?;
            let result = modes::run_tui(&context, cli.seed);
            shutdown::shutdown(context);
            result?;
        }
    }

    Ok(())
}
