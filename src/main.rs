use clap::Parser;
use form_values::cli::commands::{cmd_bind, cmd_exists};
use form_values::cli::config::{Cli, Commands, load_config, resolve_bind_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Bind {
            tree,
            values,
            registry,
            normalize,
            trace,
            output,
        } => {
            // Resolve settings: CLI > config > defaults
            let settings = resolve_bind_settings(&config, normalize, trace.as_deref());
            cmd_bind(
                &tree,
                &values,
                registry.as_deref(),
                &settings,
                output.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Exists { values } => {
            if !cmd_exists(&values, cli.verbose)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
