mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger so `--quiet` hides it too.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Set up env_logger. Normal output is message-only; `--verbose` adds
/// timestamps and levels. `RUST_LOG` still wins when set.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "Error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "Warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.db;
    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(db),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
        command => {
            let gateway = commands::open_gateway(db)?;
            match command {
                Commands::List => commands::list::run_list(&gateway),
                Commands::Show { id } => commands::list::run_show(&gateway, id),
                Commands::Add { fields } => commands::add::run_add(&gateway, &fields),
                Commands::Edit {
                    id,
                    fields,
                    clear_phone,
                } => commands::edit::run_edit(&gateway, id, &fields, clear_phone),
                Commands::Sell { id } => commands::sell::run_sell(&gateway, id),
                Commands::Delete { id } => commands::delete::run_delete(&gateway, id),
                Commands::DeleteAll { confirm } => {
                    commands::delete::run_delete_all(&gateway, confirm)
                }
                Commands::Seed => commands::add::run_seed(&gateway),
                Commands::Config { .. } => Ok(()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
