use anyhow::Result;

use wtt_players::cli::{Cli, Command};
use wtt_players::{handle_completions, handle_players, handle_serve, handle_sub_events, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Serve { port } => handle_serve(*port, cli.offline),
        Command::Players { category, draw } => {
            handle_players(category, draw.as_deref(), cli.offline)
        }
        Command::SubEvents => handle_sub_events(cli.offline),
        Command::Completions { shell } => {
            handle_completions(*shell);
            Ok(())
        }
    }
}
