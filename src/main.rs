mod browser;
mod cli;
mod client;
mod error;
mod fmt;
mod models;
mod settings;
mod tui;

use clap::Parser;

use cli::{resolve_api_url, Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    let api_url = resolve_api_url(cli.api_url.as_deref());

    let result = match cli.command {
        Commands::List => cli::list::run(&api_url),
        Commands::Show { name, asset_class } => {
            cli::show::run(&name, asset_class.as_deref(), &api_url)
        }
        Commands::Browse { name } => cli::browse::run(&name, &api_url),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::SetUrl { url } => cli::config::set_url(&url),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
