pub mod browse;
pub mod config;
pub mod list;
pub mod show;

use clap::{Parser, Subcommand};

use crate::settings::load_settings;

#[derive(Parser)]
#[command(name = "quid", about = "Terminal viewer for investor commitment data.")]
pub struct Cli {
    /// Backend API base URL (overrides the configured value)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all investors with their total commitments.
    List,
    /// Show one investor's commitments and per-asset-class totals.
    Show {
        /// Investor name as shown in `quid list`
        name: String,
        /// Only show commitments for this asset class
        #[arg(long = "asset-class")]
        asset_class: Option<String>,
    },
    /// Interactively browse an investor's commitments.
    Browse {
        /// Investor name as shown in `quid list`
        name: String,
    },
    /// Inspect or update settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings.
    Show,
    /// Set the backend API base URL.
    SetUrl {
        /// Base URL, e.g. http://127.0.0.1:8000
        url: String,
    },
}

pub(crate) fn resolve_api_url(flag: Option<&str>) -> String {
    match flag {
        Some(url) => url.to_string(),
        None => load_settings().api_url,
    }
}
