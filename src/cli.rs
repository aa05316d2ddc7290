use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::filters::{GenreTag, SortKey, SortOrder};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Terminal movie catalog browser")]
#[command(version)]
pub struct Cli {
    /// Defaults to `browse` when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the movie catalog in the TUI
    #[command(visible_alias = "b")]
    Browse {
        /// Starting location, e.g. "/", "/{movieId}", "/new", "/?query=queen&genre=COMEDY"
        location: Option<String>,
    },

    /// List movies matching the given filters
    #[command(visible_alias = "l")]
    Ls {
        /// Title search text
        #[arg(short, long)]
        query: Option<String>,

        /// Genre filter (e.g. COMEDY; ALL clears the filter)
        #[arg(short, long, value_parser = parse_genre)]
        genre: Option<GenreTag>,

        /// Sort field: releaseDate or title
        #[arg(long, default_value = "releaseDate", value_parser = parse_sort_key)]
        sort_by: SortKey,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc", value_parser = parse_sort_order)]
        sort_order: SortOrder,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single movie
    #[command(visible_alias = "s")]
    Show {
        /// Movie ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (server_url, request_timeout, debounce_ms)
        key: String,

        /// Value to set
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (server_url, request_timeout, debounce_ms)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the path to the config file
    Path,
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_browse, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_ls,
            cmd_show,
        };

        match self {
            Commands::Browse { location } => cmd_browse(location.as_deref()).await,

            Commands::Ls {
                query,
                genre,
                sort_by,
                sort_order,
                json,
            } => cmd_ls(query.as_deref(), genre, sort_by, sort_order, json).await,

            Commands::Show { id, json } => cmd_show(&id, json).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Path => cmd_config_path(),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_genre(s: &str) -> Result<GenreTag, String> {
    if s.trim().is_empty() {
        return Err("Genre cannot be empty".to_string());
    }
    Ok(GenreTag::from_param(s))
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse()
        .map_err(|_| format!("Invalid sort field '{s}'. Must be one of: releaseDate, title"))
}

fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    s.parse()
        .map_err(|_| format!("Invalid sort direction '{s}'. Must be one of: asc, desc"))
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "marquee", &mut io::stdout());
}
