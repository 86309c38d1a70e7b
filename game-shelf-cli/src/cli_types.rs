//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use game_shelf_catalog::CatalogFormat;

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Manage a catalog of video games", long_about = None)]
pub(crate) struct Cli {
    /// Catalog file to operate on (.json or .csv)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields that describe a game.
#[derive(Args, Clone)]
pub(crate) struct GameFields {
    /// Release year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Genres, comma-separated (e.g., rpg,action)
    #[arg(short, long, value_delimiter = ',')]
    pub genres: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every game in the catalog
    List,

    /// Add a new game
    Add {
        /// Game title
        title: String,

        /// Release year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,

        /// Genres, comma-separated (e.g., rpg,action)
        #[arg(short, long, value_delimiter = ',')]
        genres: Vec<String>,
    },

    /// Show a single game by title
    Show {
        /// Game title (case-insensitive)
        title: String,
    },

    /// Change a game's title, year, or genres
    Update {
        /// Current title of the game (case-insensitive)
        title: String,

        /// New title
        #[arg(long)]
        rename: Option<String>,

        #[command(flatten)]
        fields: GameFields,
    },

    /// Remove a game
    Remove {
        /// Game title (case-insensitive)
        title: String,
    },

    /// Search the catalog
    Search {
        #[command(subcommand)]
        by: SearchBy,
    },

    /// Show catalog statistics
    Stats,

    /// Write the catalog to another file, converting formats as needed
    Export {
        /// Destination file
        output: PathBuf,

        /// Output format (default: from the destination's extension)
        #[arg(long)]
        format: Option<CatalogFormat>,
    },

    /// Run the interactive menu
    Shell,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SearchBy {
    /// Games whose title contains a fragment
    Title {
        /// Title fragment (case-insensitive)
        fragment: String,
    },

    /// Games with an exact genre
    Genre {
        /// Genre name (case-insensitive)
        genre: String,
    },

    /// Games released within a year range (inclusive)
    Years {
        /// Earliest year
        #[arg(allow_negative_numbers = true)]
        min: i32,

        /// Latest year
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved settings and their sources
    Show,

    /// Print the config file path
    Path,
}
