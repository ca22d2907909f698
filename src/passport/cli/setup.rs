use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "passport", bin_name = "passport", version)]
#[command(about = "Keep track of the coffees you have tried", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List coffees, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only this roast category
        #[arg(short, long)]
        category: Option<String>,

        /// Only this acidity
        #[arg(long)]
        acidity: Option<String>,

        /// Only this body
        #[arg(long)]
        body: Option<String>,

        /// Only this origin
        #[arg(long)]
        origin: Option<String>,

        /// Only tasted coffees
        #[arg(long, conflicts_with = "untasted")]
        tasted: bool,

        /// Only coffees not tasted yet
        #[arg(long)]
        untasted: bool,
    },

    /// Add a coffee
    #[command(alias = "n")]
    Add {
        /// Name of the coffee
        name: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Roast category
        #[arg(short, long, default_value = "Medium Roast")]
        category: String,

        /// Extra details or notes
        #[arg(long)]
        details: Option<String>,

        /// Photo to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Check in a coffee: mark it tasted and record a note
    #[command(alias = "ci")]
    CheckIn {
        /// Index of the coffee (as shown by list)
        index: String,

        /// Tasting note
        note: String,

        /// Photo to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Toggle favorite on one or more coffees
    #[command(alias = "fav")]
    Favorite {
        /// Indexes of the coffees (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Toggle tasted on one or more coffees
    Tasted {
        /// Indexes of the coffees (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more coffees
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the coffees (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// View a coffee in full
    #[command(alias = "v")]
    View {
        /// Index of the coffee
        index: String,
    },

    /// List favorite coffees
    Favorites,

    /// List tasted coffees that have a photo
    Gallery,

    /// Show check-in progress and badges
    Stats,

    /// Show earned badges
    Badges,

    /// Show the distinct values of acidity, body or origin
    Values {
        /// Field name: acidity, body or origin
        field: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (categories, reseed-when-empty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Replace the collection with the sample coffees
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
