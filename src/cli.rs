use clap::{Parser, Subcommand};
use housing_core::Language;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campus-guide", version, about = "Campus guide — university housing browser")]
pub struct Cli {
    /// Write debug logs to /tmp/campus-guide-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Housing dataset (JSON). Overrides `[housing] dataset` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Display language (en, fr). Overrides `[general] language`.
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Config file to read instead of ~/.config/campus-guide/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List residences.
    Residences,
    /// Show one residence's properties, optionally filtered.
    Show {
        residence: String,
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Compare two or more residences side by side.
    Compare {
        #[arg(num_args = 1..)]
        residences: Vec<String>,
    },
    /// List housing resources.
    Resources,
    /// Interactive shell (the default).
    Shell,
}
