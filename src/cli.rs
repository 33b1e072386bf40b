use clap::{Parser as CliParser, Subcommand};
use std::path::PathBuf;

#[derive(CliParser)]
#[command(author, version, about, long_about=None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
    /// Split a pytest report into categorized spans
    Lex {
        /// Print the spans as a JSON array instead of one per line
        #[arg(short, long)]
        json: bool,
        /// The file to lex, standard input if absent
        source: Option<PathBuf>,
    },
    /// Print the CSS rules of every category
    Stylesheet {
        /// A JSON file overriding the default colors
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List every category with its CSS class
    Categories,
}
