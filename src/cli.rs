use clap::Parser;
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// Novideo - remove beatmap background videos from an osu! song library
#[derive(Parser, Debug)]
#[command(name = "novideo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Song library to sweep (one beatmap folder per subdirectory)
    #[arg(short, long, value_name = "PATH", default_value = "./")]
    pub path: PathBuf,

    /// File extension to remove, without the leading dot
    #[arg(short, long, value_name = "EXT", default_value = "avi")]
    pub ext: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Returns the path back when it exists and is a directory.
pub fn valid_dir(path: &Path) -> Option<&Path> {
    if path.is_dir() {
        Some(path)
    } else {
        None
    }
}
