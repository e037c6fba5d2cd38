//! Sweep command implementation.

use crate::cleaner::{Cleaner, SweepOutcome};
use crate::cli::{valid_dir, Cli};
use crate::prompt;
use anyhow::Result;

/// Run the sweep: validate the root, confirm, delete.
pub fn run(args: &Cli) -> Result<()> {
    let Some(root) = valid_dir(&args.path) else {
        eprintln!("The given path is invalid.");
        std::process::exit(2);
    };

    // Resolve to an absolute path for the prompt
    let display_path = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    if !args.force {
        let question = format!(
            "Are you sure you want to remove every \"*.{}\" file under\n\"{}\"?",
            args.ext,
            display_path.display()
        );

        if !prompt::confirm(&question)? {
            println!("Task aborted.");
            return Ok(());
        }
    }

    tracing::info!(root = %display_path.display(), ext = %args.ext, "Starting sweep");

    let report = Cleaner::new(args.ext.clone()).run(root)?;

    if report.outcome == SweepOutcome::PermissionAborted {
        std::process::exit(5);
    }

    Ok(())
}
