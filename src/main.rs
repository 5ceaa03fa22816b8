//! Jotto - CLI
//!
//! Picks a secret word from a word-list file and runs the guessing loop.

use anyhow::{Context, Result};
use clap::Parser;
use jotto::{
    game::{Session, run_play},
    output::display::{print_version, print_welcome},
    wordlists::{TimeSeededPicker, select_secret_word},
};
use std::io::Write as _;

#[derive(Parser)]
#[command(
    name = "jotto",
    about = "Single-player word-deduction game with multiset letter scoring",
    disable_version_flag = true
)]
struct Cli {
    /// Print the version number and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Path to the word-list file (one candidate word per line)
    #[arg(short = 'w', long, default_value = "wordlist.txt")]
    wordlist: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        print_version();
        return Ok(());
    }

    print_welcome();

    print!("\nChoosing secret word...");
    std::io::stdout().flush()?;
    let mut picker = TimeSeededPicker::new();
    let secret = select_secret_word(&cli.wordlist, &mut picker)
        .with_context(|| format!("failed to choose a secret word from '{}'", cli.wordlist))?;
    println!("done.");

    let session = Session::new(secret);
    run_play(session)
}
