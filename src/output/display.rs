//! Display functions for the game loop

use crate::core::Score;
use crate::game::Session;
use crate::{APP_NAME, APP_VENDOR};
use colored::Colorize;

/// Print the welcome banner
pub fn print_welcome() {
    println!();
    println!("{}", "═".repeat(46).cyan());
    println!(
        " Welcome to {}! ",
        APP_NAME.bright_yellow().bold()
    );
    println!("{}", "═".repeat(46).cyan());
    println!();
    println!("Guess the secret word. After each miss you'll see how many");
    println!("letters you share with it, and how many sit in the right spot.");
}

/// Print the version banner for the `-v` flag
pub fn print_version() {
    println!("{APP_NAME} by {APP_VENDOR}");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}

/// Announce the secret word's length at session start
pub fn print_word_length(length: usize) {
    println!(
        "\nSecret word has {} letters",
        length.to_string().bright_cyan().bold()
    );
}

/// Print the score for an incorrect guess
pub fn print_score(score: Score, guess_number: u32) {
    println!(
        "Guess {}: {} {} in common, {} {} in place",
        guess_number,
        score.letters_in_common.to_string().bright_yellow().bold(),
        plural(score.letters_in_common, "letter", "letters"),
        score.letters_in_place.to_string().green().bold(),
        plural(score.letters_in_place, "letter", "letters"),
    );
}

/// Print the win banner with the guess count
pub fn print_win(session: &Session) {
    let guesses = session.guess_count();

    println!();
    println!("{}", "═".repeat(46).cyan());
    println!("{}", " Correct! ".bright_green().bold());
    println!(
        " The word was {}, found in {} {}.",
        session.secret().text().to_uppercase().bright_white().bold(),
        guesses.to_string().bright_cyan().bold(),
        plural(guesses as usize, "guess", "guesses"),
    );
    println!("{}", "═".repeat(46).cyan());
    println!();
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_picks_form() {
        assert_eq!(plural(1, "letter", "letters"), "letter");
        assert_eq!(plural(0, "letter", "letters"), "letters");
        assert_eq!(plural(5, "guess", "guesses"), "guesses");
    }
}
