//! Blocking y/N confirmation on standard input.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question and read a single line of input.
///
/// Returns true only for a trimmed, case-insensitive "y"; anything else,
/// including empty input, declines. There is no re-prompt.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    confirm_from(io::stdin().lock())
}

fn confirm_from<R: BufRead>(mut input: R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lowercase_y_confirms() {
        assert!(confirm_from(Cursor::new("y\n")).unwrap());
    }

    #[test]
    fn uppercase_y_confirms() {
        assert!(confirm_from(Cursor::new("Y\n")).unwrap());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(confirm_from(Cursor::new("  y  \n")).unwrap());
    }

    #[test]
    fn anything_else_declines() {
        assert!(!confirm_from(Cursor::new("n\n")).unwrap());
        assert!(!confirm_from(Cursor::new("yes\n")).unwrap());
        assert!(!confirm_from(Cursor::new("\n")).unwrap());
    }

    #[test]
    fn end_of_input_declines() {
        assert!(!confirm_from(Cursor::new("")).unwrap());
    }
}
