//! Input and output contracts between the engine and whatever drives it.
//!
//! The engine never touches a terminal. A front end supplies an
//! [`InputProvider`] for menu choices and an [`OutputSink`] for messages.

use thiserror::Error;

/// Errors from reading a player's choice.
#[derive(Debug, Error)]
pub enum InputError {
    /// The player typed something that isn't a whole number. Recoverable.
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// No more input will ever arrive.
    #[error("Input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether re-prompting can fix this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::NotANumber(_))
    }
}

/// Source of player choices.
pub trait InputProvider {
    /// Block until the player enters a whole number.
    fn read_integer(&mut self) -> Result<i64, InputError>;
}

/// Destination for game messages, one plain-text line at a time.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);

    fn blank_line(&mut self) {
        self.write_line("");
    }
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn read_integer(&mut self) -> Result<i64, InputError> {
        (**self).read_integer()
    }
}

impl<T: InputProvider + ?Sized> InputProvider for Box<T> {
    fn read_integer(&mut self) -> Result<i64, InputError> {
        (**self).read_integer()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

/// Parse one line of player input as a whole number.
pub fn parse_integer(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3").unwrap(), 3);
        assert_eq!(parse_integer("  -1\n").unwrap(), -1);
        assert!(matches!(
            parse_integer("attack"),
            Err(InputError::NotANumber(s)) if s == "attack"
        ));
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_recoverable() {
        assert!(InputError::NotANumber("x".into()).is_recoverable());
        assert!(!InputError::Closed.is_recoverable());
    }
}
