#![allow(clippy::module_inception)]

use std::{fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod tracing_config;

/// File name given to input scanned without one.
pub const UNNAMED_INPUT: &str = "<input>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Byte `offset` of `file`, or the null position if the offset does not
    /// fit.
    pub fn at(offset: usize, file: Rc<String>) -> Self {
        match u32::try_from(offset) {
            Ok(offset) => Position(offset, file),
            Err(_) => Position::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }

    /// Whether the position names a file on disk the source line can be
    /// read back from.
    pub fn has_source(&self) -> bool {
        !self.is_null() && self.1.as_str() != UNNAMED_INPUT
    }
}

/// Finds the line holding byte `position` of `file`.
///
/// Returns the 1-based line number, the line text and the byte offset of
/// `position` within that line, or `None` if the file cannot be read or is
/// shorter than `position`.
pub fn get_line_at_position(file: &Path, position: u32) -> Option<(usize, String, usize)> {
    let content = String::from_utf8_lossy(&fs::read(file).ok()?).into_owned();
    line_at(&content, position as usize)
}

fn line_at(content: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{line_at, Position, UNNAMED_INPUT};

    #[test]
    fn test_line_at() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = line_at(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_at(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_position_at() {
        let file = Rc::new("test.src".to_string());

        assert_eq!(Position::at(42, Rc::clone(&file)), Position(42, Rc::clone(&file)));
        assert!(Position::at(u32::MAX as usize + 1, file).is_null());
    }

    #[test]
    fn test_position_has_source() {
        assert!(Position(3, Rc::new("prog.src".to_string())).has_source());
        assert!(!Position(3, Rc::new(UNNAMED_INPUT.to_string())).has_source());
        assert!(!Position::null().has_source());
    }

    #[test]
    fn test_line_at_past_end() {
        assert!(line_at("abc", 3).is_none());
        assert!(line_at("", 0).is_none());
    }
}

/// Prints `error` to stderr, with the offending line and a caret under the
/// position when the error has one.
pub fn display_error(error: &Error) {
    /*
        Error: UnrecognisedLexeme (Unrecognised lexeme `@`)
        -> prog.src
           |
        20 | x := @;
           | -----^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    if position.is_null() {
        return;
    }

    let file = Path::new(position.1.as_str());
    eprintln!("-> {}", file.display());

    if !position.has_source() {
        return;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(file, position.0) else {
        return;
    };
    let Some(before) = line_text.get(..line_pos) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = before
        .chars()
        .count()
        .saturating_sub(removed_whitespace)
        + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
