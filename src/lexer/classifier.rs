//! Character predicates and new-token classification.
//!
//! Letter and digit tests are ASCII only; anything outside ASCII that is
//! not whitespace classifies as [`Category::Unknown`].

use super::tokens::{Category, DOUBLE_ELIGIBLE, DOUBLE_OPERATORS, RESERVED_LOOKUP, SINGLE_OPERATORS};

/// Picks the category of a token starting with `ch`, given the character
/// after it. Returns [`Category::Idle`] for whitespace.
pub fn classify(ch: char, next: Option<char>) -> Category {
    if is_whitespace(ch) {
        Category::Idle
    } else if is_comment_start(ch, next) {
        Category::Comment
    } else if ch == '"' {
        Category::StringLiteral
    } else if ch.is_ascii_alphabetic() {
        // Settled once the whole word is known
        Category::Keyword
    } else if is_single_op(ch) || has_double_op(ch) {
        Category::Operator
    } else if is_char_delim(ch) {
        Category::CharLiteral
    } else if ch.is_ascii_digit() {
        Category::NumericLiteral
    } else {
        Category::Unknown
    }
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

pub fn is_comment_start(ch: char, next: Option<char>) -> bool {
    ch == '/' && next == Some('*')
}

pub fn is_comment_end(ch: char, next: Option<char>) -> bool {
    ch == '*' && next == Some('/')
}

pub fn is_string_end(ch: char) -> bool {
    ch == '"'
}

pub fn is_char_delim(ch: char) -> bool {
    ch == '\''
}

pub fn is_single_op(ch: char) -> bool {
    SINGLE_OPERATORS.contains(&ch)
}

pub fn has_double_op(ch: char) -> bool {
    DOUBLE_ELIGIBLE.contains(&ch)
}

/// Whether `first` followed by `second` spells a two-character operator.
pub fn is_double_op(first: char, second: char) -> bool {
    let spelling: String = [first, second].iter().collect();
    DOUBLE_OPERATORS.contains(spelling.as_str())
}

pub fn is_keyword(lexeme: &str) -> bool {
    RESERVED_LOOKUP.contains(lexeme)
}

pub fn is_allowed_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn is_num_lit_char(ch: char) -> bool {
    ch.is_ascii_hexdigit() || matches!(ch, '#' | '.' | ',')
}

/// Whether `ch` ends a numeric literal in progress. The terminating
/// character is not part of the literal.
pub fn is_num_literal_end(ch: char, next: Option<char>) -> bool {
    let next_is_num_char = next.is_some_and(is_num_lit_char);

    // `..` range operator or a `,` separator
    if (ch == '.' && next == Some('.')) || (ch == ',' && !next_is_num_char) {
        return true;
    }

    !is_num_lit_char(ch)
}
