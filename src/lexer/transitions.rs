//! Transition table for a token in progress.
//!
//! [`transition`] maps the current state, the lexeme collected so far, the
//! current character and one character of lookahead to a [`Step`]. The scan
//! loop only carries out steps; every decision about where a token ends is
//! made here.

use super::{
    classifier::{
        has_double_op, is_allowed_ident_char, is_char_delim, is_comment_end, is_double_op,
        is_keyword, is_num_literal_end, is_single_op, is_string_end,
    },
    tokens::Category,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    /// Append the character and stay in the current state.
    Absorb,
    /// Append the character and continue in another state.
    AbsorbAs(Category),
    /// Append the character; the lexeme is complete.
    Finish,
    /// Append the character and the one after it; the lexeme is complete.
    FinishWithNext,
    /// Push the character back to the input; the lexeme is complete with
    /// the given category.
    Yield(Category),
}

/// Decides what happens to `ch` while a `state` token holding `lexeme` is
/// in progress.
///
/// `state` must be neither [`Category::Idle`] nor [`Category::Unknown`];
/// both answer with `Yield` of themselves.
pub fn transition(state: Category, lexeme: &str, ch: char, next: Option<char>) -> Step {
    match state {
        Category::Comment => {
            if is_comment_end(ch, next) {
                Step::FinishWithNext
            } else {
                Step::Absorb
            }
        }
        Category::StringLiteral => {
            if is_string_end(ch) {
                Step::Finish
            } else {
                Step::Absorb
            }
        }
        Category::CharLiteral => {
            if is_char_delim(ch) {
                Step::Finish
            } else {
                Step::Absorb
            }
        }
        Category::Keyword => {
            if ch.is_ascii_digit() || ch == '_' {
                Step::AbsorbAs(Category::Identifier)
            } else if ch.is_ascii_alphabetic() {
                Step::Absorb
            } else {
                Step::Yield(settle_word(lexeme))
            }
        }
        Category::Identifier => {
            if is_allowed_ident_char(ch) {
                Step::Absorb
            } else {
                Step::Yield(Category::Identifier)
            }
        }
        Category::Operator => match lexeme.chars().next() {
            Some(first) if has_double_op(first) && !is_single_op(first) => {
                if is_double_op(first, ch) {
                    Step::Finish
                } else {
                    Step::Yield(Category::Operator)
                }
            }
            _ => Step::Yield(Category::Operator),
        },
        Category::NumericLiteral => {
            if is_num_literal_end(ch, next) {
                Step::Yield(Category::NumericLiteral)
            } else {
                Step::Absorb
            }
        }
        Category::Unknown | Category::Idle => Step::Yield(state),
    }
}

/// Category of a token when the input ends while it is in progress, or
/// `None` if it still needs a closing delimiter.
pub fn finish_at_eof(state: Category, lexeme: &str) -> Option<Category> {
    if state.is_delimited() {
        return None;
    }

    match state {
        Category::Keyword => Some(settle_word(lexeme)),
        Category::Identifier | Category::Operator | Category::NumericLiteral => Some(state),
        _ => None,
    }
}

/// A completed pure-alphabetic word is a keyword only if it is reserved.
fn settle_word(lexeme: &str) -> Category {
    if is_keyword(lexeme) {
        Category::Keyword
    } else {
        Category::Identifier
    }
}
