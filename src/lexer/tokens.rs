use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "accessor", "and", "array", "begin", "bool", "case", "character",
            "constant", "else", "elsif", "end", "exit", "function", "if", "in",
            "integer", "interface", "is", "loop", "module", "mutator", "natural",
            "null", "of", "or", "others", "out", "positive", "procedure", "range",
            "return", "struct", "subtype", "then", "type", "when", "while",
        ] {
            set.insert(keyword);
        }
        set
    };

    /// Operator characters that never start a two-character operator.
    pub static ref SINGLE_OPERATORS: HashSet<char> =
        ['(', ')', '+', '-', '/', '|', '&', ';', ',', '[', ']'].into_iter().collect();

    /// Operator characters that may be the first half of a double operator.
    pub static ref DOUBLE_ELIGIBLE: HashSet<char> =
        ['.', '<', '>', ':', '=', '*', '!'].into_iter().collect();

    pub static ref DOUBLE_OPERATORS: HashSet<&'static str> =
        [":=", "..", "<<", ">>", "<>", "<=", ">=", "**", "!=", "=>"].into_iter().collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Comment,
    Identifier,
    StringLiteral,
    Keyword,
    CharLiteral,
    Operator,
    NumericLiteral,
    // Never emitted
    Unknown,
    Idle,
}

impl Category {
    /// Name written between parentheses after each lexeme, `None` for the
    /// two states that never produce a token.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("comment"),
            Category::Identifier => Some("identifier"),
            Category::StringLiteral => Some("string"),
            Category::Keyword => Some("keyword"),
            Category::CharLiteral => Some("character literal"),
            Category::Operator => Some("operator"),
            Category::NumericLiteral => Some("numeric literal"),
            Category::Unknown | Category::Idle => None,
        }
    }

    /// Whether a token of this category needs a closing delimiter.
    pub fn is_delimited(&self) -> bool {
        matches!(
            self,
            Category::Comment | Category::StringLiteral | Category::CharLiteral
        )
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: Category,
}

/// Renders the output line body: `<lexeme> (<category>)`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.lexeme, self.category)
    }
}
