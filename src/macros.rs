//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$lexeme` - The raw lexeme text, delimiters included
/// * `$category` - The Category it was classified as
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(String::from(":="), Category::Operator);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexeme:expr, $category:expr) => {
        $crate::lexer::tokens::Token {
            lexeme: $lexeme,
            category: $category,
        }
    };
}
