//! Input tokenization.
//!
//! Splits a command line into whitespace-delimited words. There is no quoting
//! or escaping, and case is preserved.

/// Tokenizes command lines.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input line into words.
    ///
    /// Any run of Unicode whitespace separates words; leading and trailing
    /// whitespace produces no empty words.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }
}
