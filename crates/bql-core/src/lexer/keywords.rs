//! Keyword table for the BQL lexer
//!
//! Uses compile-time perfect hashing (phf) for O(1) keyword lookup.

use phf::phf_map;

use super::TokenType;

/// Static map of keywords to their token types
static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map! {
    // Query structure
    "select" => TokenType::Query,
    "from" => TokenType::From,
    "where" => TokenType::Where,
    "as" => TokenType::As,

    // Graph clause modifiers
    "type" => TokenType::Type,
    "id" => TokenType::Id,
    "at" => TokenType::At,

    // Temporal filters
    "before" => TokenType::Before,
    "after" => TokenType::After,
    "between" => TokenType::Between,

    // Aggregation
    "count" => TokenType::Count,
    "distinct" => TokenType::Distinct,
    "sum" => TokenType::Sum,
    "group" => TokenType::Group,
    "by" => TokenType::By,
    "order" => TokenType::Order,
    "having" => TokenType::Having,
    "asc" => TokenType::Asc,
    "desc" => TokenType::Desc,
    "limit" => TokenType::Limit,

    // Boolean operators
    "not" => TokenType::Not,
    "and" => TokenType::And,
    "or" => TokenType::Or,
};

/// Look up a keyword and return its TokenType
/// Returns None if the word is not a keyword
#[inline]
pub fn lookup_keyword(word: &str) -> Option<TokenType> {
    // Keywords are case-insensitive
    if word.is_ascii() {
        return KEYWORDS.get(word.to_ascii_lowercase().as_str()).copied();
    }
    KEYWORDS.get(fold_case(word).as_str()).copied()
}

/// Unicode simple case folding, as far as it reaches the ASCII keyword
/// alphabet. LATIN SMALL LETTER LONG S is already lowercase but folds to `s`.
fn fold_case(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '\u{17F}' { 's' } else { c })
        .collect()
}

/// Check if a word is any BQL keyword
#[inline]
pub fn is_keyword(word: &str) -> bool {
    lookup_keyword(word).is_some()
}
