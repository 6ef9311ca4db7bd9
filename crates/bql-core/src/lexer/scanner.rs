//! State-machine lexer for BQL
//!
//! The lexer walks the input one character at a time with a single character
//! of lookahead and at most one character of pushback. Each state consumes
//! input and either emits a token or hands over to the next state. Scanning
//! stops for good after the first EOF or ERROR token.
//!
//! # Example
//!
//! ```rust
//! use bql_core::lexer::{Lexer, TokenType};
//!
//! let kinds: Vec<_> = Lexer::new("select ?s from ?g;").map(|t| t.token_type).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenType::Query,
//!         TokenType::Binding,
//!         TokenType::From,
//!         TokenType::Binding,
//!         TokenType::Semicolon,
//!         TokenType::Eof,
//!     ]
//! );
//! ```

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::keywords::lookup_keyword;
use super::token::{Token, TokenType};

/// Time anchor marker that closes a predicate id
const ANCHOR: &str = "\"@[";
/// Type marker that closes a literal value
const LITERAL_TYPE: &str = "\"^^type:";
/// Literal type tags accepted after `^^type:`
const LITERAL_TYPES: [&str; 5] = ["bool", "int64", "float64", "text", "blob"];

/// Lexer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Token,
    Space,
    Binding,
    Keyword,
    Node,
    PredicateOrLiteral,
    Predicate,
    Literal,
    Done,
}

/// Single-character punctuation tokens
fn punctuation(c: char) -> Option<TokenType> {
    match c {
        '{' => Some(TokenType::LBracket),
        '}' => Some(TokenType::RBracket),
        '(' => Some(TokenType::LPar),
        ')' => Some(TokenType::RPar),
        '.' => Some(TokenType::Dot),
        ';' => Some(TokenType::Semicolon),
        ',' => Some(TokenType::Comma),
        '<' => Some(TokenType::Lt),
        '>' => Some(TokenType::Gt),
        '=' => Some(TokenType::Eq),
        _ => None,
    }
}

/// A lexer for the BQL query language
///
/// Implements `Iterator` over owned `Token`s. The sequence always ends with
/// exactly one [`TokenType::Eof`] or [`TokenType::Error`] token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input string being tokenized
    input: &'a str,
    /// Byte offset where the token under construction starts
    start: usize,
    /// Current byte position in the input
    pos: usize,
    /// Byte width of the last character read, 0 once backed up
    width: usize,
    line: usize,
    last_line: usize,
    col: usize,
    last_col: usize,
    state: State,
    pending: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            line: 0,
            last_line: 0,
            col: 0,
            last_col: 0,
            state: State::Token,
            pending: None,
        }
    }

    /// Current line (0-based)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column within the line (0-based)
    pub fn column(&self) -> usize {
        self.col
    }

    /// Current byte position
    pub fn position(&self) -> usize {
        self.pos
    }

    // === Cursor primitives ===

    /// Consume and return the next character, or `None` at end of input
    fn next_char(&mut self) -> Option<char> {
        self.last_line = self.line;
        self.last_col = self.col;
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        self.col += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        }
        Some(c)
    }

    /// Step back over the last character read. Only one step is undone.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
        self.line = self.last_line;
        self.col = self.last_col;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }

    /// Drop the pending input before the current position
    fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Consume the next character if it matches `expected`, ignoring case
    fn accept(&mut self, expected: char) -> bool {
        match self.next_char() {
            Some(c) if c.to_lowercase().eq(expected.to_lowercase()) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume `text` character by character; stops at the first mismatch
    fn consume(&mut self, text: &str) -> bool {
        text.chars().all(|c| self.accept(c))
    }

    /// Consume characters while `pred` holds
    fn accept_run(&mut self, pred: impl Fn(char) -> bool) {
        loop {
            match self.next_char() {
                Some(c) if pred(c) => continue,
                _ => {
                    self.backup();
                    break;
                }
            }
        }
    }

    // === Emission ===

    fn emit(&mut self, token_type: TokenType) {
        let token = Token::new(token_type, &self.input[self.start..self.pos], self.start);
        trace!(token = %token.token_type, text = %token.text, "lexer emit");
        self.start = self.pos;
        self.pending = Some(token);
    }

    /// Emit a positioned ERROR token and stop scanning
    fn emit_error(&mut self, msg: &str) -> State {
        let message = format!("[lexer:{}:{}] {}", self.line, self.col, msg);
        debug!(error = %message, "lexer error");
        let token = Token::error(&self.input[self.start..self.pos], message, self.start);
        self.start = self.pos;
        self.pending = Some(token);
        State::Done
    }

    // === States ===

    fn step(&mut self, state: State) -> State {
        match state {
            State::Token => self.lex_token(),
            State::Space => self.lex_space(),
            State::Binding => self.lex_binding(),
            State::Keyword => self.lex_keyword(),
            State::Node => self.lex_node(),
            State::PredicateOrLiteral => self.lex_predicate_or_literal(),
            State::Predicate => self.lex_predicate(),
            State::Literal => self.lex_literal(),
            State::Done => State::Done,
        }
    }

    /// Dispatch on the next character
    fn lex_token(&mut self) -> State {
        while let Some(c) = self.peek() {
            match c {
                '?' => {
                    self.next_char();
                    return State::Binding;
                }
                '/' => return State::Node,
                '"' => return State::PredicateOrLiteral,
                _ if c.is_alphabetic() => return State::Keyword,
                _ => {}
            }
            if let Some(token_type) = punctuation(c) {
                self.next_char();
                self.emit(token_type);
                return State::Space;
            }
            if !c.is_whitespace() {
                break;
            }
            self.next_char();
            self.ignore();
        }
        self.emit(TokenType::Eof);
        State::Done
    }

    fn lex_space(&mut self) -> State {
        self.accept_run(char::is_whitespace);
        self.ignore();
        State::Token
    }

    fn lex_binding(&mut self) -> State {
        self.accept_run(char::is_alphabetic);
        if self.pos - self.start == '?'.len_utf8() {
            return self.emit_error("binding requires a name after ?");
        }
        self.emit(TokenType::Binding);
        State::Space
    }

    fn lex_keyword(&mut self) -> State {
        let rest = &self.input[self.pos..];
        let end = rest
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(rest.len());
        if let Some(token_type) = lookup_keyword(&rest[..end]) {
            self.accept_run(char::is_alphabetic);
            self.emit(token_type);
            return State::Space;
        }
        self.accept_run(|c| !c.is_whitespace());
        self.emit_error("found unknown keyword")
    }

    fn lex_node(&mut self) -> State {
        let mut has_id = false;
        loop {
            match self.next_char() {
                Some('\\') => {
                    if self.peek() == Some('<') {
                        self.next_char();
                    }
                }
                Some('<') => has_id = true,
                Some('>') => break,
                Some(_) => {}
                None => {
                    return self
                        .emit_error("node is not properly terminated; missing final > delimiter")
                }
            }
        }
        if !has_id {
            return self.emit_error("node should start ID section with a < delimiter");
        }
        self.emit(TokenType::Node);
        State::Space
    }

    /// Predicates and literals both open with `"`; the markers further
    /// ahead in the input decide which one this is.
    fn lex_predicate_or_literal(&mut self) -> State {
        let rest = &self.input[self.pos..];
        if rest.contains(ANCHOR) {
            return State::Predicate;
        }
        if rest.contains(LITERAL_TYPE) {
            return State::Literal;
        }
        self.emit_error("failed to parse predicate or literal for opening \" delimiter")
    }

    fn lex_predicate(&mut self) -> State {
        self.next_char();
        loop {
            match self.next_char() {
                Some('\\') => {
                    if self.peek() == Some('"') {
                        self.next_char();
                    }
                }
                Some('"') => {
                    self.backup();
                    if !self.consume(ANCHOR) {
                        return self.emit_error(
                            "predicates require time anchor information; missing \"@[",
                        );
                    }
                    loop {
                        match self.next_char() {
                            Some(']') => break,
                            Some(_) => {}
                            None => {
                                return self.emit_error(
                                    "predicate's time anchors should end with ] delimiter",
                                )
                            }
                        }
                    }
                    self.emit(TokenType::Predicate);
                    return State::Space;
                }
                Some(_) => {}
                None => {
                    return self.emit_error(
                        "predicates need to be properly terminated; missing \" and time anchor",
                    )
                }
            }
        }
    }

    fn lex_literal(&mut self) -> State {
        self.next_char();
        loop {
            match self.next_char() {
                Some('\\') => {
                    if self.peek() == Some('"') {
                        self.next_char();
                    }
                }
                Some('"') => {
                    self.backup();
                    if !self.consume(LITERAL_TYPE) {
                        return self
                            .emit_error("literals require a type definition; missing ^^type:");
                    }
                    let tag_start = self.pos;
                    self.accept_run(char::is_alphanumeric);
                    let tag = self.input[tag_start..self.pos].to_lowercase();
                    if !LITERAL_TYPES.contains(&tag.as_str()) {
                        return self.emit_error(&format!("invalid literal type {}", tag));
                    }
                    self.emit(TokenType::Literal);
                    return State::Space;
                }
                Some(_) => {}
                None => {
                    return self
                        .emit_error("literals need to be properly terminated; missing \" and type")
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.take() {
                return Some(token);
            }
            if self.state == State::Done {
                return None;
            }
            self.state = self.step(self.state);
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).collect()
    }

    fn token_types(input: &str) -> Vec<TokenType> {
        Lexer::new(input).map(|t| t.token_type).collect()
    }

    fn error_message(input: &str) -> String {
        let tokens = tokenize(input);
        let last = tokens.last().expect("lexer always emits a terminal token");
        assert_eq!(last.token_type, TokenType::Error, "tokens: {:?}", tokens);
        last.error_message.clone().unwrap_or_default()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::new(TokenType::Eof, "", 0)]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(token_types("   \t\n  "), vec![TokenType::Eof]);
    }

    #[test]
    fn test_keywords() {
        let types = token_types(
            "select from where as type id at before after between count distinct sum \
             group by order having asc desc limit not and or",
        );
        assert_eq!(
            types,
            vec![
                TokenType::Query,
                TokenType::From,
                TokenType::Where,
                TokenType::As,
                TokenType::Type,
                TokenType::Id,
                TokenType::At,
                TokenType::Before,
                TokenType::After,
                TokenType::Between,
                TokenType::Count,
                TokenType::Distinct,
                TokenType::Sum,
                TokenType::Group,
                TokenType::By,
                TokenType::Order,
                TokenType::Having,
                TokenType::Asc,
                TokenType::Desc,
                TokenType::Limit,
                TokenType::Not,
                TokenType::And,
                TokenType::Or,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = tokenize("SeLeCt FROM");
        assert_eq!(tokens[0].token_type, TokenType::Query);
        assert_eq!(tokens[0].text, "SeLeCt");
        assert_eq!(tokens[1].token_type, TokenType::From);
    }

    #[test]
    fn test_punctuation() {
        let types = token_types("{}().;,<>=");
        assert_eq!(
            types,
            vec![
                TokenType::LBracket,
                TokenType::RBracket,
                TokenType::LPar,
                TokenType::RPar,
                TokenType::Dot,
                TokenType::Semicolon,
                TokenType::Comma,
                TokenType::Lt,
                TokenType::Gt,
                TokenType::Eq,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_binding() {
        let tokens = tokenize("?name");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Binding, "?name", 0),
                Token::new(TokenType::Eof, "", 5),
            ]
        );
    }

    #[test]
    fn test_binding_stops_at_non_letter() {
        let tokens = tokenize("?foo,?bar");
        assert_eq!(tokens[0].text, "?foo");
        assert_eq!(tokens[1].token_type, TokenType::Comma);
        assert_eq!(tokens[2].text, "?bar");
    }

    #[test]
    fn test_binding_requires_name() {
        assert!(error_message("? x").contains("binding requires a name"));
    }

    #[test]
    fn test_node() {
        let tokens = tokenize("/user<joe>");
        assert_eq!(tokens[0].token_type, TokenType::Node);
        assert_eq!(tokens[0].text, "/user<joe>");
    }

    #[test]
    fn test_node_with_escaped_angle() {
        let tokens = tokenize(r"/some/type<a\<b> .");
        assert_eq!(tokens[0].token_type, TokenType::Node);
        assert_eq!(tokens[0].text, r"/some/type<a\<b>");
        assert_eq!(tokens[1].token_type, TokenType::Dot);
    }

    #[test]
    fn test_node_unterminated() {
        let tokens = tokenize("/type<id");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "/type<id");
        assert_eq!(
            tokens[0].error_message.as_deref(),
            Some("[lexer:0:8] node is not properly terminated; missing final > delimiter")
        );
    }

    #[test]
    fn test_node_missing_id_section() {
        assert!(error_message("/type>").contains("should start ID section with a < delimiter"));
    }

    #[test]
    fn test_predicate() {
        let tokens = tokenize(r#""knows"@[2016-01-01T00:00:00Z] "born"@[]"#);
        assert_eq!(tokens[0].token_type, TokenType::Predicate);
        assert_eq!(tokens[0].text, r#""knows"@[2016-01-01T00:00:00Z]"#);
        assert_eq!(tokens[1].token_type, TokenType::Predicate);
        assert_eq!(tokens[1].text, r#""born"@[]"#);
        assert_eq!(tokens[2].token_type, TokenType::Eof);
    }

    #[test]
    fn test_predicate_with_escaped_quote() {
        let tokens = tokenize(r#""say \"hi\""@[]"#);
        assert_eq!(tokens[0].token_type, TokenType::Predicate);
        assert_eq!(tokens[0].text, r#""say \"hi\""@[]"#);
    }

    #[test]
    fn test_predicate_unterminated_anchor() {
        assert!(error_message(r#""p"@[2016"#).contains("time anchors should end with ] delimiter"));
    }

    #[test]
    fn test_literal() {
        let tokens = tokenize(r#""42"^^type:int64"#);
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Literal, r#""42"^^type:int64"#, 0),
                Token::new(TokenType::Eof, "", 16),
            ]
        );
    }

    #[test]
    fn test_literal_all_types() {
        for kind in ["bool", "int64", "float64", "text", "blob", "INT64", "Text"] {
            let input = format!(r#""v"^^type:{}"#, kind);
            assert_eq!(
                token_types(&input),
                vec![TokenType::Literal, TokenType::Eof],
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_literal_invalid_type() {
        assert!(error_message(r#""42"^^type:unknown"#).contains("invalid literal type unknown"));
    }

    #[test]
    fn test_predicate_or_literal_undecidable() {
        assert!(error_message(r#""lonely""#).contains("failed to parse predicate or literal"));
    }

    #[test]
    fn test_unknown_keyword() {
        let tokens = tokenize("select foo?bar baz");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].token_type, TokenType::Error);
        assert_eq!(tokens[1].text, "foo?bar");
        assert_eq!(
            tokens[1].error_message.as_deref(),
            Some("[lexer:0:14] found unknown keyword")
        );
    }

    #[test]
    fn test_error_position_tracks_lines() {
        let msg = error_message("select\n  ?x\n  bogus");
        assert!(msg.starts_with("[lexer:2:7]"), "{}", msg);
    }

    #[test]
    fn test_unrecognized_character_halts_with_eof() {
        let types = token_types("select # from");
        assert_eq!(types, vec![TokenType::Query, TokenType::Eof]);
    }

    #[test]
    fn test_nothing_after_terminal_token() {
        let mut lexer = Lexer::new("/bad");
        assert!(lexer.next().is_some_and(|t| t.is_error()));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_token_offsets() {
        let tokens = tokenize("select ?s from");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 7);
        assert_eq!(tokens[2].offset, 10);
    }

    #[test]
    fn test_cursor_position_after_each_token() {
        let mut lexer = Lexer::new("select\n  ?x");

        assert_eq!(lexer.next().map(|t| t.token_type), Some(TokenType::Query));
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (0, 6, 6));

        assert_eq!(lexer.next().map(|t| t.token_type), Some(TokenType::Binding));
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (1, 4, 11));
    }

    #[test]
    fn test_binding_accepts_unicode_letters() {
        let tokens = tokenize("?naïve ?é");
        assert_eq!(tokens[0], Token::new(TokenType::Binding, "?naïve", 0));
        assert_eq!(tokens[1].token_type, TokenType::Binding);
        assert_eq!(tokens[1].text, "?é");
        assert_eq!(tokens[2].token_type, TokenType::Eof);
    }

    #[test]
    fn test_keyword_with_long_s() {
        let tokens = tokenize("ſelect ?x");
        assert_eq!(tokens[0].token_type, TokenType::Query);
        assert_eq!(tokens[0].text, "ſelect");
    }

    #[test]
    fn test_full_query() {
        let input = r#"select ?s, ?o from ?g where { ?s "knows"@[] ?o . ?o "age"@[] ?a } having ?a > "42"^^type:int64;"#;
        let types = token_types(input);
        assert_eq!(
            types,
            vec![
                TokenType::Query,
                TokenType::Binding,
                TokenType::Comma,
                TokenType::Binding,
                TokenType::From,
                TokenType::Binding,
                TokenType::Where,
                TokenType::LBracket,
                TokenType::Binding,
                TokenType::Predicate,
                TokenType::Binding,
                TokenType::Dot,
                TokenType::Binding,
                TokenType::Predicate,
                TokenType::Binding,
                TokenType::RBracket,
                TokenType::Having,
                TokenType::Binding,
                TokenType::Gt,
                TokenType::Literal,
                TokenType::Semicolon,
                TokenType::Eof,
            ]
        );
    }
}
