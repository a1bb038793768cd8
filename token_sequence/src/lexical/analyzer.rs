//! PHP lexical analyzer
//!
//! Produces the raw unit stream `token_get_all(..., TOKEN_PARSE)` would for
//! ordinary PHP: template text, tags, trivia, names, literals and operators.
//! Heredoc and nowdoc bodies are kept whole as one string literal; string
//! interpolation and cast tokens are not recognised.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::lexical::Lexer;
use crate::logging::codes;
use crate::tokens::{Keyword, Operator, RawToken, TokenType};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use std::collections::BTreeMap;

/// Lexical analysis errors with compile-time limits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Identifier too long: {length} bytes (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize },

    #[error("String too large: {size} bytes (max {MAX_STRING_SIZE})")]
    StringTooLarge { size: usize },

    #[error("Comment too long: {length} bytes (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Counters gathered during one tokenization run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub operator_tokens: usize,
    pub bare_tokens: usize,
    pub whitespace_tokens: usize,
    pub comment_count: usize,
    pub doc_comment_count: usize,
    pub max_string_length: usize,
    pub max_comment_length: usize,
    pub invalid_chars: usize,

    /// Per-keyword counts, filled only with detailed metrics enabled
    pub keyword_usage: BTreeMap<&'static str, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, raw: &RawToken, detailed: bool) {
        self.total_tokens += 1;
        let length = raw.text().len();

        match raw.token_type() {
            None => self.bare_tokens += 1,
            Some(TokenType::Keyword(keyword)) => {
                self.keyword_tokens += 1;
                if detailed {
                    *self.keyword_usage.entry(keyword.as_str()).or_insert(0) += 1;
                }
            }
            Some(TokenType::Identifier) => self.identifier_tokens += 1,
            Some(TokenType::Operator(_)) => self.operator_tokens += 1,
            Some(TokenType::Whitespace) => self.whitespace_tokens += 1,
            Some(TokenType::Comment) => {
                self.comment_count += 1;
                self.max_comment_length = self.max_comment_length.max(length);
            }
            Some(TokenType::DocComment) => {
                self.doc_comment_count += 1;
                self.max_comment_length = self.max_comment_length.max(length);
            }
            Some(TokenType::StringLiteral) => {
                self.max_string_length = self.max_string_length.max(length);
            }
            Some(_) => {}
        }
    }

    pub(crate) fn record_invalid_char(&mut self) {
        self.invalid_chars += 1;
    }

    /// Tokens that are neither whitespace nor comments
    pub fn significant_tokens(&self) -> usize {
        self.total_tokens - self.whitespace_tokens - self.comment_count - self.doc_comment_count
    }
}

/// PHP lexer with logging integration and compile-time limits
#[derive(Debug, Default)]
pub struct PhpLexer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl PhpLexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Metrics from the most recent run
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Tokenize PHP source into raw units
    pub fn tokenize_source(&mut self, source: &str) -> Result<Vec<RawToken>, LexerError> {
        log_debug!("Starting lexical analysis",
            "bytes" => source.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut scan = Scan::new(source, self.preferences.collect_detailed_metrics);
        let result = scan.run();
        let position = scan.position;
        let Scan {
            tokens, metrics, ..
        } = scan;
        self.metrics = metrics;

        if let Err(error) = result {
            if matches!(error, LexerError::InvalidCharacter { .. }) {
                self.metrics.record_invalid_char();
            }

            let error_message = if self.preferences.include_position_in_errors {
                format!(
                    "Lexical analysis failed at line {}, column {}",
                    position.line, position.column
                )
            } else {
                "Lexical analysis failed".to_string()
            };

            log_error!(error.error_code(), &error_message,
                span = Span::point(position),
                "error" => &error,
                "tokens_processed" => tokens.len()
            );
            return Err(error);
        }

        if self.preferences.log_token_statistics {
            log_debug!("Token statistics",
                "whitespace" => self.metrics.whitespace_tokens,
                "bare" => self.metrics.bare_tokens,
                "doc_comments" => self.metrics.doc_comment_count,
                "max_string_length" => self.metrics.max_string_length,
                "max_comment_length" => self.metrics.max_comment_length
            );
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed successfully",
            "token_count" => tokens.len(),
            "significant" => self.metrics.significant_tokens(),
            "keywords" => self.metrics.keyword_tokens,
            "identifiers" => self.metrics.identifier_tokens,
            "operators" => self.metrics.operator_tokens,
            "comments" => self.metrics.comment_count + self.metrics.doc_comment_count
        );

        Ok(tokens)
    }
}

impl Lexer for PhpLexer {
    type Error = LexerError;

    fn tokenize(&mut self, source: &str) -> Result<Vec<RawToken>, LexerError> {
        self.tokenize_source(source)
    }
}

// ============================================================================
// SCANNER STATE
// ============================================================================

struct Scan<'a> {
    source: &'a str,
    offset: usize,
    position: Position,
    in_php: bool,
    /// Set after `->`, `?->`, `::`, `function` and `const`
    name_expected: bool,
    detailed: bool,
    tokens: Vec<RawToken>,
    metrics: LexicalMetrics,
}

impl<'a> Scan<'a> {
    fn new(source: &'a str, detailed: bool) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::start(),
            in_php: false,
            name_expected: false,
            detailed,
            tokens: Vec::new(),
            metrics: LexicalMetrics::default(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn run(&mut self) -> Result<(), LexerError> {
        while self.offset < self.source.len() {
            if self.in_php {
                self.scan_php()?;
            } else {
                self.scan_inline()?;
            }
        }
        Ok(())
    }

    fn emit(&mut self, token_type: Option<TokenType>, len: usize) -> Result<(), LexerError> {
        if self.tokens.len() >= MAX_TOKEN_COUNT {
            return Err(LexerError::TooManyTokens {
                count: self.tokens.len() + 1,
            });
        }

        let text = &self.rest()[..len];
        let raw = match token_type {
            Some(token_type) => RawToken::typed(token_type, text),
            None => RawToken::bare(text),
        };
        self.metrics.record_token(&raw, self.detailed);

        match token_type {
            Some(TokenType::Whitespace | TokenType::Comment | TokenType::DocComment) => {}
            Some(TokenType::Operator(operator)) => {
                self.name_expected = operator.introduces_member()
            }
            Some(TokenType::Keyword(keyword)) => self.name_expected = keyword.introduces_name(),
            // `function &name()` returns by reference
            None if text == "&" => {}
            _ => self.name_expected = false,
        }

        self.position = self.position.advance_str(text);
        self.offset += len;
        self.tokens.push(raw);
        Ok(())
    }

    /// Template text up to and including the next open tag
    fn scan_inline(&mut self) -> Result<(), LexerError> {
        let rest = self.rest();
        let Some((at, tag_type, tag_len)) = find_open_tag(rest) else {
            return self.emit(Some(TokenType::InlineHtml), rest.len());
        };

        if at > 0 {
            self.emit(Some(TokenType::InlineHtml), at)?;
        }

        let len = match tag_type {
            TokenType::OpenTag => {
                let after = &self.rest()[tag_len..];
                if after.starts_with("\r\n") {
                    tag_len + 2
                } else if after.starts_with(is_php_whitespace) {
                    tag_len + 1
                } else {
                    tag_len
                }
            }
            _ => tag_len,
        };

        self.in_php = true;
        self.emit(Some(tag_type), len)
    }

    fn scan_php(&mut self) -> Result<(), LexerError> {
        let rest = self.rest();
        let mut chars = rest.chars();
        let Some(current) = chars.next() else {
            return Ok(());
        };
        let next = chars.next();

        if rest.starts_with("?>") {
            self.in_php = false;
            return self.emit(Some(TokenType::CloseTag), 2 + newline_len(&rest[2..]));
        }

        match current {
            c if is_php_whitespace(c) => {
                let len = take_while_len(rest, is_php_whitespace);
                self.emit(Some(TokenType::Whitespace), len)
            }
            '#' => self.scan_line_comment(1),
            '/' if next == Some('/') => self.scan_line_comment(2),
            '/' if next == Some('*') => self.scan_block_comment(),
            '$' if next.is_some_and(is_name_start) => {
                let len = 1 + take_while_len(&rest[1..], is_name_char);
                self.check_identifier(len - 1)?;
                self.emit(Some(TokenType::Variable), len)
            }
            c if is_name_start(c) => self.scan_word(),
            '\\' => self.emit(Some(TokenType::NsSeparator), 1),
            '0'..='9' => self.scan_number(),
            '.' if next.is_some_and(|c| c.is_ascii_digit()) => self.scan_number(),
            '\'' | '"' => self.scan_string(current),
            '<' if heredoc_header(rest).is_some() => self.scan_heredoc(),
            c => {
                if let Some((operator, len)) = match_operator(rest) {
                    self.emit(Some(TokenType::Operator(operator)), len)
                } else if c.is_ascii_punctuation() {
                    self.emit(None, 1)
                } else {
                    Err(LexerError::InvalidCharacter {
                        character: c,
                        line: self.position.line,
                        column: self.position.column,
                    })
                }
            }
        }
    }

    /// `//` and `#` comments, including the terminating newline
    fn scan_line_comment(&mut self, prefix: usize) -> Result<(), LexerError> {
        let len = line_comment_len(self.rest(), prefix);
        if len > MAX_COMMENT_LENGTH {
            return Err(LexerError::CommentTooLong { length: len });
        }
        self.emit(Some(TokenType::Comment), len)
    }

    fn scan_block_comment(&mut self) -> Result<(), LexerError> {
        let rest = self.rest();
        let len = rest[2..]
            .find("*/")
            .map(|end| end + 4)
            .ok_or(LexerError::UnterminatedComment {
                line: self.position.line,
                column: self.position.column,
            })?;
        if len > MAX_COMMENT_LENGTH {
            return Err(LexerError::CommentTooLong { length: len });
        }

        let is_doc = rest.starts_with("/**") && rest[3..].starts_with(is_php_whitespace);
        let token_type = if is_doc {
            TokenType::DocComment
        } else {
            TokenType::Comment
        };
        self.emit(Some(token_type), len)
    }

    fn scan_word(&mut self) -> Result<(), LexerError> {
        let rest = self.rest();
        let len = take_while_len(rest, is_name_char);
        self.check_identifier(len)?;

        let token_type = match Keyword::from_word(&rest[..len]) {
            Some(keyword) if !self.name_expected => TokenType::Keyword(keyword),
            _ => TokenType::Identifier,
        };
        self.emit(Some(token_type), len)
    }

    fn check_identifier(&self, length: usize) -> Result<(), LexerError> {
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong { length });
        }
        Ok(())
    }

    fn scan_number(&mut self) -> Result<(), LexerError> {
        let (token_type, len) = number_len(self.rest());
        self.emit(Some(token_type), len)
    }

    fn scan_string(&mut self, quote: char) -> Result<(), LexerError> {
        let len = quoted_len(self.rest(), quote).ok_or(LexerError::UnterminatedString {
            line: self.position.line,
            column: self.position.column,
        })?;
        if len > MAX_STRING_SIZE {
            return Err(LexerError::StringTooLarge { size: len });
        }
        self.emit(Some(TokenType::StringLiteral), len)
    }

    /// `<<<LABEL` through the closing label, as one literal
    fn scan_heredoc(&mut self) -> Result<(), LexerError> {
        let rest = self.rest();
        let unterminated = LexerError::UnterminatedString {
            line: self.position.line,
            column: self.position.column,
        };
        let (header, label) = heredoc_header(rest).ok_or_else(|| unterminated.clone())?;
        let body = heredoc_body_len(&rest[header..], label).ok_or(unterminated)?;

        let len = header + body;
        if len > MAX_STRING_SIZE {
            return Err(LexerError::StringTooLarge { size: len });
        }
        self.emit(Some(TokenType::StringLiteral), len)
    }
}

// ============================================================================
// CHARACTER CLASSES AND LENGTH SCANNERS
// ============================================================================

fn is_php_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

fn take_while_len(text: &str, predicate: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !predicate(c))
        .map_or(text.len(), |(at, _)| at)
}

/// Length of a single leading line break, if any
fn newline_len(text: &str) -> usize {
    if text.starts_with("\r\n") {
        2
    } else if text.starts_with(['\n', '\r']) {
        1
    } else {
        0
    }
}

/// Earliest `<?php` or `<?=`: (offset, tag type, tag length)
fn find_open_tag(text: &str) -> Option<(usize, TokenType, usize)> {
    text.match_indices("<?").find_map(|(at, _)| {
        let after = &text[at + 2..];
        if after.starts_with('=') {
            return Some((at, TokenType::OpenTagWithEcho, 3));
        }

        after
            .get(..3)
            .filter(|word| word.eq_ignore_ascii_case("php"))?;
        let terminated = after[3..].chars().next().map_or(true, is_php_whitespace);
        terminated.then_some((at, TokenType::OpenTag, 5))
    })
}

fn line_comment_len(text: &str, prefix: usize) -> usize {
    let body = &text[prefix..];
    for (at, c) in body.char_indices() {
        match c {
            '\n' => return prefix + at + 1,
            '\r' => return prefix + at + newline_len(&body[at..]),
            '?' if body[at..].starts_with("?>") => return prefix + at,
            _ => {}
        }
    }
    text.len()
}

/// Quoted literal length including both quotes; `None` if unterminated
fn quoted_len(text: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (at, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(at + c.len_utf8());
        }
    }
    None
}

/// Heredoc or nowdoc opener: (length through its newline, label)
fn heredoc_header(text: &str) -> Option<(usize, &str)> {
    let after = text.strip_prefix("<<<")?;
    let blanks = take_while_len(after, |c: char| matches!(c, ' ' | '\t'));
    let opener = &after[blanks..];
    let quote = opener.chars().next().filter(|&c| matches!(c, '\'' | '"'));
    let labelled = &opener[quote.map_or(0, char::len_utf8)..];
    if !labelled.starts_with(is_name_start) {
        return None;
    }

    let label_len = take_while_len(labelled, is_name_char);
    let mut consumed = 3 + blanks + quote.map_or(0, char::len_utf8) + label_len;
    if let Some(quote) = quote {
        if !labelled[label_len..].starts_with(quote) {
            return None;
        }
        consumed += 1;
    }

    let newline = newline_len(&text[consumed..]);
    (newline > 0).then_some((consumed + newline, &labelled[..label_len]))
}

/// Body length through the closing label, which may be indented
fn heredoc_body_len(body: &str, label: &str) -> Option<usize> {
    let mut line_start = 0;
    loop {
        let line = &body[line_start..];
        let indent = take_while_len(line, |c: char| matches!(c, ' ' | '\t'));
        let candidate = &line[indent..];
        if candidate.starts_with(label) && !candidate[label.len()..].starts_with(is_name_char) {
            return Some(line_start + indent + label.len());
        }
        line_start += line.find('\n')? + 1;
    }
}

fn match_operator(text: &str) -> Option<(Operator, usize)> {
    (2..=Operator::MAX_LEN).rev().find_map(|len| {
        text.get(..len)
            .and_then(Operator::from_symbol)
            .map(|operator| (operator, len))
    })
}

/// ASCII digit run; `_` is accepted between two digits
fn digits_len(text: &str, is_digit: fn(char) -> bool) -> usize {
    let bytes = text.as_bytes();
    let mut len = 0;
    while len < bytes.len() {
        let current = bytes[len] as char;
        let separated = current == '_'
            && len > 0
            && bytes.get(len + 1).is_some_and(|&b| is_digit(b as char));
        if is_digit(current) || separated {
            len += 1;
        } else {
            break;
        }
    }
    len
}

fn prefixed_integer_len(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let is_digit: fn(char) -> bool = match chars.next() {
        Some('x' | 'X') => |c: char| c.is_ascii_hexdigit(),
        Some('b' | 'B') => |c: char| matches!(c, '0' | '1'),
        Some('o' | 'O') => |c: char| matches!(c, '0'..='7'),
        _ => return None,
    };
    let digits = digits_len(&text[2..], is_digit);
    (digits > 0).then_some(2 + digits)
}

fn number_len(text: &str) -> (TokenType, usize) {
    if let Some(len) = prefixed_integer_len(text) {
        return (TokenType::IntegerLiteral, len);
    }

    let is_decimal: fn(char) -> bool = |c: char| c.is_ascii_digit();
    let mut len = digits_len(text, is_decimal);
    let mut is_float = false;

    // `1.` is a float; a leading `.` needs a digit after it
    if text[len..].starts_with('.') && (len > 0 || text[1..].starts_with(is_decimal)) {
        is_float = true;
        len += 1 + digits_len(&text[len + 1..], is_decimal);
    }

    let exponent = &text[len..];
    if exponent.starts_with(['e', 'E']) {
        let after = &exponent[1..];
        let sign = usize::from(after.starts_with(['+', '-']));
        if after[sign..].starts_with(is_decimal) {
            is_float = true;
            len += 1 + sign + digits_len(&after[sign..], is_decimal);
        }
    }

    let token_type = if is_float {
        TokenType::FloatLiteral
    } else {
        TokenType::IntegerLiteral
    };
    (token_type, len)
}
