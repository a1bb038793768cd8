//! Immutable, indexable token sequence
//!
//! A [`Sequence`] keeps every unit the lexer produced, trivia included, and
//! records which positions are significant at construction. Significant
//! lookups then run as binary searches over those positions instead of
//! rescanning the tokens.

use crate::lexical::{Lexer, LexerError, PhpLexer};
use crate::logging::codes;
use crate::sequence::error::{Direction, SequenceError};
use crate::sequence::trivia::TriviaSet;
use crate::tokens::{RawToken, Token, TokenType};
use crate::{log_debug, log_success};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// All tokens; `tokens[i].index() == i`
    tokens: Vec<Token>,
    /// Ascending positions of tokens outside the trivia set
    significant_indices: Vec<usize>,
    trivia: TriviaSet,
}

impl Sequence {
    /// Lex PHP source with the built-in lexer
    pub fn from_source(source: &str) -> Result<Self, LexerError> {
        Self::from_source_with(&mut PhpLexer::new(), source)
    }

    /// Lex source with any lexer; its error is returned unchanged
    pub fn from_source_with<L: Lexer>(lexer: &mut L, source: &str) -> Result<Self, L::Error> {
        let raw_tokens = lexer.tokenize(source)?;
        let sequence = Self::from_raw_tokens(raw_tokens);

        log_success!(codes::success::SEQUENCE_CONSTRUCTED,
            "Token sequence constructed from source",
            "source_bytes" => source.len(),
            "tokens" => sequence.count(),
            "significant_tokens" => sequence.significant_indices.len()
        );
        Ok(sequence)
    }

    /// Wrap already-lexed units, assigning each its position
    pub fn from_raw_tokens(raw_tokens: impl IntoIterator<Item = RawToken>) -> Self {
        Self::assemble(raw_tokens, TriviaSet::default())
    }

    /// Replace the trivia classification
    pub fn with_trivia(mut self, trivia: TriviaSet) -> Self {
        self.trivia = trivia;
        self.rebuild_significant_indices();
        self
    }

    fn assemble(raw_tokens: impl IntoIterator<Item = RawToken>, trivia: TriviaSet) -> Self {
        let tokens = raw_tokens
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Token::from_value(index, raw))
            .collect();

        let mut sequence = Self {
            tokens,
            significant_indices: Vec::new(),
            trivia,
        };
        sequence.rebuild_significant_indices();
        sequence
    }

    fn rebuild_significant_indices(&mut self) {
        self.significant_indices = self
            .tokens
            .iter()
            .filter(|token| !self.trivia.is_trivia(token))
            .map(Token::index)
            .collect();

        log_debug!("Token sequence constructed",
            "total_tokens" => self.tokens.len(),
            "significant_tokens" => self.significant_indices.len(),
            "trivia_types" => self.trivia.types().len()
        );
    }

    // === ACCESS ===

    /// Number of tokens, trivia included
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Bounds-checked access
    pub fn at(&self, index: isize) -> Result<&Token, SequenceError> {
        let position = self.checked_index(index)?;
        Ok(&self.tokens[position])
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn trivia(&self) -> &TriviaSet {
        &self.trivia
    }

    pub fn is_trivia(&self, token: &Token) -> bool {
        self.trivia.is_trivia(token)
    }

    pub fn is_significant(&self, token: &Token) -> bool {
        !self.is_trivia(token)
    }

    fn checked_index(&self, index: isize) -> Result<usize, SequenceError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.tokens.len())
            .ok_or(SequenceError::IndexOutOfBounds {
                count: self.tokens.len(),
                index,
            })
    }

    // === SIGNIFICANT TOKEN SEARCH ===

    /// Nearest significant token strictly before `index`
    pub fn significant_before(&self, index: isize) -> Result<&Token, SequenceError> {
        self.significant_in(Direction::Backward, index)
    }

    /// Nearest significant token strictly after `index`
    pub fn significant_after(&self, index: isize) -> Result<&Token, SequenceError> {
        self.significant_in(Direction::Forward, index)
    }

    /// Nearest significant token from `index` in `direction`.
    ///
    /// The token at `index` itself is never a candidate, whatever its type.
    pub fn significant_in(
        &self,
        direction: Direction,
        index: isize,
    ) -> Result<&Token, SequenceError> {
        let start = self.checked_index(index)?;

        let found = match direction {
            Direction::Backward => {
                let end = self.significant_indices.partition_point(|&i| i < start);
                end.checked_sub(1)
                    .map(|slot| self.significant_indices[slot])
            }
            Direction::Forward => {
                let begin = self.significant_indices.partition_point(|&i| i <= start);
                self.significant_indices.get(begin).copied()
            }
        };

        match found {
            Some(position) => Ok(&self.tokens[position]),
            None => {
                if crate::logging::config::log_failed_searches() {
                    log_debug!("No significant token found",
                        "direction" => direction,
                        "index" => index,
                        "count" => self.tokens.len()
                    );
                }
                Err(SequenceError::NoSignificantTokenFound { direction, index })
            }
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Assembles a sequence unit by unit
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    raw_tokens: Vec<RawToken>,
    trivia: TriviaSet,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_typed(mut self, token_type: TokenType, text: &str) -> Self {
        self.raw_tokens.push(RawToken::typed(token_type, text));
        self
    }

    pub fn push_bare(mut self, text: &str) -> Self {
        self.raw_tokens.push(RawToken::bare(text));
        self
    }

    pub fn push_raw(mut self, raw: RawToken) -> Self {
        self.raw_tokens.push(raw);
        self
    }

    pub fn trivia(mut self, trivia: TriviaSet) -> Self {
        self.trivia = trivia;
        self
    }

    pub fn build(self) -> Sequence {
        Sequence::assemble(self.raw_tokens, self.trivia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Keyword;
    use assert_matches::assert_matches;

    /// `<?php\n\nnamespace Foo;\n\nclass Bar \n{\n}` as the lexer reports it
    fn namespace_and_class() -> Sequence {
        SequenceBuilder::new()
            .push_typed(TokenType::OpenTag, "<?php\n")
            .push_typed(TokenType::Whitespace, "\n")
            .push_typed(TokenType::Keyword(Keyword::Namespace), "namespace")
            .push_typed(TokenType::Whitespace, " ")
            .push_typed(TokenType::Identifier, "Foo")
            .push_bare(";")
            .push_typed(TokenType::Whitespace, "\n\n")
            .push_typed(TokenType::Keyword(Keyword::Class), "class")
            .push_typed(TokenType::Whitespace, " ")
            .push_typed(TokenType::Identifier, "Bar")
            .push_typed(TokenType::Whitespace, " \n")
            .push_bare("{")
            .push_typed(TokenType::Whitespace, "\n")
            .push_bare("}")
            .build()
    }

    #[test]
    fn test_indices_match_positions() {
        let sequence = namespace_and_class();

        assert_eq!(sequence.count(), 14);
        for (position, token) in sequence.iter().enumerate() {
            assert_eq!(token.index(), position);
        }
    }

    #[test]
    fn test_at_returns_token() {
        let sequence = namespace_and_class();
        let token = sequence.at(5).unwrap();

        assert_eq!(token.index(), 5);
        assert_eq!(token.token_type(), TokenType::Identifier);
        assert_eq!(token.content(), ";");
    }

    #[test]
    fn test_at_rejects_out_of_range() {
        let sequence = namespace_and_class();

        assert_matches!(
            sequence.at(-1),
            Err(SequenceError::IndexOutOfBounds { count: 14, index: -1 })
        );
        assert_matches!(
            sequence.at(14),
            Err(SequenceError::IndexOutOfBounds { count: 14, index: 14 })
        );
    }

    #[test]
    fn test_significant_before_skips_whitespace() {
        let sequence = namespace_and_class();
        let token = sequence.significant_before(7).unwrap();

        assert_eq!(token.index(), 5);
        assert!(token.is_content(&[";"]));
    }

    #[test]
    fn test_significant_after_skips_whitespace() {
        let sequence = namespace_and_class();

        assert_eq!(sequence.significant_after(0).unwrap().index(), 2);
        assert_eq!(sequence.significant_after(9).unwrap().index(), 11);
    }

    #[test]
    fn test_start_index_is_never_a_candidate() {
        let sequence = namespace_and_class();

        // index 6 is whitespace, index 4 significant; neither is returned for itself
        assert_eq!(sequence.significant_before(6).unwrap().index(), 5);
        assert_eq!(sequence.significant_before(5).unwrap().index(), 4);
        assert_eq!(sequence.significant_after(4).unwrap().index(), 5);
    }

    #[test]
    fn test_search_fails_at_edges() {
        let sequence = namespace_and_class();

        assert_matches!(
            sequence.significant_before(0),
            Err(SequenceError::NoSignificantTokenFound {
                direction: Direction::Backward,
                index: 0
            })
        );
        assert_matches!(
            sequence.significant_after(13),
            Err(SequenceError::NoSignificantTokenFound {
                direction: Direction::Forward,
                index: 13
            })
        );
    }

    #[test]
    fn test_search_checks_bounds_first() {
        let sequence = namespace_and_class();

        assert_matches!(
            sequence.significant_before(14),
            Err(SequenceError::IndexOutOfBounds { count: 14, index: 14 })
        );
        assert_matches!(
            sequence.significant_after(-3),
            Err(SequenceError::IndexOutOfBounds { count: 14, index: -3 })
        );
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = Sequence::from_raw_tokens(Vec::new());

        assert!(sequence.is_empty());
        assert_eq!(sequence.count(), 0);
        assert_matches!(
            sequence.at(0),
            Err(SequenceError::IndexOutOfBounds { count: 0, index: 0 })
        );
    }

    #[test]
    fn test_custom_trivia_changes_significance() {
        let sequence = namespace_and_class();
        let open_tag_is_trivia = sequence
            .clone()
            .with_trivia(TriviaSet::default().with(TokenType::OpenTag));

        assert_eq!(sequence.significant_before(2).unwrap().index(), 0);
        assert_matches!(
            open_tag_is_trivia.significant_before(2),
            Err(SequenceError::NoSignificantTokenFound { .. })
        );

        let everything = sequence.with_trivia(TriviaSet::empty());
        assert_eq!(everything.significant_before(7).unwrap().index(), 6);
    }

    #[test]
    fn test_iteration_forms_agree() {
        let sequence = namespace_and_class();
        let borrowed: Vec<&str> = (&sequence).into_iter().map(Token::content).collect();
        let owned: Vec<String> = sequence
            .clone()
            .into_iter()
            .map(|token| token.content().to_string())
            .collect();

        assert_eq!(borrowed, owned);
        assert_eq!(sequence.tokens().len(), sequence.len());
        assert_eq!(sequence.get(13).map(Token::content), Some("}"));
        assert!(sequence.get(14).is_none());
    }

    #[test]
    fn test_sequence_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sequence>();
    }
}
