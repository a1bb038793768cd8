use assert_matches::assert_matches;
use token_sequence::{
    Direction, Keyword, LexerError, Operator, RawToken, Sequence, SequenceError, Token, TokenType,
};

const NAMESPACE_AND_CLASS: &str = "<?php\n\nnamespace Foo;\n\nclass Bar \n{\n}";

const COMMENTED_CLASS: &str = r#"<?php

/**
 * A file-level comment
 */
namespace Foo;

class Bar /* implements Baz */
{
    private $bar; // really?

    public function __construct(int $bar)
    {
        $this->bar = $bar; # makes sense
    }
}"#;

const TRAILING_COMMENT: &str = "<?php\n\nnamespace Foo;\n\nclass Bar \n{\n}\n\n/* a comment*/";

fn sequence(source: &str) -> Sequence {
    Sequence::from_source(source).unwrap()
}

#[test]
fn from_source_keeps_every_unit() {
    let sequence = sequence(NAMESPACE_AND_CLASS);

    assert_eq!(sequence.count(), 14);
    let rebuilt: String = sequence.iter().map(Token::content).collect();
    assert_eq!(rebuilt, NAMESPACE_AND_CLASS);
}

#[test]
fn token_indices_equal_positions() {
    let sequence = sequence(COMMENTED_CLASS);

    for position in 0..sequence.count() {
        let token = sequence.at(position as isize).unwrap();
        assert_eq!(token.index(), position);
    }
}

#[test]
fn at_is_stable_across_calls() {
    let sequence = sequence(COMMENTED_CLASS);

    assert_eq!(sequence.at(22).unwrap(), sequence.at(22).unwrap());
    assert_eq!(
        sequence.at(22).unwrap(),
        &Token::from_type_and_content(22, TokenType::Comment, "// really?\n")
    );
}

#[test]
fn at_rejects_indices_outside_the_sequence() {
    let sequence = sequence(NAMESPACE_AND_CLASS);
    let count = sequence.count() as isize;

    for index in [-1, count, count + 1] {
        let error = sequence.at(index).unwrap_err();
        assert_eq!(
            error,
            SequenceError::IndexOutOfBounds {
                count: 14,
                index
            }
        );
        assert_eq!(
            error.to_string(),
            format!(
                "Index needs to be equal to or greater than \"0\" and less than \"14\", but \"{}\" is not.",
                index
            )
        );
    }
}

#[test]
fn significant_searches_check_bounds() {
    let sequence = sequence(NAMESPACE_AND_CLASS);

    for index in [-1, 14, 15] {
        assert_matches!(
            sequence.significant_before(index),
            Err(SequenceError::IndexOutOfBounds { count: 14, .. })
        );
        assert_matches!(
            sequence.significant_after(index),
            Err(SequenceError::IndexOutOfBounds { count: 14, .. })
        );
    }
}

#[test]
fn significant_before_skips_trivia() {
    let sequence = sequence(COMMENTED_CLASS);
    let cases = [
        ("namespace to open tag", 4, 0),
        ("namespace name to namespace", 6, 4),
        ("class to semicolon", 9, 7),
        ("opening brace to class name", 15, 11),
        ("constructor visibility to semicolon", 24, 20),
        ("closing brace to semicolon", 48, 44),
    ];

    for (name, index, expected) in cases {
        let token = sequence.significant_before(index).unwrap();
        assert_eq!(token, sequence.at(expected).unwrap(), "{}", name);
    }
}

#[test]
fn significant_after_skips_trivia() {
    let sequence = sequence(COMMENTED_CLASS);
    let cases = [
        ("open tag to namespace", 0, 4),
        ("namespace to namespace name", 4, 6),
        ("semicolon to class", 7, 9),
        ("class name to opening brace", 11, 15),
        ("semicolon to constructor visibility", 20, 24),
        ("semicolon to closing brace", 44, 48),
    ];

    for (name, index, expected) in cases {
        let token = sequence.significant_after(index).unwrap();
        assert_eq!(token, sequence.at(expected).unwrap(), "{}", name);
    }
}

#[test]
fn significant_before_first_token_fails() {
    let sequence = sequence(NAMESPACE_AND_CLASS);
    let error = sequence.significant_before(0).unwrap_err();

    assert_eq!(
        error,
        SequenceError::NoSignificantTokenFound {
            direction: Direction::Backward,
            index: 0
        }
    );
    assert_eq!(
        error.to_string(),
        "Could not find a significant token before index \"0\"."
    );
}

#[test]
fn significant_before_in_namespace_example() {
    let sequence = sequence(NAMESPACE_AND_CLASS);
    let token = sequence.significant_before(7).unwrap();

    assert_eq!(token.index(), 5);
    assert_eq!(token.content(), ";");
    assert_eq!(token.token_type(), TokenType::Identifier);
}

#[test]
fn significant_after_trailing_trivia_fails() {
    let sequence = sequence(TRAILING_COMMENT);
    assert_eq!(sequence.count(), 16);

    for index in [13, 15] {
        let error = sequence.significant_after(index).unwrap_err();
        assert_eq!(
            error,
            SequenceError::NoSignificantTokenFound {
                direction: Direction::Forward,
                index
            }
        );
        assert_eq!(
            error.to_string(),
            format!("Could not find a significant token after index \"{}\".", index)
        );
    }
}

#[test]
fn member_names_are_not_keywords() {
    let sequence = sequence(
        "<?php final class Example { public function class(): string { return self::class; } }",
    );

    let class_keywords = sequence
        .iter()
        .filter(|token| token.is_keyword(Keyword::Class))
        .count();
    assert_eq!(class_keywords, 1);
}

#[test]
fn member_access_after_object_operator() {
    let sequence = sequence(COMMENTED_CLASS);

    assert!(sequence
        .at(38)
        .unwrap()
        .is_type(&[TokenType::Operator(Operator::ObjectOperator)]));
    assert!(sequence.at(39).unwrap().is_type(&[TokenType::Identifier]));
    assert!(sequence.at(30).unwrap().is_content(&["int"]));
    assert_eq!(sequence.significant_after(37).unwrap().index(), 38);
}

#[test]
fn raw_tokens_build_equivalent_sequence() {
    let from_raw = Sequence::from_raw_tokens(vec![
        RawToken::typed(TokenType::OpenTag, "<?php\n"),
        RawToken::typed(TokenType::Keyword(Keyword::Echo), "echo"),
        RawToken::typed(TokenType::Whitespace, " "),
        RawToken::typed(TokenType::IntegerLiteral, "1"),
        RawToken::bare(";"),
    ]);

    assert_eq!(from_raw, sequence("<?php\necho 1;"));
}

#[test]
fn heredoc_with_apostrophe_is_one_literal() {
    let sequence = sequence("<?php $s = <<<EOT\nit's\nEOT;\n");

    assert_eq!(sequence.count(), 8);
    assert!(sequence.at(5).unwrap().is_type(&[TokenType::StringLiteral]));
    assert_eq!(sequence.significant_after(5).unwrap().content(), ";");
}

#[test]
fn lexer_errors_propagate_unchanged() {
    assert_matches!(
        Sequence::from_source("<?php /* never closed"),
        Err(LexerError::UnterminatedComment { line: 1, column: 7 })
    );
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("syntax error at offset {0}")]
struct SyntaxError(usize);

#[test]
fn foreign_lexers_plug_in() {
    let mut words = |source: &str| -> Result<Vec<RawToken>, SyntaxError> {
        Ok(source
            .split_inclusive(' ')
            .map(|word| match word.trim_end() {
                "" => RawToken::typed(TokenType::Whitespace, word),
                _ => RawToken::bare(word),
            })
            .collect())
    };
    let sequence = Sequence::from_source_with(&mut words, "a b").unwrap();
    assert_eq!(sequence.count(), 2);
    assert_eq!(sequence.at(1).unwrap().content(), "b");

    let mut failing = |_: &str| -> Result<Vec<RawToken>, SyntaxError> { Err(SyntaxError(3)) };
    assert_eq!(
        Sequence::from_source_with(&mut failing, "anything"),
        Err(SyntaxError(3))
    );
}
