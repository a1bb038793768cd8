use std::io::Write;
use token_sequence::config::RuntimeConfig;
use token_sequence::lexical::create_lexer_with_preferences;
use token_sequence::{PhpLexer, Sequence};

#[test]
fn lexer_honours_preferences_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokseq.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[lexical]\ncollect_detailed_metrics = false\nlog_token_statistics = true"
    )
    .unwrap();

    let config = RuntimeConfig::from_file(&path).unwrap();
    let mut lexer = create_lexer_with_preferences(config.lexical);
    let sequence = Sequence::from_source_with(&mut lexer, "<?php class A {}").unwrap();

    assert_eq!(lexer.metrics().total_tokens, sequence.count());
    assert_eq!(lexer.metrics().keyword_tokens, 1);
    assert!(lexer.metrics().keyword_usage.is_empty());
    assert!(lexer.preferences().log_token_statistics);
}

#[test]
fn detailed_metrics_count_each_keyword() {
    let config = RuntimeConfig::from_toml_str("[lexical]\ncollect_detailed_metrics = true").unwrap();
    let mut lexer = PhpLexer::with_preferences(config.lexical);

    Sequence::from_source_with(&mut lexer, "<?php if ($a) { return; } else { return; }").unwrap();

    let usage = &lexer.metrics().keyword_usage;
    assert_eq!(usage.get("return"), Some(&2));
    assert_eq!(usage.get("if"), Some(&1));
    assert_eq!(usage.get("else"), Some(&1));
}
