use std::sync::{Arc, OnceLock};
use token_sequence::config::LoggingPreferences;
use token_sequence::logging::{self, codes, LogLevel, LoggingService, MemoryLogger};
use token_sequence::Sequence;

/// Installs one debug-level memory logger for the whole test binary
fn memory_logger() -> &'static Arc<MemoryLogger> {
    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();
    MEMORY.get_or_init(|| {
        let _ = logging::config::init_runtime_preferences(LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: LogLevel::Debug,
            log_failed_searches: true,
        });

        let memory = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
        logging::init_global_logging_with_service(service)
            .expect("global logger is installed once");
        memory
    })
}

#[test]
fn successful_lexing_is_logged() {
    let memory = memory_logger();

    Sequence::from_source("<?php echo 'logged';").unwrap();

    assert!(memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));
    assert!(memory.has_success_with_code(codes::success::SEQUENCE_CONSTRUCTED));
}

#[test]
fn lexer_failures_are_logged_with_their_code() {
    let memory = memory_logger();

    assert!(Sequence::from_source("<?php 'unterminated").is_err());

    let errors = memory.get_events_with_code(codes::lexical::UNTERMINATED_STRING);
    assert!(!errors.is_empty());
    let span = errors[0].span.expect("lexer errors carry a position");
    assert_eq!(span.start().line, 1);
    assert_eq!(span.start().column, 7);
}

#[test]
fn failed_searches_are_logged_at_debug_level() {
    let memory = memory_logger();
    let sequence = Sequence::from_source("<?php\n").unwrap();

    assert!(sequence.significant_after(0).is_err());

    let logged = memory.get_events().into_iter().any(|event| {
        event.is_debug()
            && event.message == "No significant token found"
            && event.context.get("direction").map(String::as_str) == Some("after")
    });
    assert!(logged);
}

#[test]
fn diagnostics_report_initialized_logger() {
    memory_logger();

    let diagnostics = logging::get_system_diagnostics();
    assert!(diagnostics.contains("Initialized: true"));
    assert!(diagnostics.contains("Active level: DEBUG"));
}

#[test]
fn second_initialization_is_rejected() {
    let memory = memory_logger();

    assert!(logging::init_global_logging().is_err());
    assert!(memory.has_error_with_code(codes::system::INITIALIZATION_FAILURE));
}
