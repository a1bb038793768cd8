// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
    max_comment_length: usize,
    max_string_size: usize,
    max_identifier_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TOKSEQ_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=TOKSEQ_CONFIG_DIR");

    let profile = env::var("TOKSEQ_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("TOKSEQ_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the token_sequence directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_TOKEN_COUNT: usize = 10_000_000;
    const ABSOLUTE_MAX_STRING_SIZE: usize = 100_000_000;

    if config.lexical.max_token_count == 0 {
        panic!("LIMITS: max_token_count cannot be zero");
    }

    if config.lexical.max_token_count > ABSOLUTE_MAX_TOKEN_COUNT {
        panic!("LIMITS: max_token_count exceeds absolute maximum");
    }

    if config.lexical.max_string_size > ABSOLUTE_MAX_STRING_SIZE {
        panic!("LIMITS: max_string_size exceeds absolute maximum");
    }

    if config.logging.log_buffer_size == 0 {
        panic!("LIMITS: log_buffer_size cannot be zero");
    }

    if profile == "production" && config.lexical.max_token_count > 5_000_000 {
        panic!("PRODUCTION: max_token_count too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_COMMENT_LENGTH: usize = {};
        pub const MAX_STRING_SIZE: usize = {};
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.lexical.max_token_count,
        config.lexical.max_comment_length,
        config.lexical.max_string_size,
        config.lexical.max_identifier_length,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
