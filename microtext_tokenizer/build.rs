// build.rs - TOML-driven compile-time constant generation
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
    long_input_warning_chars: usize,
    metrics_buffer_size: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MICROTEXT_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=MICROTEXT_CONFIG_DIR");

    let profile =
        env::var("MICROTEXT_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("MICROTEXT_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of microtext_tokenizer directory)
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
    const ABSOLUTE_MAX_WARNING_CHARS: usize = 1_000_000;
    const ABSOLUTE_MAX_LOG_BUFFER: usize = 100_000;

    if config.lexical.long_input_warning_chars == 0
        || config.lexical.long_input_warning_chars > ABSOLUTE_MAX_WARNING_CHARS
    {
        panic!("LIMITS: long_input_warning_chars must be in 1..={}", ABSOLUTE_MAX_WARNING_CHARS);
    }
    if config.lexical.metrics_buffer_size == 0 {
        panic!("LIMITS: metrics_buffer_size cannot be zero");
    }
    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > ABSOLUTE_MAX_LOG_BUFFER {
        panic!("LIMITS: log_buffer_size must be in 100..={}", ABSOLUTE_MAX_LOG_BUFFER);
    }
    if config.logging.security_min_log_level > 2 {
        panic!("SECURITY: security_min_log_level too high (max: 2)");
    }

    if profile == "production" && config.lexical.long_input_warning_chars > 100_000 {
        panic!("PRODUCTION: long_input_warning_chars too high for production");
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
        pub const LONG_INPUT_WARNING_CHARS: usize = {};
        pub const METRICS_BUFFER_SIZE: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        config.lexical.long_input_warning_chars,
        config.lexical.metrics_buffer_size,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
