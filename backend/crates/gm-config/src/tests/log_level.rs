use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_log_level_parses_known_names_case_insensitively() {
    assert_eq!(LogLevel::parse_lenient("DEBUG").0, LevelFilter::Debug);
    assert_eq!(LogLevel::parse_lenient("warn").0, LevelFilter::Warn);
    assert_eq!(LogLevel::parse_lenient("off").0, LevelFilter::Off);
}

#[test]
fn test_log_level_unknown_name_falls_back_to_info() {
    assert_eq!(LogLevel::parse_lenient("verbose").0, LevelFilter::Info);
}

#[test]
fn test_log_level_from_toml_value() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let parsed: Wrapper = toml::from_str("level = \"trace\"").unwrap();
    assert_eq!(parsed.level.0, LevelFilter::Trace);
}
