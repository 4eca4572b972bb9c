use super::*;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn unset_rust_log_defaults_to_info() {
    assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn rust_log_directives_are_honored() {
    assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn unparseable_rust_log_falls_back_to_info() {
    assert_eq!(log_filter(Some("calentasker=loud")).max_level_hint(), Some(LevelFilter::INFO));
}
