use log::LevelFilter;
use pretty_env_logger::env_logger::Target;

/// Timed, colored records on stderr so stdout carries only probe output.
/// `RUST_LOG` overrides the default `Info` level. Call once per process.
pub fn init() {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stderr)
        .init();
}
