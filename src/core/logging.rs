//! Logging setup
//!
//! Synthesis and reconstruction log per-rebuild summaries at debug
//! level; the default filter keeps those quiet.

/// Initialize env_logger for standalone hosts and tools.
///
/// Defaults to `info` for this crate only; set `RUST_LOG` to override,
/// e.g. `RUST_LOG=voxsculpt=debug` for per-rebuild mesh statistics.
///
/// # Example
/// ```
/// voxsculpt::core::logging::init();
/// log::info!("Sculptor ready");
/// ```
pub fn init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("voxsculpt=info"),
    )
    .format_timestamp_millis()
    .init();
}
