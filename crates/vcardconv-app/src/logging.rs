//! Tracing subscriber setup.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Level used until configuration has been loaded.
pub const INITIAL_LEVEL: &str = "warn";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs a stderr subscriber whose filter can be swapped once the
/// configured level is known.
#[must_use]
pub fn init() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(INITIAL_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// Switches the active filter to `level`, keeping the current one if `level`
/// does not parse.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping {INITIAL_LEVEL}");
    }
}
