//! # Drawlib
//!
//! Library panel core for a drawing canvas:
//! - Multi-select of library items with shift-extended range selection
//! - Resolution of a click or drag to one item or the whole selection
//! - Instancing of item elements with fresh ids and remapped bindings
//! - Drag export as a typed, versioned library document
//!
//! ## Architecture
//!
//! Drawlib is organized as a workspace with multiple crates:
//!
//! 1. **drawlib-core** - Elements, library items, catalog display order,
//!    document format, configuration and errors
//! 2. **drawlib-panel** - Selection, resolver, instancer, drag payloads and
//!    the panel session
//! 3. **drawlib** - Re-exports both and sets up logging

pub use drawlib_core as core;
pub use drawlib_panel as panel;

pub use drawlib_core::{
    Catalog, Element, ElementId, ElementKind, ItemRef, LibraryDocument, LibraryError,
    LibraryItem, LibraryItemId, LibraryItemStatus, LibraryResult, OrderedCatalog, PanelConfig,
    LIBRARY_MIME_TYPE,
};

pub use drawlib_panel::{
    ClickOutcome, DragDataSink, DragPayload, DragPayloadBuilder, ElementInstancer,
    LibraryMenuModel, LibraryPanel, ResolvedTargets, SelectionController, SelectionState,
    Transition,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output format of the global subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, multi-line events.
    #[default]
    Pretty,
    /// One JSON object per event, for hosts that collect logs.
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_format(LogFormat::Pretty)
}

/// Initialize logging with an explicit output format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_format(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::debug!(version = VERSION, build_date = BUILD_DATE, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_and_build_date_are_set() {
        assert!(!VERSION.is_empty());
        assert!(BUILD_DATE.ends_with('Z'));
    }

    #[test]
    fn test_logging_initializes_once() {
        init_logging().unwrap();
        assert!(init_logging_with_format(LogFormat::Json).is_err());
    }
}
