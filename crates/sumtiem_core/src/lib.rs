//! Core of the sumtiem timeline renderer.
//! Turns semantic-web facts into a laid-out diagram of events and extents.

pub mod config;
pub mod diagnostics;
pub mod layout;
pub mod logging;
pub mod materialize;
pub mod model;
pub mod ntriples;
pub mod pipeline;
pub mod render;
pub mod text;

pub use config::{ConfigError, TimelineConfig};
pub use diagnostics::{LayoutObserver, LogObserver, NoopObserver};
pub use layout::{layout, place, resolve, LayoutError, LayoutResult};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use materialize::{materialize, Materializer, Namespaces, PropertyMap};
pub use model::fact::{Fact, Term};
pub use model::resource::{Resource, ResourceGraph};
pub use model::timeline::{Event, EventId, Extent, ExtentId, Timeline};
pub use ntriples::{parse_ntriples, write_ntriples, ParseError};
pub use pipeline::{PassToken, PipelineError, PipelineResult, RenderedPass, TimelinePipeline};
pub use render::{render_svg, render_timeline, DrawTarget, SvgDocument};
pub use text::{wrap, TextBox};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
