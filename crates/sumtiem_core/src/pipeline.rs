//! Render-pass driver.
//!
//! # Responsibility
//! - Run facts through materialization, layout and SVG rendering.
//! - Gate commits by epoch so that results of superseded passes are dropped.
//!
//! # Invariants
//! - Only the most recently begun pass can commit.
//! - A failed pass never replaces the committed diagram.

use crate::config::{ConfigError, TimelineConfig};
use crate::diagnostics::LayoutObserver;
use crate::layout::{layout, LayoutError};
use crate::materialize::Materializer;
use crate::model::fact::Fact;
use crate::model::timeline::Timeline;
use crate::ntriples::{parse_ntriples, ParseError};
use crate::render::render_svg;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug)]
pub enum PipelineError {
    Parse(ParseError),
    Layout(LayoutError),
    Config(ConfigError),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Layout(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ParseError> for PipelineError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<LayoutError> for PipelineError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<ConfigError> for PipelineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Ticket for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassToken {
    epoch: u64,
}

impl PassToken {
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// Output of one successful pass, not yet committed.
#[derive(Debug, Clone)]
pub struct RenderedPass {
    pub epoch: u64,
    pub timeline: Timeline,
    pub svg: String,
}

/// Sequential driver holding the last committed diagram.
#[derive(Debug, Clone)]
pub struct TimelinePipeline {
    config: TimelineConfig,
    epoch: u64,
    committed: Option<RenderedPass>,
}

impl TimelinePipeline {
    pub fn new(config: TimelineConfig) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            epoch: 0,
            committed: None,
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Starts a new pass, superseding every earlier token.
    pub fn begin(&mut self) -> PassToken {
        self.epoch += 1;
        PassToken { epoch: self.epoch }
    }

    /// Computes a pass without touching the committed diagram.
    pub fn run(
        &self,
        token: PassToken,
        facts: &[Fact],
        observer: &dyn LayoutObserver,
    ) -> PipelineResult<RenderedPass> {
        let graph = Materializer::new(&self.config.properties, &self.config.namespaces)
            .materialize(facts, observer);
        let timeline = layout(&graph, &self.config, observer)?;
        let svg = render_svg(&timeline, &self.config)?;
        Ok(RenderedPass {
            epoch: token.epoch,
            timeline,
            svg,
        })
    }

    /// Commits `pass` if it belongs to the latest epoch; returns whether it did.
    pub fn commit(&mut self, pass: RenderedPass) -> bool {
        if pass.epoch != self.epoch {
            warn!(
                "event=pass_discarded module=pipeline status=stale epoch={} latest={}",
                pass.epoch, self.epoch
            );
            return false;
        }
        self.store(pass);
        true
    }

    fn store(&mut self, pass: RenderedPass) -> &RenderedPass {
        info!(
            "event=pass_committed module=pipeline status=ok epoch={} events={} extents={}",
            pass.epoch,
            pass.timeline.ordered_event_ids().len(),
            pass.timeline.extents().len()
        );
        self.committed.insert(pass)
    }

    /// Begins, runs and commits one pass.
    ///
    /// On error the previously committed diagram stays current.
    pub fn process(
        &mut self,
        facts: &[Fact],
        observer: &dyn LayoutObserver,
    ) -> PipelineResult<&RenderedPass> {
        let token = self.begin();
        let pass = self.run(token, facts, observer).map_err(|err| {
            warn!(
                "event=pass_failed module=pipeline status=error epoch={} error={}",
                token.epoch, err
            );
            err
        })?;
        // `token` is the latest epoch: nothing can have begun in between.
        Ok(self.store(pass))
    }

    /// Parses N-Triples text and processes the resulting facts.
    pub fn process_text(
        &mut self,
        text: &str,
        observer: &dyn LayoutObserver,
    ) -> PipelineResult<&RenderedPass> {
        let facts = parse_ntriples(text)?;
        self.process(&facts, observer)
    }

    /// Last committed pass, if any.
    pub fn current(&self) -> Option<&RenderedPass> {
        self.committed.as_ref()
    }
}
