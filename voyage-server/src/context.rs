//! Schedule setup and the shared handle the server computes against.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::domain::{Anchor, DisplayZone, Occurrence, Window};
use crate::keywords::{AliasTable, KeywordError, load_keywords};
use crate::schedule;

/// Error returned when computing against a schedule that was never set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Setup has not completed successfully
    #[error("schedule not initialized: keyword table has not been loaded")]
    NotInitialized,
}

/// Everything a voyage search runs against.
#[derive(Debug, Clone)]
pub struct ScheduleContext {
    pub anchor: Anchor,
    pub aliases: AliasTable,
    pub zone: DisplayZone,
}

impl ScheduleContext {
    /// Create a context from its parts.
    pub fn new(anchor: Anchor, aliases: AliasTable, zone: DisplayZone) -> Self {
        Self {
            anchor,
            aliases,
            zone,
        }
    }

    /// Load the keyword table and build a context around it.
    pub fn setup(source: &ScheduleSource) -> Result<Self, KeywordError> {
        let aliases = load_keywords(&source.keywords_path)?;
        Ok(Self::new(source.anchor.clone(), aliases, source.zone.clone()))
    }

    /// Find voyages matching `tokens` in `window`, normalizing the window in place.
    pub fn compute<I, S>(&self, tokens: I, window: &mut Window) -> Vec<Occurrence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        schedule::compute(&self.anchor, &self.aliases, tokens, window, &self.zone)
    }
}

/// Where a schedule context is built from.
#[derive(Debug, Clone)]
pub struct ScheduleSource {
    pub keywords_path: PathBuf,
    pub anchor: Anchor,
    pub zone: DisplayZone,
}

impl ScheduleSource {
    /// Source reading keywords from `keywords_path`, with the default anchor and UTC display.
    pub fn new(keywords_path: impl Into<PathBuf>) -> Self {
        Self {
            keywords_path: keywords_path.into(),
            anchor: Anchor::default(),
            zone: DisplayZone::utc(),
        }
    }

    /// Use a different display zone.
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Use a different anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Thread-safe schedule handle with support for reloading the keyword file.
///
/// Starts out uninitialized; every search fails with
/// [`ScheduleError::NotInitialized`] until a load succeeds.
#[derive(Clone)]
pub struct SharedSchedule {
    inner: Arc<RwLock<Option<Arc<ScheduleContext>>>>,
    source: Arc<ScheduleSource>,
}

impl SharedSchedule {
    /// Create a handle that has not loaded anything yet.
    pub fn uninitialized(source: ScheduleSource) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            source: Arc::new(source),
        }
    }

    /// Create a handle around an already-built context.
    pub fn from_context(source: ScheduleSource, context: ScheduleContext) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(context)))),
            source: Arc::new(source),
        }
    }

    /// Create a handle and load it, failing if the keyword file cannot be loaded.
    pub async fn setup(source: ScheduleSource) -> Result<Self, KeywordError> {
        let schedule = Self::uninitialized(source);
        schedule.refresh().await?;
        Ok(schedule)
    }

    /// Reload the keyword file.
    ///
    /// On success, replaces the current context and returns the number of
    /// aliases. On failure, the existing context (if any) is kept and the
    /// error is returned.
    pub async fn refresh(&self) -> Result<usize, KeywordError> {
        let context = match ScheduleContext::setup(&self.source) {
            Ok(context) => context,
            Err(e) => {
                error!(
                    path = %self.source.keywords_path.display(),
                    error = %e,
                    "failed to load keyword table"
                );
                return Err(e);
            }
        };
        let count = context.aliases.len();

        let mut guard = self.inner.write().await;
        *guard = Some(Arc::new(context));
        info!(aliases = count, "keyword table loaded");

        Ok(count)
    }

    /// The current context.
    pub async fn context(&self) -> Result<Arc<ScheduleContext>, ScheduleError> {
        let guard = self.inner.read().await;
        guard.clone().ok_or(ScheduleError::NotInitialized)
    }

    /// Whether a keyword table has been loaded.
    pub async fn is_initialized(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Find voyages matching `tokens` in `window` against the current context.
    pub async fn compute<I, S>(
        &self,
        tokens: I,
        window: &mut Window,
    ) -> Result<Vec<Occurrence>, ScheduleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let context = self.context().await?;
        Ok(context.compute(tokens, window))
    }
}
