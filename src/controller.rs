// File: src/controller.rs
//! Widget controller: the state machine driving fetch -> project -> replace.
//! UI layers invoke the explicit transition methods here; there is no
//! reactive property dispatch and no framework callback.
use std::sync::Arc;
use std::time::Duration;

use chrono::Locale;
use tokio::sync::{Mutex, watch};

use crate::client::{HttpSource, LocalSource, RecordSource};
use crate::config::{SourceKind, WidgetConfig};
use crate::error::{Error, Result};
use crate::model::{DisplayRecord, project};
use crate::store::CardStore;

/// Externally observable widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Loading,
    Failed,
}

/// What became of a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were applied; carries the new record count.
    Applied(usize),
    /// A newer load or a reset started while this one was in flight; its
    /// result was discarded.
    Superseded,
}

struct WidgetInner {
    store: CardStore,
    state: WidgetState,
    generation: u64,
    term: String,
    last_error: Option<Error>,
}

/// One widget instance: a display sequence synchronized from one source.
///
/// Each instance owns its record lists exclusively. Overlapping loads on the
/// same instance are arbitrated by generation tokens rather than mutual
/// exclusion: the fetch itself runs off-lock and a finished load re-checks
/// its token before touching any state.
#[derive(Clone)]
pub struct CardWidget {
    inner: Arc<Mutex<WidgetInner>>,
    source: Arc<dyn RecordSource>,
    locale: Locale,
    loading_hold: Duration,
    changes: Arc<watch::Sender<Vec<DisplayRecord>>>,
}

impl CardWidget {
    /// Build a widget from configuration, wiring the production source.
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let source: Arc<dyn RecordSource> = match config.source {
            SourceKind::Local => Arc::new(LocalSource::new(config.resource.clone())),
            SourceKind::Remote => Arc::new(HttpSource::new(config.endpoint.clone())?),
        };
        Ok(Self::with_source(config, source))
    }

    /// Build a widget around an explicit source. This is the seam tests use
    /// to script fetch timing and failures.
    pub fn with_source(config: &WidgetConfig, source: Arc<dyn RecordSource>) -> Self {
        let (changes, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Mutex::new(WidgetInner {
                store: CardStore::new(),
                state: WidgetState::Idle,
                generation: 0,
                term: config.term.clone(),
                last_error: None,
            })),
            source,
            locale: config.resolve_locale(),
            loading_hold: Duration::from_millis(config.loading_hold_ms),
            changes: Arc::new(changes),
        }
    }

    /// Subscribe to sequence replacements. Every successful load and every
    /// reset publishes the new sequence as the event payload.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DisplayRecord>> {
        self.changes.subscribe()
    }

    pub async fn state(&self) -> WidgetState {
        self.inner.lock().await.state
    }

    pub async fn last_error(&self) -> Option<Error> {
        self.inner.lock().await.last_error.clone()
    }

    /// Snapshot of the current display sequence.
    pub async fn records(&self) -> Vec<DisplayRecord> {
        self.inner.lock().await.store.records().to_vec()
    }

    /// Revision counter of the underlying store; bumps on every swap.
    pub async fn revision(&self) -> u64 {
        self.inner.lock().await.store.revision()
    }

    pub async fn term(&self) -> String {
        self.inner.lock().await.term.clone()
    }

    /// Record a new search term without fetching.
    pub async fn set_term(&self, term: &str) {
        self.inner.lock().await.term = term.to_string();
    }

    /// Update the term, then load with it.
    pub async fn search(&self, term: &str) -> Result<LoadOutcome> {
        self.set_term(term).await;
        self.load().await
    }

    /// One fetch-then-project cycle.
    ///
    /// On success the held sequence is replaced wholesale and subscribers are
    /// notified. On any failure the sequence is left untouched, the widget
    /// lands in `Failed` with the error retained, and the typed error is
    /// returned. A load overtaken by a newer load or a reset discards its
    /// result and reports `Superseded`.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let (token, term) = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = WidgetState::Loading;
            (inner.generation, inner.term.clone())
        };

        let outcome = match self.source.fetch(&term).await {
            Ok(raw) => project(&raw, self.locale),
            Err(e) => Err(e),
        };

        let count = {
            let mut inner = self.inner.lock().await;
            if inner.generation != token {
                log::debug!("discarding stale load result (token {})", token);
                return Ok(LoadOutcome::Superseded);
            }
            match outcome {
                Ok(records) => {
                    let count = records.len();
                    inner.store.replace(records.clone());
                    inner.last_error = None;
                    let _ = self.changes.send(records);
                    count
                }
                Err(e) => {
                    inner.state = WidgetState::Failed;
                    inner.last_error = Some(e.clone());
                    return Err(e);
                }
            }
        };

        // Keep the loading indicator observable for a beat after the data
        // lands. The token is re-checked after the hold so a superseded load
        // cannot clear a newer one's flag.
        if !self.loading_hold.is_zero() {
            tokio::time::sleep(self.loading_hold).await;
        }
        let mut inner = self.inner.lock().await;
        if inner.generation == token {
            inner.state = WidgetState::Idle;
        }
        Ok(LoadOutcome::Applied(count))
    }

    /// Force the widget back to `Idle` with an empty sequence. Any in-flight
    /// load becomes stale.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.store.clear();
        inner.state = WidgetState::Idle;
        inner.last_error = None;
        let _ = self.changes.send(Vec::new());
    }
}
