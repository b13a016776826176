//! Structured event stream.
//!
//! The engine notifies a [`MetricEventPublisher`] whenever an assault
//! actually fires — never when nothing happens. Events can additionally
//! be written out as newline-delimited JSON (JSONL), each line carrying
//! a sequence number so consumers can detect gaps and reordering.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assault::{AssaultScope, ChaosTarget};

// ---------------------------------------------------------------------------
// Publisher collaborator
// ---------------------------------------------------------------------------

/// Notification that an assault fired for an invocation.
#[derive(Debug, Clone, Serialize)]
pub struct AssaultFired {
    /// Kind of the assault that fired (e.g. `"latency"`).
    pub kind: String,
    /// Scope partition the assault belongs to.
    pub scope: AssaultScope,
    /// Execution-context tag of the invocation, if any.
    pub target: Option<ChaosTarget>,
    /// Fully-qualified target name, if any.
    pub target_name: Option<String>,
}

/// Collaborator notified with the chosen assault's identity on every
/// successful attack. Not called when nothing fires.
pub trait MetricEventPublisher: Send + Sync {
    /// Receives one notification per fired assault.
    fn publish(&self, event: &AssaultFired);
}

/// Publisher that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl MetricEventPublisher for NoopPublisher {
    fn publish(&self, _event: &AssaultFired) {}
}

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A discrete event in an engine run, as written to a JSONL stream.
///
/// Each variant is tagged with `"type"` when serialized so consumers can
/// dispatch on the event kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A simulation run has started.
    SimulationStarted {
        /// When the run started.
        timestamp: DateTime<Utc>,
        /// Number of invocations the run will evaluate.
        invocations: u64,
        /// RNG seed, when the run is seeded.
        seed: Option<u64>,
    },

    /// An assault fired.
    AssaultFired {
        /// When the assault fired.
        timestamp: DateTime<Utc>,
        /// Kind of the assault that fired.
        kind: String,
        /// Scope partition the assault belongs to.
        scope: AssaultScope,
        /// Execution-context tag of the invocation, if any.
        target: Option<ChaosTarget>,
        /// Fully-qualified target name, if any.
        target_name: Option<String>,
    },

    /// A simulation run has finished.
    SimulationFinished {
        /// When the run finished.
        timestamp: DateTime<Utc>,
        /// Invocations that resulted in an attack.
        attacked: u64,
        /// Total invocations evaluated.
        total: u64,
    },
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Pairs an [`Event`] with its position in the stream.
#[derive(Debug, Serialize)]
struct EventEnvelope {
    /// Zero-based position in the stream.
    sequence: u64,
    /// The event itself, flattened so its fields sit next to `sequence`.
    #[serde(flatten)]
    event: Event,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Buffered JSONL event writer, shareable across threads.
///
/// [`emit`](Self::emit) stamps the next sequence number, writes the
/// event as one JSON line, and flushes. Serialization or I/O failures
/// are swallowed: the event stream must never take down the host the
/// engine is embedded in.
pub struct EventEmitter {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
    sequence: AtomicU64,
}

// Manual impl since the boxed writer is not Debug.
impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("sequence", &self.sequence.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl EventEmitter {
    /// Creates an emitter writing to an arbitrary sink.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates an emitter appending to a file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened for appending.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self::new(Box::new(file)))
    }

    /// Emits one event as a JSON line and flushes.
    pub fn emit(&self, event: Event) {
        let envelope = EventEnvelope {
            sequence: self.sequence.fetch_add(1, Ordering::SeqCst),
            event,
        };
        let Ok(line) = serde_json::to_string(&envelope) else {
            return;
        };
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }
}

/// Publisher that forwards fired assaults to a JSONL emitter.
#[derive(Debug)]
pub struct EmitterPublisher {
    emitter: std::sync::Arc<EventEmitter>,
}

impl EmitterPublisher {
    /// Wraps an emitter as a publisher.
    #[must_use]
    pub fn new(emitter: std::sync::Arc<EventEmitter>) -> Self {
        Self { emitter }
    }
}

impl MetricEventPublisher for EmitterPublisher {
    fn publish(&self, event: &AssaultFired) {
        self.emitter.emit(Event::AssaultFired {
            timestamp: Utc::now(),
            kind: event.kind.clone(),
            scope: event.scope,
            target: event.target,
            target_name: event.target_name.clone(),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
