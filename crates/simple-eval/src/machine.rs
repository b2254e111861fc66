//! Machine: drives the reduction relation to a normal form.
//!
//! A run yields the current `(term, env)` pair before every step, and the
//! final pair once more after the term becomes irreducible. The sequence is
//! lazy; it is infinite when the program never terminates, unless the
//! caller set a step limit in [`MachineOptions`].

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::options::MachineOptions;
use crate::reducer::step;
use serde::{Deserialize, Serialize};
use simple_types::Term;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// One trace entry: a term together with the environment it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub term: Term,
    pub env: Environment,
}

impl Snapshot {
    pub fn new(term: Term, env: Environment) -> Self {
        Self { term, env }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.term, self.env)
    }
}

/// The reduction driver, holding the starting state of a run.
#[derive(Debug, Clone)]
pub struct Machine {
    start: Snapshot,
    options: MachineOptions,
}

impl Machine {
    /// Create an unbounded machine.
    pub fn new(term: Term, env: Environment) -> Self {
        Self::with_options(term, env, MachineOptions::default())
    }

    pub fn with_options(term: Term, env: Environment, options: MachineOptions) -> Self {
        Self {
            start: Snapshot::new(term, env),
            options,
        }
    }

    /// Start a lazy run.
    pub fn run(self) -> Run {
        debug!(term = %self.start.term, env = %self.start.env, "machine started");
        Run {
            next: Next::Emit(self.start),
            steps: 0,
            step_limit: self.options.step_limit,
        }
    }

    /// Drive the run to its end and collect it.
    ///
    /// Does not return for a non-terminating program without a step limit.
    pub fn run_to_end(self) -> Trace {
        let mut trace = Trace::default();
        for entry in self.run() {
            match entry {
                Ok(snapshot) => trace.snapshots.push(snapshot),
                Err(err) => trace.error = Some(err),
            }
        }
        trace
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Lazy run
// ══════════════════════════════════════════════════════════════════════════════

enum Next {
    Emit(Snapshot),
    Fail(EvalError),
    Finished,
}

/// Iterator over the snapshots of one machine run.
///
/// A failed step yields the error after the snapshot that caused it; the
/// iterator is exhausted after an error or after the final snapshot.
pub struct Run {
    next: Next,
    steps: u64,
    step_limit: Option<u64>,
}

impl Run {
    /// Steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn advance(&mut self, current: &Snapshot) -> Next {
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                warn!(limit, term = %current.term, "step limit reached");
                return Next::Fail(EvalError::StepLimitExceeded(limit));
            }
        }
        match step(&current.term, &current.env) {
            Ok((term, env)) => {
                self.steps += 1;
                trace!(step = self.steps, %term, "reduced");
                Next::Emit(Snapshot::new(term, env))
            }
            Err(err) => {
                debug!(step = self.steps + 1, %err, "reduction failed");
                Next::Fail(err)
            }
        }
    }
}

impl Iterator for Run {
    type Item = EvalResult<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.next, Next::Finished) {
            Next::Finished => None,
            Next::Fail(err) => Some(Err(err)),
            Next::Emit(current) => {
                if current.term.is_reducible() {
                    self.next = self.advance(&current);
                } else {
                    debug!(steps = self.steps, env = %current.env, "machine halted");
                }
                Some(Ok(current))
            }
        }
    }
}

impl FusedIterator for Run {}

// ══════════════════════════════════════════════════════════════════════════════
// Collected traces
// ══════════════════════════════════════════════════════════════════════════════

/// A finished run: every snapshot produced, plus the error that ended it, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub snapshots: Vec<Snapshot>,
    pub error: Option<EvalError>,
}

#[derive(Serialize)]
struct TraceJson<'a> {
    snapshots: &'a [Snapshot],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Trace {
    /// The last snapshot reached; the normal form when the run succeeded.
    pub fn final_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// `true` when the run ended in a normal form rather than an error.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of reduction steps the trace records.
    pub fn steps(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// Render the trace as JSON. The error, if any, is rendered as its message.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&TraceJson {
            snapshots: &self.snapshots,
            error: self.error.as_ref().map(ToString::to_string),
        })
    }
}
