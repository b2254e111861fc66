//! SIMPLE small-step evaluator.
//!
//! Programs are [`Term`]s built directly by the caller. The [`Reduce`]
//! relation rewrites a `(term, environment)` pair one step at a time, and the
//! [`Machine`] iterates it to a normal form, exposing every intermediate
//! [`Snapshot`]. [`evaluate`] is the big-step reference evaluator: it computes
//! the same outcome directly, without intermediate states.

pub mod big_step;
pub mod env;
pub mod error;
pub mod machine;
pub mod options;
pub mod reducer;

pub use big_step::evaluate;
pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use machine::{Machine, Run, Snapshot, Trace};
pub use options::MachineOptions;
pub use reducer::{step, Reduce};
pub use simple_types::{BinOp, Term, TermError};
