//! Big-step reference evaluator.
//!
//! Computes the outcome of a term directly, with no intermediate states.
//! Operand order, coercions and error policy are shared with the small-step
//! reducer, so for every terminating program the two agree on the final
//! term and environment.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::reducer::apply_binary;
use simple_types::Term;
use tracing::debug;

/// Evaluate `term` under `env` to a normal form and the resulting environment.
///
/// Statements evaluate to `DoNothing`; expressions to a literal.
/// A `While` whose condition never becomes false does not return.
pub fn evaluate(term: &Term, env: &Environment) -> EvalResult<(Term, Environment)> {
    debug!(%term, %env, "big-step evaluation");
    eval_term(term, env)
}

fn eval_term(term: &Term, env: &Environment) -> EvalResult<(Term, Environment)> {
    match term {
        Term::Number(_) | Term::Boolean(_) | Term::DoNothing => Ok((term.clone(), env.clone())),

        Term::Variable(name) => env
            .get(name)
            .cloned()
            .map(|value| (value, env.clone()))
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),

        Term::Binary { op, left, right } => {
            let (left, env) = eval_term(left, env)?;
            let (right, env) = eval_term(right, &env)?;
            Ok((apply_binary(*op, &left, &right)?, env))
        }

        Term::Assign { name, expr } => {
            let (value, env) = eval_term(expr, env)?;
            Ok((Term::DoNothing, env.set(name.clone(), value)))
        }

        Term::If { cond, conseq, alt } => {
            let (cond, env) = eval_term(cond, env)?;
            if cond.bool_value()? {
                eval_term(conseq, &env)
            } else {
                eval_term(alt, &env)
            }
        }

        Term::Sequence { first, second } => {
            let (_, env) = eval_term(first, env)?;
            eval_term(second, &env)
        }

        Term::While { cond, body } => {
            let mut env = env.clone();
            loop {
                let (test, next) = eval_term(cond, &env)?;
                if !test.bool_value()? {
                    return Ok((Term::DoNothing, next));
                }
                let (_, next) = eval_term(body, &next)?;
                env = next;
            }
        }
    }
}
