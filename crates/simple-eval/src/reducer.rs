//! Single-step reduction relation.
//!
//! `step` rewrites a reducible term exactly once against an environment
//! snapshot. Binary constructs reduce leftmost-first: the left operand
//! advances until it is a literal, then the right, then the operator
//! collapses. Statements perform their control effect in one step once
//! their operand is a literal. `While` never loops by itself; it unrolls
//! into an `If` and the driver does the iterating.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use simple_types::{BinOp, Term, TermError};

/// Terms that can take a single reduction step.
pub trait Reduce {
    /// Perform one rewrite. Fails on a terminal term.
    fn reduce_step(&self, env: &Environment) -> EvalResult<(Term, Environment)>;
}

impl Reduce for Term {
    fn reduce_step(&self, env: &Environment) -> EvalResult<(Term, Environment)> {
        step(self, env)
    }
}

/// The transition function `(term, env) -> (term', env')`.
///
/// Deterministic. Asking a normal form (`Number`, `Boolean`, `DoNothing`)
/// to step is a caller bug and reports `TermError::UnsupportedOperation`.
pub fn step(term: &Term, env: &Environment) -> EvalResult<(Term, Environment)> {
    match term {
        Term::Number(_) | Term::Boolean(_) | Term::DoNothing => {
            Err(TermError::UnsupportedOperation {
                operation: "reduce",
                term: term.to_string(),
            }
            .into())
        }

        Term::Variable(name) => env
            .get(name)
            .cloned()
            .map(|value| (value, env.clone()))
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),

        Term::Binary { op, left, right } => {
            if left.is_reducible() {
                let (left, env) = step(left, env)?;
                Ok((Term::binary(*op, left, (**right).clone()), env))
            } else if right.is_reducible() {
                let (right, env) = step(right, env)?;
                Ok((Term::binary(*op, (**left).clone(), right), env))
            } else {
                Ok((apply_binary(*op, left, right)?, env.clone()))
            }
        }

        Term::Assign { name, expr } => {
            if expr.is_reducible() {
                let (expr, env) = step(expr, env)?;
                Ok((Term::assign(name.clone(), expr), env))
            } else {
                Ok((Term::DoNothing, env.set(name.clone(), (**expr).clone())))
            }
        }

        Term::If { cond, conseq, alt } => {
            if cond.is_reducible() {
                let (cond, env) = step(cond, env)?;
                Ok((
                    Term::if_else(cond, (**conseq).clone(), (**alt).clone()),
                    env,
                ))
            } else if cond.bool_value()? {
                Ok(((**conseq).clone(), env.clone()))
            } else {
                Ok(((**alt).clone(), env.clone()))
            }
        }

        Term::Sequence { first, second } => {
            if first.is_do_nothing() {
                Ok(((**second).clone(), env.clone()))
            } else {
                // the environment from an unfinished first statement still flows forward
                let (first, env) = step(first, env)?;
                Ok((Term::sequence(first, (**second).clone()), env))
            }
        }

        Term::While { cond, body } => {
            let unrolled = Term::if_else(
                (**cond).clone(),
                Term::sequence((**body).clone(), term.clone()),
                Term::DoNothing,
            );
            Ok((unrolled, env.clone()))
        }
    }
}

/// Collapse an operator whose operands are both literals.
///
/// Operands are read through their integer encoding, so `true == 1` holds.
/// Arithmetic wraps on overflow; division truncates toward zero.
pub(crate) fn apply_binary(op: BinOp, left: &Term, right: &Term) -> EvalResult<Term> {
    let l = left.value()?;
    let r = right.value()?;
    let result = match op {
        BinOp::Add => Term::Number(l.wrapping_add(r)),
        BinOp::Subtract => Term::Number(l.wrapping_sub(r)),
        BinOp::Multiply => Term::Number(l.wrapping_mul(r)),
        BinOp::Divide => {
            if r == 0 {
                return Err(EvalError::DivisionByZero { dividend: l });
            }
            Term::Number(l.wrapping_div(r))
        }
        BinOp::LessThan => Term::Boolean(l < r),
        BinOp::GreaterThan => Term::Boolean(l > r),
        BinOp::Equals => Term::Boolean(l == r),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: i64) -> Term {
        Term::number(value)
    }

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(apply_binary(BinOp::Add, &n(2), &n(3)), Ok(n(5)));
        assert_eq!(apply_binary(BinOp::Subtract, &n(2), &n(3)), Ok(n(-1)));
        assert_eq!(apply_binary(BinOp::Multiply, &n(4), &n(3)), Ok(n(12)));
        assert_eq!(apply_binary(BinOp::Divide, &n(-7), &n(2)), Ok(n(-3)));
    }

    #[test]
    fn test_apply_wraps_on_overflow() {
        assert_eq!(
            apply_binary(BinOp::Add, &n(i64::MAX), &n(1)),
            Ok(n(i64::MIN))
        );
        assert_eq!(
            apply_binary(BinOp::Divide, &n(i64::MIN), &n(-1)),
            Ok(n(i64::MIN))
        );
    }

    #[test]
    fn test_apply_comparisons() {
        assert_eq!(apply_binary(BinOp::LessThan, &n(1), &n(2)), Ok(Term::boolean(true)));
        assert_eq!(apply_binary(BinOp::GreaterThan, &n(1), &n(2)), Ok(Term::boolean(false)));
        assert_eq!(apply_binary(BinOp::Equals, &n(2), &n(2)), Ok(Term::boolean(true)));
    }

    #[test]
    fn test_apply_rejects_do_nothing_operand() {
        let err = apply_binary(BinOp::Add, &Term::DoNothing, &n(1)).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Term(TermError::UnsupportedOperation { operation: "value", .. })
        ));
    }

    #[test]
    fn test_step_on_normal_form_is_rejected() {
        let env = Environment::new();
        for term in [n(1), Term::boolean(true), Term::DoNothing] {
            let err = step(&term, &env).unwrap_err();
            assert!(matches!(
                err,
                EvalError::Term(TermError::UnsupportedOperation { operation: "reduce", .. })
            ));
        }
    }

    #[test]
    fn test_reduce_trait_matches_step() {
        let env = Environment::new().set("x", n(4));
        let term = Term::add(Term::variable("x"), n(1));
        assert_eq!(term.reduce_step(&env), step(&term, &env));
    }
}
