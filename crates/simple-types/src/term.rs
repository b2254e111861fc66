//! Term algebra for the SIMPLE language.
//!
//! A [`Term`] is either a literal (`Number`, `Boolean`), the terminal
//! statement `DoNothing`, or a reducible node: a variable, a binary
//! operator, or a statement. Terms are immutable values; evaluators build
//! new terms rather than editing existing ones.
//!
//! Child terms are boxed to keep the enum size bounded.

use crate::error::TermError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Binary operators. Arithmetic operators produce a `Number`, comparisons a `Boolean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equals,
}

impl BinOp {
    /// Concrete syntax used by the canonical rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equals => "==",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Terms
// ══════════════════════════════════════════════════════════════════════════════

/// A node of a SIMPLE program.
///
/// Equality is structural: two `DoNothing` values always compare equal,
/// which is what `Sequence` relies on to notice its first half has finished.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Number(i64),
    Boolean(bool),
    /// `do-nothing`: the normal form of every statement.
    DoNothing,
    Variable(String),
    /// `left op right`
    Binary {
        op: BinOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    /// `name = expr`
    Assign { name: String, expr: Box<Term> },
    /// `if cond then conseq else alt`
    If {
        cond: Box<Term>,
        conseq: Box<Term>,
        alt: Box<Term>,
    },
    /// `first; second;`
    Sequence { first: Box<Term>, second: Box<Term> },
    /// `while(cond) {body}`
    While { cond: Box<Term>, body: Box<Term> },
}

impl Term {
    // ── Constructors ──────────────────────────────────────────────────────
    //
    // None of these validate anything; an `Assign` reading an unbound
    // variable is legal to build and only fails once it is reduced.

    pub fn number(n: i64) -> Self {
        Self::Number(n)
    }

    pub fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    pub fn do_nothing() -> Self {
        Self::DoNothing
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn binary(op: BinOp, left: Term, right: Term) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Term, right: Term) -> Self {
        Self::binary(BinOp::Add, left, right)
    }

    pub fn subtract(left: Term, right: Term) -> Self {
        Self::binary(BinOp::Subtract, left, right)
    }

    pub fn multiply(left: Term, right: Term) -> Self {
        Self::binary(BinOp::Multiply, left, right)
    }

    pub fn divide(left: Term, right: Term) -> Self {
        Self::binary(BinOp::Divide, left, right)
    }

    pub fn less_than(left: Term, right: Term) -> Self {
        Self::binary(BinOp::LessThan, left, right)
    }

    pub fn greater_than(left: Term, right: Term) -> Self {
        Self::binary(BinOp::GreaterThan, left, right)
    }

    pub fn equals(left: Term, right: Term) -> Self {
        Self::binary(BinOp::Equals, left, right)
    }

    pub fn assign(name: impl Into<String>, expr: Term) -> Self {
        Self::Assign {
            name: name.into(),
            expr: Box::new(expr),
        }
    }

    pub fn if_else(cond: Term, conseq: Term, alt: Term) -> Self {
        Self::If {
            cond: Box::new(cond),
            conseq: Box::new(conseq),
            alt: Box::new(alt),
        }
    }

    pub fn sequence(first: Term, second: Term) -> Self {
        Self::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn while_loop(cond: Term, body: Term) -> Self {
        Self::While {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    // ── Classification ────────────────────────────────────────────────────

    /// `false` exactly for the normal forms: `Number`, `Boolean`, `DoNothing`.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Self::Number(_) | Self::Boolean(_) | Self::DoNothing)
    }

    pub fn is_do_nothing(&self) -> bool {
        matches!(self, Self::DoNothing)
    }

    // ── Literal coercions ─────────────────────────────────────────────────

    /// Integer encoding of a literal. Booleans encode as `false = 0`, `true = 1`.
    pub fn value(&self) -> crate::Result<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(b) => Ok(i64::from(*b)),
            _ => Err(TermError::unsupported("value", self)),
        }
    }

    /// Truth value of a literal. Numbers are true when nonzero.
    pub fn bool_value(&self) -> crate::Result<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Number(n) => Ok(*n != 0),
            _ => Err(TermError::unsupported("bool_value", self)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::DoNothing => f.write_str("do-nothing"),
            Self::Variable(name) => f.write_str(name),
            Self::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            Self::Assign { name, expr } => write!(f, "{name} = {expr}"),
            Self::If { cond, conseq, alt } => write!(f, "if {cond} then {conseq} else {alt}"),
            Self::Sequence { first, second } => write!(f, "{first}; {second};"),
            Self::While { cond, body } => write!(f, "while({cond}) {{{body}}}"),
        }
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_are_irreducible() {
        assert!(!Term::number(7).is_reducible());
        assert!(!Term::boolean(true).is_reducible());
        assert!(!Term::do_nothing().is_reducible());
        assert!(Term::variable("x").is_reducible());
        assert!(Term::add(Term::number(1), Term::number(2)).is_reducible());
    }

    #[test]
    fn test_value_encodes_booleans_as_integers() {
        assert_eq!(Term::number(-4).value(), Ok(-4));
        assert_eq!(Term::boolean(true).value(), Ok(1));
        assert_eq!(Term::boolean(false).value(), Ok(0));
    }

    #[test]
    fn test_bool_value_treats_nonzero_as_true() {
        assert_eq!(Term::number(0).bool_value(), Ok(false));
        assert_eq!(Term::number(-1).bool_value(), Ok(true));
        assert_eq!(Term::boolean(false).bool_value(), Ok(false));
    }

    #[test]
    fn test_coercions_reject_non_literals() {
        let stmt = Term::if_else(Term::boolean(true), Term::do_nothing(), Term::do_nothing());
        assert!(matches!(
            stmt.value(),
            Err(TermError::UnsupportedOperation { operation: "value", .. })
        ));
        assert!(matches!(
            Term::do_nothing().bool_value(),
            Err(TermError::UnsupportedOperation { operation: "bool_value", .. })
        ));
    }

    #[test]
    fn test_do_nothing_is_structurally_equal() {
        assert_eq!(Term::do_nothing(), Term::DoNothing);
        assert!(Term::do_nothing().is_do_nothing());
    }

    #[test]
    fn test_operator_symbols() {
        let symbols: Vec<_> = [
            BinOp::Add,
            BinOp::Subtract,
            BinOp::Multiply,
            BinOp::Divide,
            BinOp::LessThan,
            BinOp::GreaterThan,
            BinOp::Equals,
        ]
        .iter()
        .map(|op| op.symbol())
        .collect();
        assert_eq!(symbols, ["+", "-", "*", "/", "<", ">", "=="]);
    }
}
