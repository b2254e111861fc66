//! Immutable variable environment for the SIMPLE evaluators.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use simple_types::Term;
use std::fmt;

/// A snapshot mapping variable names to literal values.
///
/// Updates are copy-on-write: [`Environment::set`] returns a new snapshot and
/// leaves `self` untouched. Bindings live in an `im::OrdMap`, so cloning a
/// snapshot is O(1) and an update shares structure with its source.
///
/// Every stored value is irreducible (`Number`, `Boolean` or `DoNothing`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: OrdMap<String, Term>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    /// Copy with `name` bound to `value`, overwriting any prior binding.
    pub fn set(&self, name: impl Into<String>, value: Term) -> Self {
        debug_assert!(
            !value.is_reducible(),
            "environment values must be irreducible, got `{value}`"
        );
        Self {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Term)> {
        self.bindings.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Term)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Term)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |env, (name, value)| env.set(name, value))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_leaves_source_untouched() {
        let before = Environment::new().set("x", Term::number(1));
        let after = before.set("x", Term::number(2)).set("y", Term::boolean(true));

        assert_eq!(before.get("x"), Some(&Term::number(1)));
        assert!(!before.contains("y"));
        assert_eq!(after.get("x"), Some(&Term::number(2)));
        assert_eq!(after.get("y"), Some(&Term::boolean(true)));
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_missing_binding() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.get("z"), None);
    }

    #[test]
    fn test_from_iter_and_display_are_name_ordered() {
        let env: Environment = [
            ("y", Term::boolean(false)),
            ("x", Term::number(3)),
            ("done", Term::do_nothing()),
        ]
        .into_iter()
        .collect();
        assert_eq!(env.to_string(), "{done: do-nothing, x: 3, y: false}");
    }

    #[test]
    fn test_structural_equality() {
        let a = Environment::new().set("x", Term::number(1)).set("y", Term::number(2));
        let b = Environment::new().set("y", Term::number(2)).set("x", Term::number(1));
        assert_eq!(a, b);
    }
}
