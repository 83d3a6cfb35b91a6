//! Substitutions, aka. finite mappings from variable names to terms.

use std::collections::BTreeMap;

use crate::structures::{literal::Literal, term::Term};

/// A finite mapping from variable names to [terms](Term).
///
/// A substitution is built up during a single unification attempt and is local to that attempt.
/// [Application](Substitution::apply) resolves bound variables recursively, so the result of
/// applying a substitution contains no bound variable --- the occurs-check guarantees the
/// recursion is well-founded.
///
/// A `BTreeMap` backs the mapping so iteration, and with it every derived trace, is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: BTreeMap<String, Term>,
}

impl Substitution {
    /// Binds `variable` to `term`, without inspection.
    ///
    /// The caller upholds acyclicity, via the occurs-check.
    pub(super) fn bind(&mut self, variable: &str, term: Term) {
        self.bindings.insert(variable.to_string(), term);
    }

    /// The term bound to `variable`, if any.
    pub fn binding(&self, variable: &str) -> Option<&Term> {
        self.bindings.get(variable)
    }

    /// Whether the substitution binds no variable.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The term with the substitution applied, recursively resolving bound variables.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(v) => match self.bindings.get(v) {
                Some(bound) => self.apply(bound),
                None => term.clone(),
            },

            Term::Constant(_) => term.clone(),

            Term::Function(name, args) => Term::Function(
                name.clone(),
                args.iter().map(|arg| self.apply(arg)).collect(),
            ),
        }
    }

    /// The literal with the substitution applied to each term.
    pub fn apply_literal(&self, literal: &Literal) -> Literal {
        Literal {
            negated: literal.negated,
            predicate: literal.predicate.clone(),
            terms: literal.terms.iter().map(|term| self.apply(term)).collect(),
        }
    }

    /// An iterator over the bindings, ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Term)> {
        self.bindings.iter()
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, term)) in self.bindings.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable} ↦ {term}")?;
        }
        write!(f, "}}")
    }
}
