/*!
Literals, aka. predicates applied to terms, possibly negated.

A literal is the atomic building block of clauses and formulas: a predicate symbol, a list of
argument [terms](crate::structures::term), and a sign. A 0-ary literal has an empty term list
and is written bare (`Raining` rather than `Raining()`).

The derived ordering is the literal key `(negated?, predicate, term keys)` used by clause
signatures, and so the field order of [Literal] is load-bearing.
*/

use crate::structures::term::Term;

/// A predicate application, or its negation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Whether the literal is negated.
    pub negated: bool,

    /// The predicate symbol.
    pub predicate: String,

    /// The argument terms, with arity implicit in the length.
    pub terms: Vec<Term>,
}

impl Literal {
    pub fn new(predicate: impl Into<String>, terms: Vec<Term>, negated: bool) -> Self {
        Literal {
            negated,
            predicate: predicate.into(),
            terms,
        }
    }

    /// The literal with its sign flipped.
    pub fn flipped(&self) -> Literal {
        Literal {
            negated: !self.negated,
            predicate: self.predicate.clone(),
            terms: self.terms.clone(),
        }
    }

    /// Whether `other` is the exact structural complement of the literal: the same predicate
    /// applied to equal terms, under the opposite sign.
    ///
    /// This is the tautology check, and involves no unification.
    pub fn complements(&self, other: &Literal) -> bool {
        self.negated != other.negated
            && self.predicate == other.predicate
            && self.terms == other.terms
    }

    /// Whether the literal may resolve against `other`: the same predicate and arity, under
    /// the opposite sign.
    ///
    /// Resolution additionally requires the term lists to unify.
    pub fn resolvable_against(&self, other: &Literal) -> bool {
        self.negated != other.negated
            && self.predicate == other.predicate
            && self.terms.len() == other.terms.len()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.predicate)?;
        if !self.terms.is_empty() {
            write!(f, "(")?;
            for (index, term) in self.terms.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{term}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
