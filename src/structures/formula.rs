/*!
Formulas, aka. trees of literals, connectives, and quantifiers.

A formula is immutable once constructed: every rewrite stage of the [cnf](crate::cnf) pipeline
produces a fresh tree. Negations of literals are folded into the literal's sign both by the
[parser](crate::parser) and by negation normal form, so a [Negation](Formula::Negation) node
wraps a compound formula in practice.

The display implementation parenthesizes every binary connective, which keeps printing and
re-parsing structurally faithful.
*/

use std::collections::HashSet;

use crate::structures::{literal::Literal, term::Term};

/// A binary connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
}

/// A quantifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    Universal,
    Existential,
}

impl Quantifier {
    /// The dual quantifier, for pushing a negation through.
    pub fn dual(&self) -> Quantifier {
        match self {
            Quantifier::Universal => Quantifier::Existential,
            Quantifier::Existential => Quantifier::Universal,
        }
    }
}

/// A first-order formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// A literal.
    Literal(Literal),

    /// The negation of a formula.
    Negation(Box<Formula>),

    /// Two formulas under a binary connective.
    Binary {
        op: Connective,
        left: Box<Formula>,
        right: Box<Formula>,
    },

    /// A quantifier binding a variable over a formula.
    Quantified {
        quantifier: Quantifier,
        variable: String,
        body: Box<Formula>,
    },
}

impl Formula {
    pub fn binary(op: Connective, left: Formula, right: Formula) -> Formula {
        Formula::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conjunction(left: Formula, right: Formula) -> Formula {
        Formula::binary(Connective::Conjunction, left, right)
    }

    pub fn disjunction(left: Formula, right: Formula) -> Formula {
        Formula::binary(Connective::Disjunction, left, right)
    }

    pub fn implication(left: Formula, right: Formula) -> Formula {
        Formula::binary(Connective::Implication, left, right)
    }

    pub fn biconditional(left: Formula, right: Formula) -> Formula {
        Formula::binary(Connective::Biconditional, left, right)
    }

    /// The negation of `formula`, folding a literal into its sign.
    pub fn negation(formula: Formula) -> Formula {
        match formula {
            Formula::Literal(literal) => Formula::Literal(literal.flipped()),
            compound => Formula::Negation(Box::new(compound)),
        }
    }

    pub fn quantified(quantifier: Quantifier, variable: impl Into<String>, body: Formula) -> Formula {
        Formula::Quantified {
            quantifier,
            variable: variable.into(),
            body: Box::new(body),
        }
    }

    /// The formula with every free occurrence of `variable` replaced by `replacement`.
    ///
    /// A quantifier re-binding the same name shadows the substitution.
    pub fn substituted(&self, variable: &str, replacement: &Term) -> Formula {
        match self {
            Formula::Literal(literal) => Formula::Literal(Literal {
                negated: literal.negated,
                predicate: literal.predicate.clone(),
                terms: literal
                    .terms
                    .iter()
                    .map(|term| term.replaced(variable, replacement))
                    .collect(),
            }),

            Formula::Negation(inner) => {
                Formula::Negation(Box::new(inner.substituted(variable, replacement)))
            }

            Formula::Binary { op, left, right } => Formula::binary(
                *op,
                left.substituted(variable, replacement),
                right.substituted(variable, replacement),
            ),

            Formula::Quantified {
                quantifier,
                variable: bound,
                body,
            } => {
                if bound == variable {
                    self.clone()
                } else {
                    Formula::quantified(*quantifier, bound.clone(), body.substituted(variable, replacement))
                }
            }
        }
    }

    /// Records every variable name occurring in the formula, bound or free.
    pub(crate) fn variables_into<'f>(&'f self, names: &mut HashSet<&'f str>) {
        match self {
            Formula::Literal(literal) => {
                for term in &literal.terms {
                    term.variables_into(names);
                }
            }

            Formula::Negation(inner) => inner.variables_into(names),

            Formula::Binary { left, right, .. } => {
                left.variables_into(names);
                right.variables_into(names);
            }

            Formula::Quantified { variable, body, .. } => {
                names.insert(variable.as_str());
                body.variables_into(names);
            }
        }
    }

    /// Records every predicate, function, and constant symbol occurring in the formula.
    pub(crate) fn symbols_into(&self, symbols: &mut HashSet<String>) {
        match self {
            Formula::Literal(literal) => {
                symbols.insert(literal.predicate.clone());
                for term in &literal.terms {
                    term.symbols_into(symbols);
                }
            }

            Formula::Negation(inner) => inner.symbols_into(symbols),

            Formula::Binary { left, right, .. } => {
                left.symbols_into(symbols);
                right.symbols_into(symbols);
            }

            Formula::Quantified { body, .. } => body.symbols_into(symbols),
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connective::Conjunction => write!(f, "∧"),
            Connective::Disjunction => write!(f, "∨"),
            Connective::Implication => write!(f, "→"),
            Connective::Biconditional => write!(f, "↔"),
        }
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantifier::Universal => write!(f, "∀"),
            Quantifier::Existential => write!(f, "∃"),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Literal(literal) => write!(f, "{literal}"),

            Formula::Negation(inner) => write!(f, "¬{inner}"),

            Formula::Binary { op, left, right } => write!(f, "({left} {op} {right})"),

            Formula::Quantified {
                quantifier,
                variable,
                body,
            } => write!(f, "{quantifier}{variable} {body}"),
        }
    }
}
