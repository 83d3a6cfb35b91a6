//! Implication elimination: `α → β ⇒ ¬α ∨ β`.

use crate::structures::formula::{Connective, Formula};

pub(super) fn expand(formula: &Formula) -> Formula {
    match formula {
        Formula::Binary {
            op: Connective::Implication,
            left,
            right,
        } => Formula::disjunction(Formula::negation(expand(left)), expand(right)),

        Formula::Binary { op, left, right } => Formula::binary(*op, expand(left), expand(right)),

        Formula::Negation(inner) => Formula::Negation(Box::new(expand(inner))),

        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => Formula::quantified(*quantifier, variable.clone(), expand(body)),

        Formula::Literal(_) => formula.clone(),
    }
}
