//! Biconditional elimination: `α ↔ β ⇒ (α → β) ∧ (β → α)`, applied bottom-up so nested
//! biconditionals fully expand.

use crate::structures::formula::{Connective, Formula};

pub(super) fn expand(formula: &Formula) -> Formula {
    match formula {
        Formula::Binary {
            op: Connective::Biconditional,
            left,
            right,
        } => {
            let left = expand(left);
            let right = expand(right);

            Formula::conjunction(
                Formula::implication(left.clone(), right.clone()),
                Formula::implication(right, left),
            )
        }

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
