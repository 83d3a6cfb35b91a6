//! Negation normal form: negations move inward until each rests on a literal's sign.
//!
//! - `¬¬φ ⇒ φ`
//! - `¬(α ∧ β) ⇒ ¬α ∨ ¬β` and `¬(α ∨ β) ⇒ ¬α ∧ ¬β`
//! - `¬∀v φ ⇒ ∃v ¬φ` and `¬∃v φ ⇒ ∀v ¬φ`
//! - `¬L` flips the sign of the literal `L`.
//!
//! A negated implication or biconditional is left in place; the stage ordering has already
//! eliminated both, so one here is an upstream bug and surfaces at extraction.

use crate::structures::formula::{Connective, Formula};

pub(super) fn push_inward(formula: &Formula) -> Formula {
    match formula {
        Formula::Negation(inner) => match &**inner {
            Formula::Negation(cancelled) => push_inward(cancelled),

            Formula::Binary {
                op: Connective::Conjunction,
                left,
                right,
            } => Formula::disjunction(
                push_inward(&Formula::negation((**left).clone())),
                push_inward(&Formula::negation((**right).clone())),
            ),

            Formula::Binary {
                op: Connective::Disjunction,
                left,
                right,
            } => Formula::conjunction(
                push_inward(&Formula::negation((**left).clone())),
                push_inward(&Formula::negation((**right).clone())),
            ),

            Formula::Quantified {
                quantifier,
                variable,
                body,
            } => Formula::quantified(
                quantifier.dual(),
                variable.clone(),
                push_inward(&Formula::negation((**body).clone())),
            ),

            Formula::Literal(literal) => Formula::Literal(literal.flipped()),

            residual => Formula::Negation(Box::new(push_inward(residual))),
        },

        Formula::Binary { op, left, right } => {
            Formula::binary(*op, push_inward(left), push_inward(right))
        }

        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => Formula::quantified(*quantifier, variable.clone(), push_inward(body)),

        Formula::Literal(_) => formula.clone(),
    }
}
