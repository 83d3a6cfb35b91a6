//! Distribution of `∨` over `∧`, children first, until no `∧` remains below a `∨`.
//!
//! - `α ∨ (β ∧ γ) ⇒ (α ∨ β) ∧ (α ∨ γ)`
//! - `(α ∧ β) ∨ γ ⇒ (α ∨ γ) ∧ (β ∨ γ)`

use crate::structures::formula::{Connective, Formula};

pub(super) fn distribute(formula: &Formula) -> Formula {
    match formula {
        Formula::Binary {
            op: Connective::Conjunction,
            left,
            right,
        } => Formula::conjunction(distribute(left), distribute(right)),

        Formula::Binary {
            op: Connective::Disjunction,
            left,
            right,
        } => merge(distribute(left), distribute(right)),

        _ => formula.clone(),
    }
}

/// Disjoins two distributed formulas, splitting any conjunction met on either side.
fn merge(left: Formula, right: Formula) -> Formula {
    match left {
        Formula::Binary {
            op: Connective::Conjunction,
            left: inner_left,
            right: inner_right,
        } => Formula::conjunction(merge(*inner_left, right.clone()), merge(*inner_right, right)),

        left => match right {
            Formula::Binary {
                op: Connective::Conjunction,
                left: inner_left,
                right: inner_right,
            } => Formula::conjunction(merge(left.clone(), *inner_left), merge(left, *inner_right)),

            right => Formula::disjunction(left, right),
        },
    }
}
