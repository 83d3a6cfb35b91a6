//! Universal erasure: the `∀` wrappers remaining after Skolemization are dropped.
//!
//! Free variables of the result are implicitly universally quantified at clause scope. An
//! existential here is an upstream bug and is left for extraction to fault on.

use crate::structures::formula::{Formula, Quantifier};

pub(super) fn drop_all(formula: &Formula) -> Formula {
    match formula {
        Formula::Quantified {
            quantifier: Quantifier::Universal,
            body,
            ..
        } => drop_all(body),

        Formula::Binary { op, left, right } => {
            Formula::binary(*op, drop_all(left), drop_all(right))
        }

        Formula::Negation(inner) => Formula::Negation(Box::new(drop_all(inner))),

        _ => formula.clone(),
    }
}
