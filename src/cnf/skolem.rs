//! Skolemization: each existential quantifier is replaced by a fresh witness.
//!
//! The traversal tracks the universally quantified variables in scope, in order. An `∃v`
//! under no universal becomes a constant `Cₖ`; under universals `u₁,…,uₘ` it becomes the
//! function term `Fₖ(u₁,…,uₘ)`. Either way every free occurrence of `v` in the body is
//! replaced and the quantifier is dropped.
//!
//! Witness symbols come from the normalizer's reserved pool, so no mint collides with a
//! predicate, function, or constant of the formula set, nor with an earlier mint.

use crate::{
    cnf::Normalizer,
    misc::log::targets::{self},
    structures::{formula::{Formula, Quantifier}, term::Term},
};

impl Normalizer {
    pub(super) fn skolemize(&mut self, formula: &Formula) -> Formula {
        let mut universals = Vec::new();
        self.skolemize_under(formula, &mut universals)
    }

    fn skolemize_under(&mut self, formula: &Formula, universals: &mut Vec<String>) -> Formula {
        match formula {
            Formula::Quantified {
                quantifier: Quantifier::Universal,
                variable,
                body,
            } => {
                universals.push(variable.clone());
                let body = self.skolemize_under(body, universals);
                universals.pop();

                Formula::quantified(Quantifier::Universal, variable.clone(), body)
            }

            Formula::Quantified {
                quantifier: Quantifier::Existential,
                variable,
                body,
            } => {
                let witness = self.fresh_witness(universals);
                log::info!(target: targets::CNF, "Skolem witness {witness} binds {variable}");

                let body = body.substituted(variable, &witness);
                self.skolemize_under(&body, universals)
            }

            Formula::Negation(inner) => {
                Formula::Negation(Box::new(self.skolemize_under(inner, universals)))
            }

            Formula::Binary { op, left, right } => Formula::binary(
                *op,
                self.skolemize_under(left, universals),
                self.skolemize_under(right, universals),
            ),

            Formula::Literal(_) => formula.clone(),
        }
    }

    /// A Skolem term over the universals in scope, under a symbol fresh for the formula set.
    fn fresh_witness(&mut self, universals: &[String]) -> Term {
        loop {
            let name = match universals.is_empty() {
                true => format!("C{}", self.skolem_counter),
                false => format!("F{}", self.skolem_counter),
            };
            self.skolem_counter += 1;

            if self.reserved.insert(name.clone()) {
                return match universals.is_empty() {
                    true => Term::Constant(name),
                    false => Term::Function(
                        name,
                        universals.iter().map(|u| Term::Variable(u.clone())).collect(),
                    ),
                };
            }
        }
    }
}
