/*!
Binary resolution of a clause pair.

For a pair `(c₁, c₂)`, every pair of literals `(l₁ ∈ c₁, l₂ ∈ c₂)` with the same predicate
and arity under opposite signs is a candidate. When the term lists of a candidate
[unify](crate::unification) with substitution σ, the resolvent is the union of the remainders
`(c₁ ∖ {l₁}) ∪ (c₂ ∖ {l₂})` with σ applied throughout, deduplicated by key. Tautologous
resolvents are discarded.

Literal pairs are scanned lexically by index within each clause, so the resolvents of a pair,
and with them every derivation trace, are reproducible.

# Variable namespaces

Before any literal is examined, `c₂` is renamed apart: clause variables are implicitly
universal, so `P(x)` and `¬P(f(x))` must resolve even though the shared name `x` denotes two
unrelated variables. The rename [primes](crate::structures::clause) every variable of `c₂`,
and each emitted resolvent is canonicalized, so primes never reach the workset.
*/

use crate::{
    misc::log::targets::{self},
    structures::clause::Clause,
    unification::unify_terms,
};

/// All resolvents of the pair `(left, right)`, canonicalized, in literal-index order.
pub fn resolvents(left: &Clause, right: &Clause) -> Vec<Clause> {
    let right = right.primed();
    let mut found = Vec::new();

    for (left_index, left_literal) in left.literals().iter().enumerate() {
        for (right_index, right_literal) in right.literals().iter().enumerate() {
            if !left_literal.resolvable_against(right_literal) {
                continue;
            }

            let Some(sigma) = unify_terms(&left_literal.terms, &right_literal.terms) else {
                continue;
            };

            let mut literals = Vec::with_capacity(left.size() + right.size() - 2);
            for (index, literal) in left.literals().iter().enumerate() {
                if index != left_index {
                    literals.push(sigma.apply_literal(literal));
                }
            }
            for (index, literal) in right.literals().iter().enumerate() {
                if index != right_index {
                    literals.push(sigma.apply_literal(literal));
                }
            }

            let resolvent = Clause::new(literals);

            if resolvent.is_tautology() {
                log::trace!(target: targets::RESOLUTION, "Tautologous resolvent discarded: {resolvent}");
                continue;
            }

            found.push(resolvent.canonical());
        }
    }

    found
}
