/*!
The pipeline from an arbitrary formula to a set of clauses in conjunctive normal form.

The pipeline is a fixed sequence of total rewrites, each a structural recursion over the
formula tree:

1. [Biconditional elimination](biconditional): `α ↔ β ⇒ (α → β) ∧ (β → α)`.
2. [Implication elimination](implication): `α → β ⇒ ¬α ∨ β`.
3. [Negation normal form](negation): double negations cancel, De Morgan, quantifier duals,
   and a negated literal flips its sign.
4. [Standardization](standardize): every quantifier binds a name fresh within the formula.
5. [Skolemization](skolem): each `∃` is replaced by a witness over the universals in scope.
6. [Universal erasure](universal): the remaining `∀` wrappers are dropped, variables
   becoming implicitly universal at clause scope.
7. [Distribution](distribute): `∨` distributes over `∧` until none remains below a `∨`.

[Extraction](extract) then splits the tree at `∧` and flattens each maximal `∨` subtree into
one clause. Each stage preserves logical equivalence, except Skolemization, which preserves
satisfiability --- sufficient for refutation.

Standardization before Skolemization is load-bearing: a Skolem witness takes the universals
in scope as arguments, and without fresh names a reused variable would tie the witness to the
wrong quantifier. The stages must not be reordered.

A node surviving past its stage --- an implication at extraction, say --- faults with a
[CnfError](crate::types::err::CnfError) rather than being silently repaired.

# Example

```rust
# use heron_fol::cnf::Normalizer;
# use heron_fol::parser::formula::parse_formula;
let formula = parse_formula("∀x (Man(x) → Mortal(x))").expect("parse failure");

let mut normalizer = Normalizer::default();
let clauses = normalizer.clauses(&formula).expect("conversion failure");

assert_eq!(clauses.len(), 1);
assert_eq!(format!("{}", clauses[0]), "¬Man(x1) ∨ Mortal(x1)");
```
*/

mod biconditional;
mod distribute;
mod extract;
mod implication;
mod negation;
mod skolem;
mod standardize;
mod universal;

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula},
    types::err::CnfError,
};

/// The CNF pipeline, with the symbol state shared across a formula set.
///
/// The Skolem counter increases monotonically over every conversion made through one
/// normalizer, and minted symbols avoid every symbol reserved so far. For freshness across a
/// whole formula set, [reserve the symbols](Normalizer::reserve_symbols) of each formula ---
/// the query included --- before converting the first.
#[derive(Debug, Default)]
pub struct Normalizer {
    /// The next Skolem index to try.
    skolem_counter: usize,

    /// Every symbol unavailable to Skolemization: predicates, functions, and constants of
    /// reserved formulas, and previously minted witnesses.
    reserved: HashSet<String>,
}

impl Normalizer {
    /// Reserves every predicate, function, and constant symbol of `formula` against use as a
    /// Skolem symbol.
    pub fn reserve_symbols(&mut self, formula: &Formula) {
        formula.symbols_into(&mut self.reserved);
    }

    /// Reserves the symbols of a clause, as [reserve_symbols](Normalizer::reserve_symbols)
    /// does for a formula.
    ///
    /// Clauses of the intermediate format may carry Skolem symbols of an earlier conversion,
    /// which later conversions --- of a query, say --- must avoid.
    pub(crate) fn reserve_clause(&mut self, clause: &Clause) {
        for literal in clause.literals() {
            self.reserved.insert(literal.predicate.clone());
            for term in &literal.terms {
                term.symbols_into(&mut self.reserved);
            }
        }
    }

    /// Rewrites `formula` into an equisatisfiable set of clauses.
    pub fn clauses(&mut self, formula: &Formula) -> Result<Vec<Clause>, CnfError> {
        self.reserve_symbols(formula);

        let stripped = biconditional::expand(formula);
        let stripped = implication::expand(&stripped);
        let normal = negation::push_inward(&stripped);
        let standard = standardize::rename_bound(&normal);
        let closed = self.skolemize(&standard);
        let open = universal::drop_all(&closed);
        let distributed = distribute::distribute(&open);

        let clauses = extract::clauses(&distributed)?;

        log::trace!(target: targets::CNF, "{} clause(s) from formula: {formula}", clauses.len());

        Ok(clauses)
    }
}
