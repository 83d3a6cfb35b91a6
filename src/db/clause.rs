/*!
The clause database: the workset of a proof.

The database is an ordered, append-only list of clauses together with the set of their
[signatures](crate::structures::clause::ClauseSignature) for constant-time duplicate
rejection. Within a proof, clauses are never deleted or mutated after admission, so indices
into the database are stable and a derivation trace remains replayable.

Fields of the database are private to ensure the use of methods which uphold the
signature-index invariant.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::clause::{Clause, ClauseSignature},
};

/// An ordered, append-only clause workset with a signature index.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// The admitted clauses, in admission order.
    clauses: Vec<Clause>,

    /// The signatures of the admitted clauses.
    signatures: HashSet<ClauseSignature>,
}

impl ClauseDB {
    /// The number of admitted clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause has been admitted.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clause at `index`, if the database contains at least `index` clauses.
    pub fn get(&self, index: usize) -> Option<&Clause> {
        self.clauses.get(index)
    }

    /// An iterator over the admitted clauses, in admission order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Whether a clause with the signature of `clause` has been admitted.
    pub fn contains(&self, clause: &Clause) -> bool {
        self.signatures.contains(&clause.signature())
    }

    /// Admits `clause`, unless its signature is already present.
    ///
    /// Returns whether the clause was admitted.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if !self.signatures.insert(clause.signature()) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate clause: {clause}");
            return false;
        }

        log::trace!(target: targets::CLAUSE_DB, "Admitted clause: {clause}");
        self.clauses.push(clause);
        true
    }
}
