//! Tools for building a context: premise and clause admission.

use std::io::BufRead;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    parser::clause::parse_clause,
    structures::{clause::Clause, formula::Formula},
    types::err::{self, ErrorKind},
};

/// The outcome of adding a clause to a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was admitted to the workset.
    Added,

    /// A clause with the same signature was already present.
    Duplicate,

    /// The clause is a tautology, and was skipped.
    Tautology,
}

/// Methods for building the context.
impl Context {
    /// Reserves the symbols of `formula` against use as Skolem symbols.
    ///
    /// Skolem symbols must be fresh for the *whole* formula set, so the symbols of every
    /// formula --- the query included --- should be reserved before the first premise is
    /// added. [add_premises](Context::add_premises) reserves across its argument; the query
    /// is reserved by this method, or on [prove_formula](Context::prove_formula) at the
    /// latest.
    pub fn reserve_symbols(&mut self, formula: &Formula) {
        self.normalizer.reserve_symbols(formula);
    }

    /// Converts each premise to clauses and admits them, reserving the symbols of every
    /// premise before converting the first.
    pub fn add_premises(&mut self, premises: &[Formula]) -> Result<(), ErrorKind> {
        for premise in premises {
            self.normalizer.reserve_symbols(premise);
        }

        for premise in premises {
            self.add_premise(premise)?;
        }

        Ok(())
    }

    /// Converts a single premise to clauses and admits them.
    pub fn add_premise(&mut self, premise: &Formula) -> Result<(), ErrorKind> {
        let clauses = self.normalizer.clauses(premise)?;

        for clause in clauses {
            self.add_clause(clause)?;
        }

        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// - The empty clause is rejected: it is equivalent to falsum, and a workset seeded with
    ///   falsum proves anything.
    /// - Tautologies are skipped: they resolve to nothing of use.
    /// - Duplicates, by signature, are skipped.
    ///
    /// ```rust
    /// # use heron_fol::builder::ClauseOk;
    /// # use heron_fol::config::Config;
    /// # use heron_fol::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert_eq!(the_context.clause_from_string("P(A) ∨ ¬P(A)"), Ok(ClauseOk::Tautology));
    /// assert_eq!(the_context.clause_from_string("P(A) ∨ Q(A)"), Ok(ClauseOk::Added));
    /// assert_eq!(the_context.clause_from_string("Q(A) ∨ P(A)"), Ok(ClauseOk::Duplicate));
    /// ```
    pub fn add_clause(&mut self, clause: Clause) -> Result<ClauseOk, ErrorKind> {
        if self.state != ContextState::Fresh {
            return Err(ErrorKind::from(err::StateError::NotFresh));
        }

        if clause.is_empty() {
            return Err(ErrorKind::from(err::ClauseDBError::EmptyClause));
        }

        // The clause may carry Skolem symbols of an earlier conversion.
        self.normalizer.reserve_clause(&clause);

        if clause.is_tautology() {
            log::info!(target: targets::CLAUSE_DB, "Tautology skipped: {clause}");
            return Ok(ClauseOk::Tautology);
        }

        match self.clause_db.insert(clause) {
            true => Ok(ClauseOk::Added),
            false => Ok(ClauseOk::Duplicate),
        }
    }

    /// Parses a clause line of the intermediate format and adds the clause to the context.
    pub fn clause_from_string(&mut self, line: &str) -> Result<ClauseOk, ErrorKind> {
        let clause = parse_clause(line)?;
        self.add_clause(clause)
    }

    /// Reads clauses of the intermediate format from `reader`, one per line, skipping blank
    /// lines and `#` comments.
    ///
    /// Returns the number of clauses admitted.
    pub fn read_clauses(&mut self, reader: impl BufRead) -> Result<usize, ErrorKind> {
        let mut admitted = 0;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let ClauseOk::Added = self.clause_from_string(line)? {
                admitted += 1;
            }
        }

        Ok(admitted)
    }
}
