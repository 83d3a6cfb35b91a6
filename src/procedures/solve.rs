/*!
The saturation loop: refutation by exhaustive binary resolution.

A proof attempt seeds the workset with the negation of the query and then saturates. Each
pass forms all unordered pairs over a snapshot of the workset, computes the
[resolvents](crate::procedures::resolution) of each pair, and admits those with unseen
signatures --- breadth-first, so resolvents of resolvents wait for the next pass. The loop
halts on the first of:

- The empty clause: the premises together with the negated query are contradictory, so the
  query is [proven](crate::reports::Report::Proven).
- A full pass with no admission: the set is
  [saturated](crate::reports::Report::Saturated) and the query was not proven.
- The admission count reaching the configured bound: the attempt is
  [inconclusive](crate::reports::Report::BoundReached). The bound is the only cancellation
  mechanism, checked after every admission.

# Negating the query

The negation of a disjunction is the conjunction of the negated disjuncts: a query *clause*
`l₁ ∨ … ∨ lₙ` seeds `n` unit clauses, one flipped literal each. A query *formula* is negated
and routed through the full CNF pipeline instead, which handles quantifiers in the query ---
a negated universal Skolemizes to a fresh witness --- and subsumes the clause route.
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::resolution::resolvents,
    reports::Report,
    structures::{clause::Clause, formula::Formula},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Attempts to prove the query clause from the premises, by refutation.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use heron_fol::config::Config;
    /// # use heron_fol::context::Context;
    /// # use heron_fol::parser::clause::parse_clause;
    /// # use heron_fol::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.clause_from_string("¬Man(x) ∨ Mortal(x)").is_ok());
    /// assert!(the_context.clause_from_string("Man(Socrates)").is_ok());
    ///
    /// let query = parse_clause("Mortal(Socrates)").expect("parse failure");
    /// assert_eq!(the_context.prove(&query), Ok(Report::Proven));
    /// ```
    pub fn prove(&mut self, query: &Clause) -> Result<Report, ErrorKind> {
        if self.state != ContextState::Fresh {
            return Err(ErrorKind::from(err::StateError::NotFresh));
        }

        if query.is_empty() {
            return Err(ErrorKind::from(err::ClauseDBError::EmptyClause));
        }

        for literal in query.literals() {
            let negated = Clause::unit(literal.flipped());
            self.trace.negated_query(&negated);
            self.clause_db.insert(negated);
        }

        self.saturate()
    }

    /// Attempts to prove the query formula from the premises, by refutation.
    ///
    /// The negated query passes through the CNF pipeline, so any formula of the input
    /// grammar may be queried.
    pub fn prove_formula(&mut self, query: &Formula) -> Result<Report, ErrorKind> {
        if self.state != ContextState::Fresh {
            return Err(ErrorKind::from(err::StateError::NotFresh));
        }

        self.normalizer.reserve_symbols(query);
        let negated = Formula::negation(query.clone());

        for clause in self.normalizer.clauses(&negated)? {
            if clause.is_tautology() {
                log::info!(target: targets::CLAUSE_DB, "Tautology skipped: {clause}");
                continue;
            }

            self.trace.negated_query(&clause);
            self.clause_db.insert(clause);
        }

        self.saturate()
    }

    /// Saturates the workset, breadth-first over pass snapshots.
    fn saturate(&mut self) -> Result<Report, ErrorKind> {
        self.state = ContextState::Running;

        let bound = self.config.max_steps.value;
        let mut step: usize = 1;

        while step <= bound {
            let mut admitted_any = false;
            let snapshot = self.clause_db.len();

            for left_index in 0..snapshot {
                for right_index in left_index + 1..snapshot {
                    // Indices are stable: the database is append-only.
                    let left = self.clause_db.get(left_index).expect("stable index").clone();
                    let right = self.clause_db.get(right_index).expect("stable index").clone();

                    for resolvent in resolvents(&left, &right) {
                        if resolvent.is_empty() {
                            log::info!(target: targets::RESOLUTION, "Empty clause from ({left}) and ({right})");
                            self.trace.contradiction(step, &left, &right);
                            self.state = ContextState::Proven;
                            return Ok(self.report());
                        }

                        if self.clause_db.insert(resolvent.clone()) {
                            self.trace.resolution(step, &left, &right, &resolvent);
                            admitted_any = true;
                            step += 1;

                            if step > bound {
                                self.trace.bound_reached();
                                self.state = ContextState::BoundReached;
                                return Ok(self.report());
                            }
                        }
                    }
                }
            }

            if !admitted_any {
                log::info!(target: targets::RESOLUTION, "Saturated after {} admission(s)", step - 1);
                self.trace.saturated();
                self.state = ContextState::Saturated;
                return Ok(self.report());
            }
        }

        // Reachable only with a zero bound.
        self.trace.bound_reached();
        self.state = ContextState::BoundReached;
        Ok(self.report())
    }
}
