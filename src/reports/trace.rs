/*!
The derivation trace of a proof attempt.

The trace records resolvent admissions in the order they occur, together with the seeding of
the negated query and the terminal outcome. Entries hold clones of the clauses involved, so a
trace is replayable after the fact: each resolution entry names the two parent clauses and
the admitted resolvent, and a contradiction entry names the parents of the empty clause.

Two proof attempts over the same input produce identical traces.
*/

use crate::structures::clause::Clause;

/// One entry of a derivation trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEntry {
    /// A clause of the negated query was added to the workset.
    NegatedQuery {
        clause: Clause,
    },

    /// A resolvent was admitted.
    Resolution {
        step: usize,
        left: Clause,
        right: Clause,
        resolvent: Clause,
    },

    /// The empty clause was derived.
    Contradiction {
        step: usize,
        left: Clause,
        right: Clause,
    },

    /// A full pass added no clause.
    Saturated,

    /// The step bound was hit.
    BoundReached,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegatedQuery { clause } => write!(f, "Negated query added: {clause}"),

            Self::Resolution {
                step,
                left,
                right,
                resolvent,
            } => write!(f, "Step {step}: Resolve ({left}) with ({right}) ⇒ {resolvent}"),

            Self::Contradiction { step, left, right } => {
                write!(f, "Step {step}: Resolve ({left}) with ({right}) ⇒ □")
            }

            Self::Saturated => write!(f, "No further resolvents can be derived."),

            Self::BoundReached => write!(f, "Step limit reached, stopping resolution."),
        }
    }
}

/// A derivation trace, frozen once the context enters a terminal state.
#[derive(Debug, Default)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// The entries of the trace, in order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn negated_query(&mut self, clause: &Clause) {
        self.entries.push(TraceEntry::NegatedQuery {
            clause: clause.clone(),
        });
    }

    pub(crate) fn resolution(&mut self, step: usize, left: &Clause, right: &Clause, resolvent: &Clause) {
        self.entries.push(TraceEntry::Resolution {
            step,
            left: left.clone(),
            right: right.clone(),
            resolvent: resolvent.clone(),
        });
    }

    pub(crate) fn contradiction(&mut self, step: usize, left: &Clause, right: &Clause) {
        self.entries.push(TraceEntry::Contradiction {
            step,
            left: left.clone(),
            right: right.clone(),
        });
    }

    pub(crate) fn saturated(&mut self) {
        self.entries.push(TraceEntry::Saturated);
    }

    pub(crate) fn bound_reached(&mut self) {
        self.entries.push(TraceEntry::BoundReached);
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
