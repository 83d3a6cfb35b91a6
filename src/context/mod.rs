/*!
The context --- to which formulas are added and within which proof attempts take place.

A context owns the clause [database](crate::db::clause), the derivation
[trace](crate::reports::Trace), the [CNF pipeline state](crate::cnf::Normalizer), and a
[state](ContextState) recording where between input and a concluded proof attempt the context
is. A context is single-threaded and synchronous: every operation runs to completion, and two
contexts share nothing.

# Example

```rust
# use heron_fol::config::Config;
# use heron_fol::context::Context;
# use heron_fol::parser::formula::parse_formula;
# use heron_fol::reports::Report;
let mut the_context = Context::from_config(Config::default());

let premises = [
    parse_formula("∀x (Man(x) → Mortal(x))").expect("parse failure"),
    parse_formula("Man(Socrates)").expect("parse failure"),
];
let query = parse_formula("Mortal(Socrates)").expect("parse failure");

the_context.reserve_symbols(&query);
assert!(the_context.add_premises(&premises).is_ok());

assert_eq!(the_context.prove_formula(&query), Ok(Report::Proven));
assert!(the_context.report().proven());
```
*/

use crate::{cnf::Normalizer, config::Config, db::clause::ClauseDB, reports::{Report, Trace}};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context accepts configuration and input.
    Fresh,

    /// A proof attempt is underway.
    Running,

    /// The empty clause was derived. Terminal.
    Proven,

    /// A full pass derived no new clause. Terminal.
    Saturated,

    /// The step bound was hit. Terminal.
    BoundReached,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "Fresh"),
            Self::Running => write!(f, "Running"),
            Self::Proven => write!(f, "Proven"),
            Self::Saturated => write!(f, "Saturated"),
            Self::BoundReached => write!(f, "BoundReached"),
        }
    }
}

/// The context: a clause set, a trace, and the state of a proof attempt over them.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The CNF pipeline, holding the Skolem symbol state of the formula set.
    pub(crate) normalizer: Normalizer,

    /// The derivation trace.
    pub(crate) trace: Trace,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            clause_db: ClauseDB::default(),
            normalizer: Normalizer::default(),
            trace: Trace::default(),
            state: ContextState::Fresh,
        }
    }

    /// A report on the outcome of the proof attempt, [Unknown](Report::Unknown) if none has
    /// concluded.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The derivation trace, so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
