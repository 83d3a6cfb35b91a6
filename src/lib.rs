/*!
A library for deciding whether a first-order assertion follows from a set of premises, by
resolution refutation.

heron_fol parses formulas of first-order logic, rewrites premises to conjunctive normal form,
negates the assertion, and saturates under binary resolution with Robinson unification until
the empty clause is derived or no new resolvents exist.

Some guiding principles of heron_fol:

- Determinism: two proof attempts over the same input produce identical derivation traces.
- Soundness over speed: the occurs-check is mandatory, clauses are renamed apart before
  resolving, and saturation is naive --- all pairs, breadth-first --- with deduplication as
  the only pruning beside tautology discard.
- Loud failure: a malformed tree surviving a pipeline stage is reported as a bug, never
  silently repaired.

# Orientation

The library is designed around the core structure of a [context].

Formulas may be added through the [input format](crate::parser::formula), the
[intermediate clause format](crate::context::Context::read_clauses), or
[programmatically](crate::context::Context::add_clause).

Internally, and at a high level, a proof attempt is viewed in terms of a handful of parts:

- A premise is rewritten to clauses by the [cnf](crate::cnf) pipeline.
- The clauses of the premises and the negated query are stored in a
  [clause database](crate::db::clause).
- The [saturation loop](crate::procedures::solve) derives
  [resolvents](crate::procedures::resolution) until the empty clause, saturation, or the
  configured bound.
- Admissions are recorded in a [trace](crate::reports::Trace), and the outcome is a
  [report](crate::reports::Report).

Useful starting points, then, may be:

- The high-level [prove procedure](crate::procedures::solve) to inspect the dynamics of a
  proof attempt.
- The [structures] to familiarise yourself with the abstract elements of a proof (terms,
  literals, clauses, formulas).
- The [configuration](crate::config) to see what is supported.

# Example

+ Decide whether Socrates is mortal.

```rust
use heron_fol::{config::Config, context::Context, parser::formula::parse_formula};

let mut the_context = Context::from_config(Config::default());

let premises = [
    parse_formula("∀x (Man(x) → Mortal(x))").expect("parse failure"),
    parse_formula("Man(Socrates)").expect("parse failure"),
];
let query = parse_formula("Mortal(Socrates)").expect("parse failure");

the_context.reserve_symbols(&query);
the_context.add_premises(&premises).expect("conversion failure");

let report = the_context.prove_formula(&query).expect("proof failure");
assert!(report.proven());

for entry in the_context.trace().entries() {
    println!("{entry}");
}
```

# Logging

Calls to the log macro are made throughout the library, though no log implementation is
provided. The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
logs related to the [clause database](crate::db::clause) can be filtered with
`RUST_LOG=clause_db …`.
*/

#![allow(clippy::single_match)]
#![allow(mixed_script_confusables)]

pub mod builder;
pub mod procedures;

pub mod cnf;
pub mod config;
pub mod context;
pub mod parser;
pub mod structures;
pub mod types;
pub mod unification;

pub mod reports;

pub mod db;

pub mod misc;
