use heron_fol::{
    builder::ClauseOk,
    config::Config,
    context::{Context, ContextState},
    parser::clause::parse_clause,
    procedures::resolution::resolvents,
    reports::{Report, TraceEntry},
    types::err::{ErrorKind, StateError},
};

fn clause(s: &str) -> heron_fol::structures::clause::Clause {
    parse_clause(s).expect("parse failure")
}

mod pairs {
    use super::*;

    #[test]
    fn ground_complements_resolve_to_the_empty_clause() {
        let found = resolvents(&clause("P(A)"), &clause("¬P(A)"));
        assert_eq!(found.len(), 1);
        assert!(found[0].is_empty());
    }

    #[test]
    fn unification_instantiates_the_remainder() {
        let found = resolvents(&clause("¬Man(x) ∨ Mortal(x)"), &clause("Man(Socrates)"));
        assert_eq!(found.len(), 1);
        assert_eq!(format!("{}", found[0]), "Mortal(Socrates)");
    }

    #[test]
    fn shared_variable_names_rename_apart() {
        // The x of each clause is a distinct variable, so the pair must resolve.
        let found = resolvents(&clause("P(x) ∨ Q(x)"), &clause("¬P(f(x))"));
        assert_eq!(found.len(), 1);
        assert_eq!(format!("{}", found[0]), "Q(f(x1))");
    }

    #[test]
    fn occurs_check_blocks_cyclic_bindings() {
        let found = resolvents(&clause("P(x, x)"), &clause("¬P(y, f(y))"));
        assert!(found.is_empty());
    }

    #[test]
    fn mismatched_constants_do_not_resolve() {
        let found = resolvents(&clause("P(A)"), &clause("¬P(B)"));
        assert!(found.is_empty());
    }

    #[test]
    fn tautologous_resolvents_are_discarded() {
        let found = resolvents(&clause("P(A) ∨ Q(B)"), &clause("¬P(A) ∨ ¬Q(B)"));
        assert!(found.is_empty());
    }

    #[test]
    fn resolvents_follow_literal_index_order() {
        let found = resolvents(&clause("P(x)"), &clause("¬P(A) ∨ ¬P(B)"));
        let strings: Vec<String> = found.iter().map(|c| format!("{c}")).collect();
        assert_eq!(strings, ["¬P(B)", "¬P(A)"]);
    }
}

mod saturation {
    use super::*;

    #[test]
    fn a_known_contradiction_proves_in_one_step() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.clause_from_string("P(a)"), Ok(ClauseOk::Added));

        let report = the_context.prove(&clause("P(a)")).expect("proof failure");
        assert_eq!(report, Report::Proven);

        let entries = the_context.trace().entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], TraceEntry::NegatedQuery { .. }));
        assert!(matches!(entries[1], TraceEntry::Contradiction { step: 1, .. }));
    }

    #[test]
    fn independent_clauses_saturate() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.clause_from_string("P(A)").is_ok());
        assert!(the_context.clause_from_string("Q(B)").is_ok());

        let report = the_context.prove(&clause("R(A)")).expect("proof failure");
        assert_eq!(report, Report::Saturated);
        assert!(!report.proven());
        assert!(matches!(
            the_context.trace().entries().last(),
            Some(TraceEntry::Saturated)
        ));
    }

    #[test]
    fn duplicates_are_rejected_by_signature() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.clause_from_string("P(A) ∨ P(B)").is_ok());
        assert!(the_context.clause_from_string("¬P(A)").is_ok());

        let report = the_context.prove(&clause("Q")).expect("proof failure");
        assert_eq!(report, Report::Saturated);

        // Two premises, the negated query, and the one resolvent P(B).
        assert_eq!(the_context.clause_db.len(), 4);
    }

    #[test]
    fn an_unbounded_chain_hits_the_step_bound() {
        let mut cfg = Config::default();
        cfg.max_steps.value = 10;

        let mut the_context = Context::from_config(cfg);
        assert!(the_context.clause_from_string("¬P(x) ∨ P(f(x))").is_ok());
        assert!(the_context.clause_from_string("P(A)").is_ok());

        let report = the_context.prove(&clause("Q")).expect("proof failure");
        assert_eq!(report, Report::BoundReached);
        assert!(matches!(
            the_context.trace().entries().last(),
            Some(TraceEntry::BoundReached)
        ));
    }

    #[test]
    fn terminal_states_are_persistent() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.clause_from_string("P(A)").is_ok());

        assert!(the_context.prove(&clause("P(A)")).is_ok());
        assert_eq!(the_context.state, ContextState::Proven);

        // Neither a further proof attempt nor further input is accepted.
        assert_eq!(
            the_context.prove(&clause("P(A)")),
            Err(ErrorKind::State(StateError::NotFresh))
        );
        assert_eq!(
            the_context.clause_from_string("Q(B)"),
            Err(ErrorKind::State(StateError::NotFresh))
        );
    }
}
