use heron_fol::{
    config::Config,
    context::Context,
    parser::formula::parse_formula,
    reports::Report,
};

fn decide(premises: &[&str], query: &str) -> Report {
    let premises: Vec<_> = premises
        .iter()
        .map(|line| parse_formula(line).expect("parse failure"))
        .collect();
    let query = parse_formula(query).expect("parse failure");

    let mut the_context = Context::from_config(Config::default());
    the_context.reserve_symbols(&query);
    the_context.add_premises(&premises).expect("conversion failure");

    the_context.prove_formula(&query).expect("proof failure")
}

mod scenarios {
    use super::*;

    #[test]
    fn socrates_is_mortal() {
        let report = decide(
            &["∀x (Man(x) → Mortal(x))", "Man(Socrates)"],
            "Mortal(Socrates)",
        );
        assert_eq!(report, Report::Proven);
    }

    #[test]
    fn inconsistent_premises_prove_the_query() {
        let report = decide(&["∀x (P(x) → Q(x))", "P(A)", "¬Q(A)"], "Q(A)");
        assert_eq!(report, Report::Proven);
    }

    #[test]
    fn a_disjunction_proves_neither_disjunct() {
        let report = decide(&["P(A) ∨ P(B)"], "P(A)");
        assert_eq!(report, Report::Saturated);
    }

    #[test]
    fn a_skolem_witness_is_not_every_individual() {
        let report = decide(&["∀x ∃y Loves(x, y)"], "Loves(Alice, Alice)");
        assert_eq!(report, Report::Saturated);
    }

    #[test]
    fn tweety_flies() {
        let report = decide(
            &[
                "∀x (Bird(x) ∧ ¬Penguin(x) → Flies(x))",
                "Bird(Tweety)",
                "¬Penguin(Tweety)",
            ],
            "Flies(Tweety)",
        );
        assert_eq!(report, Report::Proven);
    }

    #[test]
    fn a_biconditional_carries_the_proof() {
        let report = decide(&["P(A) ↔ Q(A)", "P(A)"], "Q(A)");
        assert_eq!(report, Report::Proven);
    }
}

mod queries {
    use super::*;

    /// The negation of a conjunction routes through the pipeline to a single multi-literal
    /// clause.
    #[test]
    fn conjunctive_query() {
        let report = decide(&["P(A)", "Q(B)"], "P(A) ∧ Q(B)");
        assert_eq!(report, Report::Proven);
    }

    /// The negation of a disjunction seeds one unit clause per disjunct.
    #[test]
    fn disjunctive_query() {
        let report = decide(&["P(A)"], "P(A) ∨ Q(B)");
        assert_eq!(report, Report::Proven);
    }

    /// A universally quantified query Skolemizes its variable on negation.
    #[test]
    fn quantified_query() {
        let report = decide(&["∀x Mortal(x)"], "∀y Mortal(y)");
        assert_eq!(report, Report::Proven);
    }
}

mod determinism {
    use super::*;

    /// Two proof attempts over the same input produce identical traces.
    #[test]
    fn traces_are_reproducible() {
        let run = || {
            let premises = [
                parse_formula("∀x (P(x) → Q(x))").expect("parse failure"),
                parse_formula("P(A)").expect("parse failure"),
            ];
            let query = parse_formula("Q(A)").expect("parse failure");

            let mut the_context = Context::from_config(Config::default());
            the_context.reserve_symbols(&query);
            the_context.add_premises(&premises).expect("conversion failure");
            the_context.prove_formula(&query).expect("proof failure");

            the_context
                .trace()
                .entries()
                .iter()
                .map(|entry| format!("{entry}"))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
