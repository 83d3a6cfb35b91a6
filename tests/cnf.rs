use std::collections::HashSet;

use heron_fol::{
    cnf::Normalizer,
    parser::formula::parse_formula,
    structures::formula::Formula,
};

fn clause_strings(normalizer: &mut Normalizer, input: &str) -> Vec<String> {
    let formula = parse_formula(input).expect("parse failure");
    normalizer
        .clauses(&formula)
        .expect("conversion failure")
        .iter()
        .map(|clause| format!("{clause}"))
        .collect()
}

mod pipeline {
    use super::*;

    #[test]
    fn implication_under_a_universal() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "∀x (Man(x) → Mortal(x))");
        assert_eq!(clauses, ["¬Man(x1) ∨ Mortal(x1)"]);
    }

    #[test]
    fn biconditional_expands_both_ways() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "P(A) ↔ Q(A)");
        assert_eq!(clauses, ["¬P(A) ∨ Q(A)", "¬Q(A) ∨ P(A)"]);
    }

    #[test]
    fn de_morgan() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "¬(P(A) ∧ Q(A))");
        assert_eq!(clauses, ["¬P(A) ∨ ¬Q(A)"]);
    }

    #[test]
    fn disjunction_distributes_over_conjunction() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "P(A) ∨ (Q(A) ∧ R(A))");
        assert_eq!(clauses, ["P(A) ∨ Q(A)", "P(A) ∨ R(A)"]);
    }

    #[test]
    fn negated_quantifiers_dualize() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "¬∃x P(x)");
        assert_eq!(clauses, ["¬P(x1)"]);
    }

    #[test]
    fn duplicate_literals_drop() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "P(A) ∨ P(A)");
        assert_eq!(clauses, ["P(A)"]);
    }
}

mod skolemization {
    use super::*;

    #[test]
    fn existential_without_universals_is_a_constant() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "∃x P(x)");
        assert_eq!(clauses, ["P(C0)"]);
    }

    #[test]
    fn existential_under_a_universal_is_a_function() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "∀x ∃y Loves(x, y)");
        assert_eq!(clauses, ["Loves(x1, F0(x1))"]);
    }

    #[test]
    fn witnesses_avoid_symbols_of_the_set() {
        let mut normalizer = Normalizer::default();

        // C0 is a constant of the set, so the witness skips to C1.
        let first = clause_strings(&mut normalizer, "P(C0)");
        assert_eq!(first, ["P(C0)"]);

        let second = clause_strings(&mut normalizer, "∃x Q(x)");
        assert_eq!(second, ["Q(C1)"]);
    }

    #[test]
    fn witnesses_are_distinct_across_a_set() {
        let mut normalizer = Normalizer::default();

        let first = clause_strings(&mut normalizer, "∃x P(x)");
        let second = clause_strings(&mut normalizer, "∃x P(x)");

        assert_eq!(first, ["P(C0)"]);
        assert_eq!(second, ["P(C1)"]);
    }

    #[test]
    fn sibling_quantifiers_standardize_apart() {
        let mut normalizer = Normalizer::default();
        let clauses = clause_strings(&mut normalizer, "(∀x P(x)) ∧ (∀x Q(x))");
        assert_eq!(clauses, ["P(x1)", "Q(x2)"]);
    }
}

mod idempotence {
    use super::*;

    /// Re-running the pipeline on its own output, re-wrapped as a formula, yields the same
    /// clause set modulo clause order.
    #[test]
    fn pipeline_is_idempotent_on_its_output() {
        let inputs = [
            "∀x (Bird(x) ∧ ¬Penguin(x) → Flies(x))",
            "P(A) ↔ Q(A)",
            "∀x ∃y (Loves(x, y) ∨ Adores(x, y))",
        ];

        for input in inputs {
            let formula = parse_formula(input).expect("parse failure");

            let mut normalizer = Normalizer::default();
            let first = normalizer.clauses(&formula).expect("conversion failure");

            let rewrapped = first
                .iter()
                .map(|clause| {
                    clause
                        .literals()
                        .iter()
                        .map(|literal| Formula::Literal(literal.clone()))
                        .reduce(Formula::disjunction)
                        .expect("clauses are non-empty")
                })
                .reduce(Formula::conjunction)
                .expect("at least one clause");

            let mut again = Normalizer::default();
            let second = again.clauses(&rewrapped).expect("conversion failure");

            let first_signatures: HashSet<_> = first.iter().map(|c| c.signature()).collect();
            let second_signatures: HashSet<_> = second.iter().map(|c| c.signature()).collect();

            assert_eq!(first_signatures, second_signatures, "not idempotent for '{input}'");
        }
    }
}
