use heron_fol::{
    parser::formula::parse_formula,
    structures::formula::Formula,
    types::err::ParseError,
};

mod grammar {
    use super::*;

    #[test]
    fn conjunction_binds_tighter_than_disjunction() {
        let formula = parse_formula("P(a) ∨ Q(a) ∧ R(a)").expect("parse failure");
        assert_eq!(format!("{formula}"), "(P(a) ∨ (Q(a) ∧ R(a)))");
    }

    #[test]
    fn negation_binds_tighter_than_disjunction() {
        let formula = parse_formula("¬P(a) ∨ Q(a)").expect("parse failure");
        assert_eq!(format!("{formula}"), "(¬P(a) ∨ Q(a))");
    }

    #[test]
    fn implication_splits_leftmost() {
        let formula = parse_formula("P → Q → R").expect("parse failure");
        assert_eq!(format!("{formula}"), "(P → (Q → R))");
    }

    #[test]
    fn biconditional_is_lowest_precedence() {
        let formula = parse_formula("P ∧ Q ↔ R ∨ S").expect("parse failure");
        assert_eq!(format!("{formula}"), "((P ∧ Q) ↔ (R ∨ S))");
    }

    #[test]
    fn alternate_spellings() {
        let arrow = parse_formula("P ⇒ Q").expect("parse failure");
        assert_eq!(format!("{arrow}"), "(P → Q)");

        let double_arrow = parse_formula("P ⇔ Q").expect("parse failure");
        assert_eq!(format!("{double_arrow}"), "(P ↔ Q)");

        let ascii = parse_formula("P <-> Q").expect("parse failure");
        assert_eq!(format!("{ascii}"), "(P ↔ Q)");
    }

    #[test]
    fn quantifier_scope_extends_right() {
        let formula = parse_formula("∀x P(x) → Q(x)").expect("parse failure");
        assert_eq!(format!("{formula}"), "∀x (P(x) → Q(x))");
    }

    #[test]
    fn wrapping_parentheses_strip() {
        let formula = parse_formula("((P(a)))").expect("parse failure");
        assert_eq!(format!("{formula}"), "P(a)");
    }

    #[test]
    fn negated_literal_folds_to_sign() {
        let formula = parse_formula("¬P(a)").expect("parse failure");
        let Formula::Literal(literal) = formula else {
            panic!("expected a literal");
        };
        assert!(literal.negated);
    }

    #[test]
    fn negated_compound_keeps_node() {
        let formula = parse_formula("¬(P(a) ∧ Q(a))").expect("parse failure");
        assert!(matches!(formula, Formula::Negation(_)));
    }

    #[test]
    fn zero_ary_literal() {
        let formula = parse_formula("Raining").expect("parse failure");
        let Formula::Literal(literal) = formula else {
            panic!("expected a literal");
        };
        assert!(literal.terms.is_empty());
    }

    #[test]
    fn nested_terms() {
        let formula = parse_formula("P(f(g(x), A))").expect("parse failure");
        assert_eq!(format!("{formula}"), "P(f(g(x), A))");
    }
}

mod roundtrip {
    use super::*;

    #[test]
    fn display_then_parse_is_identity() {
        let inputs = [
            "∀x (Man(x) → Mortal(x))",
            "∀x ∃y Loves(x, y)",
            "¬(P(A) ∨ Q(B)) ↔ R(C)",
            "P(a) ∨ Q(a) ∧ R(a)",
            "¬∀x (Bird(x) ∧ ¬Penguin(x) → Flies(x))",
            "P(f(g(x), A), B)",
            "Raining → Wet",
        ];

        for input in inputs {
            let first = parse_formula(input).expect("parse failure");
            let second = parse_formula(&format!("{first}")).expect("reparse failure");
            assert_eq!(first, second, "round trip failed for '{input}'");
        }
    }
}

mod errors {
    use super::*;

    #[test]
    fn unbalanced_parentheses() {
        assert!(matches!(
            parse_formula("P(a"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
        assert!(matches!(
            parse_formula("P(a))"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_formula(""), Err(ParseError::EmptyFormula)));
        assert!(matches!(parse_formula("   "), Err(ParseError::EmptyFormula)));
    }

    #[test]
    fn quantifier_without_variable_or_body() {
        assert!(matches!(
            parse_formula("∀"),
            Err(ParseError::MalformedQuantifier(_))
        ));
        assert!(matches!(
            parse_formula("∀x"),
            Err(ParseError::MalformedQuantifier(_))
        ));
    }

    #[test]
    fn bad_identifier() {
        assert!(matches!(
            parse_formula("1P(a)"),
            Err(ParseError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn function_without_arguments() {
        assert!(matches!(
            parse_formula("P(f())"),
            Err(ParseError::MalformedTerm(_))
        ));
    }
}
