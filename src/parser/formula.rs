//! The formula parser.

use crate::{
    parser::{balanced, parse_atom, strip_outer},
    structures::formula::{Connective, Formula, Quantifier},
    types::err::ParseError,
};

/// The binary connectives with their alternate spellings, lowest precedence first.
///
/// A formula splits at the leftmost depth-0 occurrence of any spelling of the
/// lowest-precedence connective present.
const CONNECTIVES: [(Connective, &[&str]); 4] = [
    (Connective::Biconditional, &["↔", "⇔", "<->"]),
    (Connective::Implication, &["→", "⇒"]),
    (Connective::Disjunction, &["∨"]),
    (Connective::Conjunction, &["∧"]),
];

/// Parses a single formula.
///
/// # Example
///
/// ```rust
/// # use heron_fol::parser::formula::parse_formula;
/// let formula = parse_formula("∀x (Man(x) → Mortal(x))").expect("parse failure");
/// assert_eq!(format!("{formula}"), "∀x (Man(x) → Mortal(x))");
/// ```
pub fn parse_formula(input: &str) -> Result<Formula, ParseError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    if !balanced(trimmed) {
        return Err(ParseError::UnbalancedParentheses(trimmed.to_string()));
    }

    parse_subformula(trimmed)
}

fn parse_subformula(s: &str) -> Result<Formula, ParseError> {
    let s = strip_outer(s);

    if s.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    // A quantifier binds outermost: the remainder of the subformula is its scope.
    if let Some(rest) = s.strip_prefix('∀') {
        return parse_quantified(Quantifier::Universal, rest, s);
    }
    if let Some(rest) = s.strip_prefix('∃') {
        return parse_quantified(Quantifier::Existential, rest, s);
    }

    // Split before examining a leading negation, so ¬ binds tighter than any binary
    // connective.
    for (op, spellings) in CONNECTIVES {
        if let Some((lhs, rhs)) = split_top_level(s, spellings) {
            return Ok(Formula::binary(op, parse_subformula(lhs)?, parse_subformula(rhs)?));
        }
    }

    if let Some(rest) = s.strip_prefix('¬') {
        return Ok(Formula::negation(parse_subformula(rest)?));
    }

    parse_atom(s).map(Formula::Literal)
}

/// Splits `s` at the leftmost depth-0 occurrence of any of `spellings`.
fn split_top_level<'s>(s: &'s str, spellings: &[&str]) -> Option<(&'s str, &'s str)> {
    let mut depth: i32 = 0;

    for (index, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 => {
                for spelling in spellings {
                    if s[index..].starts_with(spelling) {
                        return Some((&s[..index], &s[index + spelling.len()..]));
                    }
                }
            }
            _ => {}
        }
    }

    None
}

fn parse_quantified(quantifier: Quantifier, rest: &str, whole: &str) -> Result<Formula, ParseError> {
    let rest = rest.trim_start();

    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let variable = &rest[..end];

    if variable.is_empty() || !variable.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return Err(ParseError::MalformedQuantifier(whole.to_string()));
    }

    let body = &rest[end..];
    if body.trim().is_empty() {
        return Err(ParseError::MalformedQuantifier(whole.to_string()));
    }

    Ok(Formula::quantified(quantifier, variable, parse_subformula(body)?))
}
