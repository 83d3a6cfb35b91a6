//! The clause-line parser for the intermediate CNF format.

use crate::{
    parser::{balanced, parse_atom},
    structures::clause::Clause,
    types::err::ParseError,
};

/// Parses one clause line of the intermediate format: literals joined by `∨`, each literal
/// `[¬]pred(arg, …)` over fully nested terms.
///
/// Comments and blank lines are handled by the reader, not here.
///
/// # Example
///
/// ```rust
/// # use heron_fol::parser::clause::parse_clause;
/// let clause = parse_clause("¬Man(x1) ∨ Mortal(x1)").expect("parse failure");
/// assert_eq!(format!("{clause}"), "¬Man(x1) ∨ Mortal(x1)");
/// ```
pub fn parse_clause(line: &str) -> Result<Clause, ParseError> {
    let s = line.trim();

    if s.is_empty() {
        return Err(ParseError::MalformedClause(line.to_string()));
    }

    if !balanced(s) {
        return Err(ParseError::UnbalancedParentheses(s.to_string()));
    }

    let mut literals = Vec::new();

    for part in s.split('∨') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ParseError::MalformedClause(line.to_string()));
        }

        let (negated, body) = match part.strip_prefix('¬') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, part),
        };

        let atom = parse_atom(body)?;
        literals.push(match negated {
            true => atom.flipped(),
            false => atom,
        });
    }

    Ok(Clause::new(literals))
}
