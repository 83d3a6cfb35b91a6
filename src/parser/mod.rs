/*!
Parsers for the two textual formats of the library.

- [parse_formula](formula::parse_formula) reads one formula of the input format, with
  quantifiers, the standard connectives (and their alternate spellings `⇒` and `⇔`/`<->`),
  and parenthesization.
- [parse_clause](clause::parse_clause) reads one clause line of the intermediate CNF format,
  ` ∨ `-joined literals over fully nested terms. The clause parser and the clause
  [display](crate::structures::clause::Clause) implementation round-trip exactly.

Identifiers are `[A-Za-z_][A-Za-z0-9_]*`. In term position an ASCII-lowercase-initial
identifier is a variable and any other identifier a constant, a function when applied to
arguments.

Both parsers work by scanning with parenthesis-depth tracking, rather than through a token
stream: formulas are line-sized, and the split points of the grammar are single glyphs.
Errors are [ParseError](crate::types::err::ParseError) values naming the offending substring;
line numbers are attached by the caller, which knows the file.
*/

pub mod clause;
pub mod formula;

use crate::{
    structures::{literal::Literal, term::Term},
    types::err::ParseError,
};

/// Whether every parenthesis of `s` closes, without a close before an open.
fn balanced(s: &str) -> bool {
    let mut depth: i32 = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Trims `s` and strips balanced wrapping parentheses, repeatedly.
fn strip_outer(s: &str) -> &str {
    let mut s = s.trim();
    while s.starts_with('(') && s.ends_with(')') && balanced(&s[1..s.len() - 1]) {
        s = s[1..s.len() - 1].trim();
    }
    s
}

/// Whether `s` is an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits `s` at depth-0 commas.
fn split_args(s: &str) -> Result<Vec<&str>, ParseError> {
    let mut args = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (index, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParentheses(s.to_string()));
                }
            }
            ',' if depth == 0 => {
                args.push(&s[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedParentheses(s.to_string()));
    }
    args.push(&s[start..]);
    Ok(args)
}

/// Parses a term: a bare identifier, or a function over comma-separated terms, nested to any
/// depth.
pub fn parse_term(s: &str) -> Result<Term, ParseError> {
    let s = s.trim();

    let Some(open) = s.find('(') else {
        if !is_identifier(s) {
            return Err(ParseError::InvalidIdentifier(s.to_string()));
        }
        return Ok(Term::of_identifier(s));
    };

    if !s.ends_with(')') {
        return Err(ParseError::MalformedTerm(s.to_string()));
    }

    let name = &s[..open];
    if !is_identifier(name) {
        return Err(ParseError::InvalidIdentifier(name.to_string()));
    }

    let inner = &s[open + 1..s.len() - 1];
    if inner.trim().is_empty() {
        // A function has at least one argument.
        return Err(ParseError::MalformedTerm(s.to_string()));
    }

    let args = split_args(inner)?
        .iter()
        .map(|arg| parse_term(arg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Term::Function(name.to_string(), args))
}

/// Parses an unsigned atom: a predicate identifier, optionally applied to terms.
///
/// A bare identifier, or one applied to an empty argument list, is a 0-ary literal.
fn parse_atom(s: &str) -> Result<Literal, ParseError> {
    let s = s.trim();

    let Some(open) = s.find('(') else {
        if !is_identifier(s) {
            return Err(ParseError::InvalidIdentifier(s.to_string()));
        }
        return Ok(Literal::new(s, Vec::new(), false));
    };

    if !s.ends_with(')') {
        return Err(ParseError::UnrecognizedFormula(s.to_string()));
    }

    let predicate = &s[..open];
    if !is_identifier(predicate) {
        return Err(ParseError::InvalidIdentifier(predicate.to_string()));
    }

    let inner = &s[open + 1..s.len() - 1];
    if inner.trim().is_empty() {
        return Ok(Literal::new(predicate, Vec::new(), false));
    }

    let terms = split_args(inner)?
        .iter()
        .map(|arg| parse_term(arg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Literal::new(predicate, terms, false))
}
