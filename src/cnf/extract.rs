//! Clause extraction: `∧` separates clauses, and each maximal `∨` subtree flattens into one
//! clause, duplicate literals dropped by key.
//!
//! Any node other than a conjunction, disjunction, literal, or negated literal is an
//! invariant violation by an earlier stage and faults here.

use crate::{
    structures::{clause::Clause, formula::{Connective, Formula}, literal::Literal},
    types::err::CnfError,
};

pub(super) fn clauses(formula: &Formula) -> Result<Vec<Clause>, CnfError> {
    let mut clauses = Vec::new();
    split_conjunction(formula, &mut clauses)?;
    Ok(clauses)
}

fn split_conjunction(formula: &Formula, clauses: &mut Vec<Clause>) -> Result<(), CnfError> {
    match formula {
        Formula::Binary {
            op: Connective::Conjunction,
            left,
            right,
        } => {
            split_conjunction(left, clauses)?;
            split_conjunction(right, clauses)
        }

        _ => {
            let mut literals = Vec::new();
            flatten_disjunction(formula, &mut literals)?;
            clauses.push(Clause::new(literals));
            Ok(())
        }
    }
}

fn flatten_disjunction(formula: &Formula, literals: &mut Vec<Literal>) -> Result<(), CnfError> {
    match formula {
        Formula::Binary {
            op: Connective::Disjunction,
            left,
            right,
        } => {
            flatten_disjunction(left, literals)?;
            flatten_disjunction(right, literals)
        }

        Formula::Literal(literal) => {
            literals.push(literal.clone());
            Ok(())
        }

        Formula::Negation(inner) => match &**inner {
            Formula::Literal(literal) => {
                literals.push(literal.flipped());
                Ok(())
            }
            _ => Err(CnfError::ResidualNegation(formula.to_string())),
        },

        Formula::Quantified { .. } => Err(CnfError::ResidualQuantifier(formula.to_string())),

        Formula::Binary { .. } => Err(CnfError::ResidualConnective(formula.to_string())),
    }
}
