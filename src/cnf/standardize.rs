//! Standardization apart: every quantifier binds a name unique within the formula.
//!
//! A traversal carries an environment from original names to fresh names, extended at each
//! quantifier with a mint of the form `base1`, `base2`, …. The mint avoids every variable
//! name occurring anywhere in the formula, not only those on the current path, so two sibling
//! quantifiers over the same name cannot share a mint and later capture one another under
//! distribution.

use std::collections::{HashMap, HashSet};

use crate::structures::formula::Formula;

pub(super) fn rename_bound(formula: &Formula) -> Formula {
    let mut taken: HashSet<String> = {
        let mut names = HashSet::new();
        formula.variables_into(&mut names);
        names.iter().map(|name| name.to_string()).collect()
    };

    walk(formula, &HashMap::new(), &mut taken)
}

fn walk(formula: &Formula, env: &HashMap<String, String>, taken: &mut HashSet<String>) -> Formula {
    match formula {
        Formula::Literal(literal) => {
            let mut rename = |name: &str| match env.get(name) {
                Some(fresh) => fresh.clone(),
                None => name.to_string(),
            };

            Formula::Literal(crate::structures::literal::Literal {
                negated: literal.negated,
                predicate: literal.predicate.clone(),
                terms: literal.terms.iter().map(|term| term.renamed(&mut rename)).collect(),
            })
        }

        Formula::Negation(inner) => Formula::Negation(Box::new(walk(inner, env, taken))),

        Formula::Binary { op, left, right } => {
            Formula::binary(*op, walk(left, env, taken), walk(right, env, taken))
        }

        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => {
            let fresh = fresh_name(variable, taken);
            taken.insert(fresh.clone());

            let mut inner_env = env.clone();
            inner_env.insert(variable.clone(), fresh.clone());

            Formula::quantified(*quantifier, fresh, walk(body, &inner_env, taken))
        }
    }
}

fn fresh_name(base: &str, taken: &HashSet<String>) -> String {
    let mut index = 1;
    loop {
        let candidate = format!("{base}{index}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        index += 1;
    }
}
