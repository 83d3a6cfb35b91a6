/*!
Terms, the objects predicates are applied to.

A term denotes an individual of the domain of discourse, and is one of:

- A *variable*, written with an ASCII-lowercase-initial identifier (`x`, `socrates_1`).
- A *constant*, written with any other identifier (`Socrates`, `_zero`).
- A *function* of one or more terms (`motherOf(Socrates)`), which may nest.

The distinction between a variable and a constant is fixed at the identifier, following the
convention of the input format.

The derived ordering on terms is structural --- kind, then symbol, then arguments, recursively.
The derive order of the variants is load-bearing for this: it is the term key used when sorting
literals into [clause signatures](crate::structures::clause::ClauseSignature).
*/

use std::collections::HashSet;

/// A term: a variable, a constant, or a function applied to one or more terms.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A universally quantifiable placeholder, subject to substitution.
    Variable(String),

    /// A fixed individual.
    Constant(String),

    /// A compound term, possibly Skolem-generated.
    Function(String, Vec<Term>),
}

impl Term {
    /// The term a bare identifier denotes: a variable when ASCII-lowercase-initial, and
    /// otherwise a constant.
    pub fn of_identifier(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c.is_ascii_lowercase() => Term::Variable(name.to_string()),
            _ => Term::Constant(name.to_string()),
        }
    }

    /// Whether the term is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The term with every occurrence of `variable` replaced by `replacement`.
    pub fn replaced(&self, variable: &str, replacement: &Term) -> Term {
        match self {
            Term::Variable(v) if v == variable => replacement.clone(),

            Term::Variable(_) | Term::Constant(_) => self.clone(),

            Term::Function(name, args) => Term::Function(
                name.clone(),
                args.iter().map(|arg| arg.replaced(variable, replacement)).collect(),
            ),
        }
    }

    /// The term with every variable renamed through `rename`.
    ///
    /// `rename` is applied to each occurrence, so must be stable for repeated names.
    pub(crate) fn renamed(&self, rename: &mut impl FnMut(&str) -> String) -> Term {
        match self {
            Term::Variable(v) => Term::Variable(rename(v)),

            Term::Constant(_) => self.clone(),

            Term::Function(name, args) => Term::Function(
                name.clone(),
                args.iter().map(|arg| arg.renamed(&mut *rename)).collect(),
            ),
        }
    }

    /// Records every variable name occurring in the term.
    pub(crate) fn variables_into<'t>(&'t self, names: &mut HashSet<&'t str>) {
        match self {
            Term::Variable(v) => {
                names.insert(v.as_str());
            }

            Term::Constant(_) => {}

            Term::Function(_, args) => {
                for arg in args {
                    arg.variables_into(names);
                }
            }
        }
    }

    /// Records every constant and function symbol occurring in the term.
    ///
    /// Used to keep minted Skolem symbols apart from the symbols of the input.
    pub(crate) fn symbols_into(&self, symbols: &mut HashSet<String>) {
        match self {
            Term::Variable(_) => {}

            Term::Constant(name) => {
                symbols.insert(name.clone());
            }

            Term::Function(name, args) => {
                symbols.insert(name.clone());
                for arg in args {
                    arg.symbols_into(symbols);
                }
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => write!(f, "{name}"),

            Term::Function(name, args) => {
                write!(f, "{name}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
