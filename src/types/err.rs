/*!
Error types used in the library.

- Some of these are external --- e.g. a [ParseError] reports malformed input, with the
  offending substring attached.
- Others indicate a bug --- e.g. a [CnfError] means a node survived a pipeline stage which
  should have rewritten it, and the conversion faults loudly rather than repairing the tree.

Exhaustion of the resolution step bound is *not* an error: it is a terminal
[state](crate::context::ContextState) reported as not-proven.

Names of the error enums --- for the most part --- overlap with corresponding structs.
As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing.
    Parse(ParseError),

    /// An error in the CNF pipeline.
    Cnf(CnfError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// The attempted action could not be completed given the state of the context.
    State(StateError),

    /// An I/O error, by kind.
    Io(std::io::ErrorKind),
}

/// An error from parsing a formula or clause line.
///
/// Each variant carries the offending substring, where one exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input was empty, or emptied by stripping parentheses.
    EmptyFormula,

    /// Parentheses do not balance.
    UnbalancedParentheses(String),

    /// A quantifier without a bound variable or body.
    MalformedQuantifier(String),

    /// A term which matches no production.
    MalformedTerm(String),

    /// A clause line of the intermediate format which matches no production.
    MalformedClause(String),

    /// An identifier with a character outside `[A-Za-z0-9_]`, or an empty identifier.
    InvalidIdentifier(String),

    /// A formula which matches no production.
    UnrecognizedFormula(String),
}

/// An internal invariant violation in the CNF pipeline: a node survived the stage which
/// should have eliminated it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CnfError {
    /// A quantifier survived Skolemization and universal erasure.
    ResidualQuantifier(String),

    /// An implication or biconditional survived elimination.
    ResidualConnective(String),

    /// A negation of a non-literal survived negation normal form.
    ResidualNegation(String),
}

/// An error from the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// An attempt to add the empty clause as a premise.
    EmptyClause,
}

/// An error from the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Input or a proof was requested, though the context has left its fresh state.
    NotFresh,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<CnfError> for ErrorKind {
    fn from(e: CnfError) -> Self {
        ErrorKind::Cnf(e)
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFormula => write!(f, "Empty formula."),
            Self::UnbalancedParentheses(s) => write!(f, "Unbalanced parentheses in '{s}'."),
            Self::MalformedQuantifier(s) => write!(f, "Malformed quantifier in '{s}'."),
            Self::MalformedTerm(s) => write!(f, "Malformed term '{s}'."),
            Self::MalformedClause(s) => write!(f, "Malformed clause '{s}'."),
            Self::InvalidIdentifier(s) => write!(f, "Invalid identifier '{s}'."),
            Self::UnrecognizedFormula(s) => write!(f, "Unrecognized formula '{s}'."),
        }
    }
}

impl std::fmt::Display for CnfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResidualQuantifier(s) => write!(f, "A quantifier survived the pipeline: '{s}'."),
            Self::ResidualConnective(s) => write!(f, "A connective survived the pipeline: '{s}'."),
            Self::ResidualNegation(s) => write!(f, "A compound negation survived the pipeline: '{s}'."),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Cnf(e) => write!(f, "{e}"),
            Self::ClauseDB(ClauseDBError::EmptyClause) => write!(f, "The empty clause cannot be added."),
            Self::State(StateError::NotFresh) => write!(f, "The context is no longer fresh."),
            Self::Io(kind) => write!(f, "I/O error: {kind}."),
        }
    }
}
