/*!
Clauses, aka. collections of literals, interpreted as the disjunction of those literals.

A clause is stored as an ordered vector for reproducible traces, though is a set with respect to
identity: duplicate literals are dropped on construction, and the [signature](Clause::signature)
used for duplicate rejection in the [clause database](crate::db::clause) is invariant under
literal order.

- The empty clause, displayed `□`, is the contradiction.
- Every variable of a clause is scoped to that clause.

# Variable namespaces

Clauses admitted to a database come from two sources, with two naming conventions:

- Premise clauses keep the names produced by standardization, which are within the identifier
  alphabet of the input format.
- Resolvents are [canonicalized](Clause::canonical): variables are renamed, in order of first
  occurrence, to `x1, x2, …`, so alpha-variant resolvents share a signature.

During a resolution step one side is [primed](Clause::primed). A prime is outside the
identifier alphabet and never survives canonicalization, so the two sides of a resolution step
always have disjoint variable namespaces.
*/

use std::collections::{HashMap, HashSet};

use crate::structures::literal::Literal;

/// A clause: a disjunction of literals, with set identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

/// The canonical signature of a clause: its literal keys, sorted.
///
/// Signatures are hashable, and two clauses with equal signatures are equal as literal sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClauseSignature(Vec<Literal>);

impl Clause {
    /// A clause over the given literals, dropping duplicates by key while preserving first
    /// occurrence order.
    pub fn new(literals: Vec<Literal>) -> Self {
        let mut seen: HashSet<&Literal> = HashSet::new();
        let mut keep = Vec::with_capacity(literals.len());
        for literal in &literals {
            if seen.insert(literal) {
                keep.push(literal.clone());
            }
        }
        Clause { literals: keep }
    }

    /// The unit clause over `literal`.
    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    /// The empty clause, □.
    pub fn empty() -> Self {
        Clause { literals: Vec::new() }
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literals of the clause, in stored order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The literal at `index`, if the clause contains at least `index` literals.
    pub fn literal_at(&self, index: usize) -> Option<&Literal> {
        self.literals.get(index)
    }

    /// The canonical signature of the clause.
    pub fn signature(&self) -> ClauseSignature {
        let mut keys = self.literals.clone();
        keys.sort();
        ClauseSignature(keys)
    }

    /// Whether the clause contains some literal together with its exact structural complement.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .enumerate()
            .any(|(index, literal)| self.literals[index + 1..].iter().any(|other| literal.complements(other)))
    }

    /// The clause with every variable renamed through `rename`.
    fn renamed(&self, mut rename: impl FnMut(&str) -> String) -> Clause {
        let literals = self
            .literals
            .iter()
            .map(|literal| Literal {
                negated: literal.negated,
                predicate: literal.predicate.clone(),
                terms: literal.terms.iter().map(|term| term.renamed(&mut rename)).collect(),
            })
            .collect();
        Clause { literals }
    }

    /// The clause with every variable prime-suffixed, for a variable namespace guaranteed
    /// disjoint from any admitted clause.
    pub(crate) fn primed(&self) -> Clause {
        self.renamed(|name: &str| format!("{name}'"))
    }

    /// The clause with variables renamed, in order of first occurrence, to `x1, x2, …`.
    ///
    /// Canonicalization is a function of clause structure alone, so alpha-variant clauses
    /// canonicalize identically.
    pub(crate) fn canonical(&self) -> Clause {
        let mut assigned: HashMap<String, String> = HashMap::new();
        self.renamed(|name: &str| {
            let next = format!("x{}", assigned.len() + 1);
            assigned.entry(name.to_string()).or_insert(next).clone()
        })
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "□");
        }
        for (index, literal) in self.literals.iter().enumerate() {
            if index > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}
