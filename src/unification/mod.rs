/*!
Robinson unification of terms, with occurs-check.

Unification finds a most-general [Substitution] σ under which two terms become syntactically
identical, or establishes that none exists. The implementation is the textbook recursion:

1. Apply σ to both terms.
2. A variable `v` unifies with any term `t`, by extending σ with `v ↦ t` --- unless `v`
   occurs in `t` under σ, which would bind `v` to an infinite term.
3. Constants unify with equal constants.
4. Functions unify with functions of the same symbol and arity, threading σ pairwise through
   the arguments.

The occurs-check is mandatory for soundness, and is fully recursive under σ.

Failure is a normal outcome, not an error: resolution probes many literal pairs and most do
not unify.

# Example

```rust
# use heron_fol::structures::term::Term;
# use heron_fol::unification::unify_terms;
let x = Term::Variable("x".to_string());
let socrates = Term::Constant("Socrates".to_string());

let sigma = unify_terms(&[x.clone()], &[socrates.clone()]).expect("unifiable");
assert_eq!(sigma.apply(&x), socrates);
```
*/

mod substitution;
pub use substitution::Substitution;

use crate::structures::term::Term;

/// Attempts to extend `sigma` to a unifier of `s` and `t`.
pub fn unify(s: &Term, t: &Term, mut sigma: Substitution) -> Option<Substitution> {
    let s = sigma.apply(s);
    let t = sigma.apply(t);

    match (&s, &t) {
        (Term::Variable(v), _) => unify_variable(v, &t, sigma),

        (_, Term::Variable(v)) => unify_variable(v, &s, sigma),

        (Term::Constant(a), Term::Constant(b)) => match a == b {
            true => Some(sigma),
            false => None,
        },

        (Term::Function(f, f_args), Term::Function(g, g_args))
            if f == g && f_args.len() == g_args.len() =>
        {
            for (a, b) in f_args.iter().zip(g_args) {
                sigma = unify(a, b, sigma)?;
            }
            Some(sigma)
        }

        _ => None,
    }
}

/// Attempts to unify two term lists pairwise, threading one substitution throughout.
///
/// Fails on a length mismatch, as two literals of distinct arity never resolve.
pub fn unify_terms(these: &[Term], those: &[Term]) -> Option<Substitution> {
    if these.len() != those.len() {
        return None;
    }

    let mut sigma = Substitution::default();
    for (s, t) in these.iter().zip(those) {
        sigma = unify(s, t, sigma)?;
    }
    Some(sigma)
}

/// Extends `sigma` with `v ↦ t`, after the occurs-check.
///
/// `t` has had `sigma` applied by the caller.
fn unify_variable(v: &str, t: &Term, mut sigma: Substitution) -> Option<Substitution> {
    if let Term::Variable(w) = t {
        if w == v {
            return Some(sigma);
        }
    }

    if occurs(v, t, &sigma) {
        return None;
    }

    sigma.bind(v, t.clone());
    Some(sigma)
}

/// Whether `v` occurs in `t`, after applying `sigma`.
pub fn occurs(v: &str, t: &Term, sigma: &Substitution) -> bool {
    match sigma.apply(t) {
        Term::Variable(w) => w == v,

        Term::Constant(_) => false,

        Term::Function(_, args) => args.iter().any(|arg| occurs(v, arg, sigma)),
    }
}
