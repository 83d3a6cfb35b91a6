use std::io::{self, Write};
use std::path::Path;

use heron_fol::{
    context::Context,
    reports::TraceEntry,
    structures::formula::Formula,
};

use crate::read::Input;

/// Writes the parsed-structure report: the file as read, each premise, the query, and the
/// tree of each premise.
pub(super) fn formula_report(path: &Path, input: &Input) -> io::Result<()> {
    let mut out = std::fs::File::create(path)?;

    writeln!(out, "ORIGINAL FORMULAS")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;
    writeln!(out, "File contents:")?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "{}", input.text.trim_end())?;
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out)?;

    writeln!(out, "Parsed premises:")?;
    for (index, premise) in input.premises.iter().enumerate() {
        writeln!(out, "{}. {premise}", index + 1)?;
    }
    writeln!(out)?;
    writeln!(out, "Query (for refutation): {}", input.query)?;
    writeln!(out)?;

    writeln!(out, "Premise structure:")?;
    for (index, premise) in input.premises.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "--- Premise {} ---", index + 1)?;
        let mut tree = String::new();
        formula_tree(premise, 0, &mut tree);
        write!(out, "{tree}")?;
    }

    Ok(())
}

/// Writes the intermediate CNF file: one clause per line, with a leading comment.
///
/// The file is read back by [read_clauses](heron_fol::context::Context::read_clauses), and
/// round-trips exactly.
pub(super) fn cnf_file(path: &Path, the_context: &Context) -> io::Result<()> {
    let mut out = std::fs::File::create(path)?;

    writeln!(out, "# Conjunctive normal form of the premises.")?;
    for clause in the_context.clause_db.clauses() {
        writeln!(out, "{clause}")?;
    }

    Ok(())
}

/// Writes the inference report: the query, its negation, the derivation trace, and the
/// result.
pub(super) fn inference_report(path: &Path, query: &Formula, the_context: &Context) -> io::Result<()> {
    let mut out = std::fs::File::create(path)?;

    writeln!(out, "RESOLUTION INFERENCE")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    writeln!(out, "Query: {query}")?;
    for entry in the_context.trace().entries() {
        if let TraceEntry::NegatedQuery { clause } = entry {
            writeln!(out, "Negated: {clause}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Derivation:")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for entry in the_context.trace().entries() {
        if !matches!(entry, TraceEntry::NegatedQuery { .. }) {
            writeln!(out, "{entry}")?;
        }
    }
    writeln!(out)?;

    match the_context.report().proven() {
        true => writeln!(out, "RESULT: TRUE")?,
        false => writeln!(out, "RESULT: FALSE")?,
    }

    Ok(())
}

fn formula_tree(formula: &Formula, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);

    match formula {
        Formula::Literal(literal) => {
            out.push_str(&format!("{pad}Literal: {literal}\n"));
        }

        Formula::Negation(inner) => {
            out.push_str(&format!("{pad}Negation:\n"));
            formula_tree(inner, depth + 1, out);
        }

        Formula::Binary { op, left, right } => {
            out.push_str(&format!("{pad}Connective: {op}\n"));
            formula_tree(left, depth + 1, out);
            formula_tree(right, depth + 1, out);
        }

        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => {
            out.push_str(&format!("{pad}Quantifier: {quantifier}{variable}\n"));
            formula_tree(body, depth + 1, out);
        }
    }
}
