use std::io::{BufReader, Write};

use heron_fol::{
    config::Config,
    context::Context,
    parser::{clause::parse_clause, formula::parse_formula},
};

mod intermediate_format {
    use super::*;

    #[test]
    fn clause_lines_round_trip_through_strings() {
        let lines = [
            "¬Man(x1) ∨ Mortal(x1)",
            "Loves(x1, F0(x1))",
            "P(f(g(x), A), B) ∨ ¬Q",
            "Raining",
        ];

        for line in lines {
            let clause = parse_clause(line).expect("parse failure");
            assert_eq!(format!("{clause}"), line);

            let again = parse_clause(&format!("{clause}")).expect("reparse failure");
            assert_eq!(clause, again);
        }
    }

    #[test]
    fn clause_files_round_trip_through_disk() {
        let premises = [
            parse_formula("∀x (Man(x) → Mortal(x))").expect("parse failure"),
            parse_formula("∀x ∃y Loves(x, y)").expect("parse failure"),
            parse_formula("Man(Socrates)").expect("parse failure"),
        ];

        let mut writer_context = Context::from_config(Config::default());
        writer_context.add_premises(&premises).expect("conversion failure");

        let dir = tempfile::tempdir().expect("tempdir failure");
        let path = dir.path().join("cnf.txt");

        {
            let mut file = std::fs::File::create(&path).expect("create failure");
            writeln!(file, "# Conjunctive normal form of the premises.").expect("write failure");
            for clause in writer_context.clause_db.clauses() {
                writeln!(file, "{clause}").expect("write failure");
            }
        }

        let mut reader_context = Context::from_config(Config::default());
        let file = std::fs::File::open(&path).expect("open failure");
        let admitted = reader_context
            .read_clauses(BufReader::new(file))
            .expect("read failure");

        assert_eq!(admitted, writer_context.clause_db.len());

        let written: Vec<String> = writer_context.clause_db.clauses().map(|c| format!("{c}")).collect();
        let read: Vec<String> = reader_context.clause_db.clauses().map(|c| format!("{c}")).collect();
        assert_eq!(written, read);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = "# A comment.\n\nP(A)\n   \n¬Q(B) ∨ R(B)\n";

        let mut the_context = Context::from_config(Config::default());
        let admitted = the_context
            .read_clauses(BufReader::new(text.as_bytes()))
            .expect("read failure");

        assert_eq!(admitted, 2);
    }
}
