/*!
A simple CLI interface to the library.

# Use

```sh
heron_cli [--option(=value)]* file.txt
```

The file holds one formula per non-blank line, the last non-blank line being the assertion to
decide, and the lines before it the premises.

Three reports are written to the output directory (`output`, by default):

- `formulas.txt` --- the premises and query as parsed, with the structure of each premise.
- `cnf.txt` --- the premises in conjunctive normal form, one clause per line. The proof
  attempt reads its clauses from this file, through
  [read_clauses](heron_fol::context::Context::read_clauses).
- `inference.txt` --- the derivation trace and the result.

The result is also printed: `RESULT: TRUE` if the assertion was proven, and otherwise
`RESULT: FALSE`.

## Exit codes

- 0: the run completed, whatever the result.
- 1: the input could not be read or parsed.
- 2: an internal failure.
*/

use clap::Parser;

use heron_fol::{config::Config, context::Context, reports::TraceEntry};

mod args;
use args::Args;

mod read;
use read::read_input;

mod write;

/// Entrypoint to the CLI.
fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut cfg = Config::default();
    if let Some(requested) = args.max_steps {
        let (min, max) = cfg.max_steps.min_max();
        if requested < min || max < requested {
            println!("{} requires a value between {min} and {max}", cfg.max_steps.name);
            std::process::exit(1);
        }
        cfg.max_steps.value = requested;
    }

    let input = match read_input(&args.file) {
        Ok(input) => input,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };
    println!(
        "Read {} premise(s) and a query from {:?}",
        input.premises.len(),
        args.file
    );

    let mut conversion_context = Context::from_config(cfg.clone());

    // Reserve the query's symbols before any premise is converted, so no Skolem symbol of a
    // premise collides with a symbol of the query.
    conversion_context.reserve_symbols(&input.query);

    if let Err(e) = conversion_context.add_premises(&input.premises) {
        println!("Conversion failure: {e}");
        std::process::exit(2);
    }
    println!(
        "{} clause(s) in conjunctive normal form",
        conversion_context.clause_db.len()
    );

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        println!("Failed to create {:?}: {}.", args.output_dir, e.kind());
        std::process::exit(1);
    }

    let cnf_path = args.output_dir.join("cnf.txt");
    let written = write::formula_report(&args.output_dir.join("formulas.txt"), &input)
        .and_then(|_| write::cnf_file(&cnf_path, &conversion_context));
    if let Err(e) = written {
        println!("Failed to write to {:?}: {}.", args.output_dir, e.kind());
        std::process::exit(1);
    }

    // The proof attempt runs over the intermediate file as written, not over the conversion
    // context.
    let mut the_context = Context::from_config(cfg);
    match std::fs::File::open(&cnf_path) {
        Err(e) => {
            println!("Failed to read {cnf_path:?}: {}.", e.kind());
            std::process::exit(1);
        }
        Ok(file) => {
            if let Err(e) = the_context.read_clauses(std::io::BufReader::new(file)) {
                println!("Failed to read {cnf_path:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = the_context.prove_formula(&input.query) {
        println!("Proof failure: {e}");
        std::process::exit(2);
    }

    if args.trace {
        for entry in the_context.trace().entries() {
            if !matches!(entry, TraceEntry::NegatedQuery { .. }) {
                println!("{entry}");
            }
        }
    }

    if let Err(e) = write::inference_report(&args.output_dir.join("inference.txt"), &input.query, &the_context) {
        println!("Failed to write to {:?}: {}.", args.output_dir, e.kind());
        std::process::exit(1);
    }

    match the_context.report().proven() {
        true => println!("RESULT: TRUE"),
        false => println!("RESULT: FALSE"),
    }
}
