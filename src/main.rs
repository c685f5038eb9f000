//! A binary executable that demonstrates how to use the `rill-ast` library.
//!
//! Parses each command-line argument as a JSON document and dumps the
//! resulting AST, or the error with its line and column. Without arguments
//! a fixed set of samples is used.
//!
//! You can run this example with: `cargo run -- '[1, {"a": true}]'`

use rill_ast::{parse, LineIndex};

const SAMPLES: [&str; 5] = [
    "{\"lul\": [1, \"hello\"]}",
    "123",
    "123.123",
    "\"hey\"",
    "123 ]",
];

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for input in inputs {
        println!("--- Parsing: {} ---", input);
        match parse(input) {
            Ok(program) => println!("{:#?}", program),
            Err(e) => match e.position() {
                Some(offset) => {
                    let location = LineIndex::new(input).location(offset);
                    println!("Error: {} ({}).", e, location);
                }
                None => println!("Error: {}.", e),
            },
        }
    }
}
