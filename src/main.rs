use std::error::Error;
use std::fs;
use std::process::ExitCode;

use log::info;
use nfa2dfa::description::{parse_description, EXAMPLE};
use nfa2dfa::nfa_to_dfa;

const USAGE: &str = "usage: nfa2dfa [--dot | --table] [FILE]

Reads an NFA description from FILE (or uses the built-in S/P/Z example),
converts it to a DFA by subset construction and prints the result.

  --dot     print the DFA as a Graphviz document
  --table   print the transition function as a table";

enum Output {
    Listing,
    Dot,
    Table,
}

fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let mut output = Output::Listing;
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--dot" => output = Output::Dot,
            "--table" => output = Output::Table,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other if other.starts_with('-') || path.is_some() => {
                return Err(format!("unexpected argument `{other}`\n\n{USAGE}").into())
            }
            _ => path = Some(arg.clone()),
        }
    }

    let text = match &path {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?,
        None => EXAMPLE.to_string(),
    };
    let nfa = parse_description(&text)?;
    info!(
        "read NFA with {} states from {}",
        nfa.states.len(),
        path.as_deref().unwrap_or("the built-in example")
    );

    let dfa = nfa_to_dfa(&nfa);
    match output {
        Output::Listing => print!("{dfa}"),
        Output::Dot => print!("{}", dfa.to_graphviz()),
        Output::Table => print!("{}", dfa.to_table()),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
