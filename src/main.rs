extern crate unicode_segmentation;

mod ast;
mod binding;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod table;
mod token;
mod util;

#[cfg(test)]
mod tests;

use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store};

use crate::binding::*;
use crate::error::*;

// Every variable doubles the table, so cap the expression size the command
// line will tabulate.
const MAX_VARIABLES: usize = 20;

enum RunError {
    RunSyntaxError(SyntaxError),
    RunEvalError(EvalError),
    RunTooManyVariables(usize),
}

fn main() {
    let mut expression = "".to_string();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Truth table generator for boolean expressions");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut expression)
            .add_argument("expression", Store,
                          "Boolean expression to tabulate.  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }
    if ! expression.is_empty() {
        let run_result = run(&expression);
        print_result(&run_result);

        match run_result {
            Ok(_) => (),
            Err(RunError::RunSyntaxError(_)) => process::exit(65),
            Err(RunError::RunEvalError(_)) => process::exit(70),
            Err(RunError::RunTooManyVariables(_)) => process::exit(70),
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                if input.trim().is_empty() {
                    continue;
                }
                // Keep the newline out of the column count.
                let result = run(input.trim_end());
                print_result(&result);
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

// Parse the expression, tabulate every binding of its variables, and print
// the table.  On failure nothing but the diagnostic is printed.
fn run(source: &str) -> Result<(), RunError> {
    let expr = parser::parse(source)?;

    let vars = expr.variables();
    if vars.len() > MAX_VARIABLES {
        return Err(RunError::RunTooManyVariables(vars.len()));
    }

    let bindings = enumerate_bindings(&vars);
    let mut rows = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let value = interpreter::evaluate(&expr, &binding)?;
        rows.push((binding, value));
    }

    let table = table::render(&expr, &vars, &rows);
    table.printstd();

    Ok(())
}

fn print_result(result: &Result<(), RunError>) {
    match result {
        Ok(()) => (),
        Err(RunError::RunSyntaxError(err)) => {
            util::error(err.column, &err.to_string());
        }
        Err(RunError::RunEvalError(err)) => {
            println!("Error: {}", err);
        }
        Err(RunError::RunTooManyVariables(count)) => {
            println!("Error: too many variables: {} (limit is {})",
                     count, MAX_VARIABLES);
        }
    }
}

impl From<SyntaxError> for RunError {
    fn from(err: SyntaxError) -> RunError {
        RunError::RunSyntaxError(err)
    }
}

impl From<EvalError> for RunError {
    fn from(err: EvalError) -> RunError {
        RunError::RunEvalError(err)
    }
}
