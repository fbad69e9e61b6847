use std::{
    fs,
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use sorrel::interpreter::environment::Environment;

/// sorrel is a small, expression-oriented programming language with
/// first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sorrel to read a script from a file instead of inline text.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the final value of the script after it runs.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text (or a path with --file). Leave empty to start an
    /// interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
            );
            process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = sorrel::run(&script, args.pipe_mode) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Reads one line at a time and evaluates it in a persistent global
/// environment, so bindings from earlier lines stay visible.
fn repl() {
    let env = Environment::global();
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match sorrel::interpret(&line, &env) {
            Ok(value) => {
                if !value.is_null() {
                    println!("{value}");
                }
            },
            Err(e) => eprintln!("{e}"),
        }
        prompt();
    }
}

fn prompt() {
    print!(">> ");
    let _ = io::stdout().flush();
}
