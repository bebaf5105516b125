use std::{
    fs,
    io::{BufRead, Write},
};

use clap::Parser;
use tarn::{error::ErrorReporter, interpreter::evaluator::core::Interpreter, run};

/// tarn is a small, dynamically typed scripting language with a tree-walking
/// interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tarn to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run, or a file path when --file is given. Omit it to
    /// start an interactive session.
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
                                          eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                          std::process::exit(1);
                                      })
    } else {
        contents
    };

    let mut interpreter = Interpreter::new();
    let mut reporter = ErrorReporter::new();

    run(&script, &mut interpreter, &mut reporter);
    report(&reporter);

    if reporter.had_error() {
        std::process::exit(65);
    }
    if reporter.had_runtime_error() {
        std::process::exit(70);
    }
}

/// Reads and runs lines until end of input or an empty line.
///
/// The interpreter outlives each line, so variables persist across prompts.
/// The reporter is reset between lines; one bad line never poisons the next.
fn repl() {
    let mut interpreter = Interpreter::new();
    let mut reporter = ErrorReporter::new();

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush().expect("stdout should accept writes");

        line.clear();
        let read = stdin.lock()
                        .read_line(&mut line)
                        .expect("stdin should be readable");

        if read == 0 || line.trim().is_empty() {
            break;
        }

        run(&line, &mut interpreter, &mut reporter);
        report(&reporter);
        reporter.reset();
    }
}

fn report(reporter: &ErrorReporter) {
    for diagnostic in reporter.diagnostics() {
        eprintln!("{diagnostic}");
    }
}
