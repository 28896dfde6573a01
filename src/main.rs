use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use quill::{
    interpreter::object::{core::Object, environment::Environment},
    repl,
};

/// quill is a small, dynamically typed scripting language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run; starts the interactive REPL when omitted.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.path {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_file(path: &Path) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            path.display()
        );
        return ExitCode::FAILURE;
    };

    let env = Environment::global();
    match quill::interpret(&source, &env) {
        Ok(Object::Error(error)) => println!("{error}"),
        Ok(_) => {},
        Err(errors) => {
            for error in errors {
                println!("{error}");
            }
        },
    }

    ExitCode::SUCCESS
}

fn run_repl() -> ExitCode {
    println!("This is quill. Feel free to type in commands.");

    match repl::start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
