mod cli;
mod error;
mod syntax;

use std::process;

use clap::Parser;

use crate::{
    cli::Cli,
    syntax::{parse, Lexer},
};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let src = match cli.eval {
        Some(expr) => expr,
        None => {
            // clap guarantees `file` is present when `--eval` is not.
            let file_path = cli.file.unwrap();
            match std::fs::read_to_string(&file_path) {
                Ok(src) => src,
                Err(why) => {
                    eprintln!("Failed to read {file_path:?}: {why}");
                    process::exit(1);
                }
            }
        }
    };

    match parse(Lexer::new(&src)) {
        Ok(expression) => {
            log::debug!("{expression:?}");
            println!("{expression} => {}", expression.evaluate());
        }
        Err(why) => {
            eprintln!("Error: {why}");
            process::exit(1);
        }
    }
}
