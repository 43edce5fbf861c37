use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use minimark_core::{Options, render_with_options};

fn main() {
    let mut input: Option<String> = None;
    let mut options = Options::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-v" | "--version" => {
                println!("minimark {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-n" | "--no-html" => options.strict_escape = true,
            "--" => {
                input = args.next();
                break;
            }
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown option: {}", arg);
                    print_usage();
                    process::exit(2);
                }
                input = Some(arg);
                break;
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    print!("{}", render_with_options(&source, &options));
}

fn print_usage() {
    eprintln!("Usage: minimark [-n] [-v] [--] [input]");
}
