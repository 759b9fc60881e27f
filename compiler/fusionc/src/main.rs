//! Fusion CLI
//!
//! Lexer inspection driver.

use fusionc::commands::{lex_file, LexOptions};

fn main() {
    fusionc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--no-whitespace" {
                    options.emit_whitespace = false;
                } else if arg == "--codes" {
                    options.show_codes = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: fusion lex <file> [--no-whitespace] [--codes]");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: fusion lex <file> [--no-whitespace] [--codes]");
                std::process::exit(1);
            };

            lex_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Fusion {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Fusion lexer driver");
    println!();
    println!("Usage: fusion <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-whitespace      Omit [white] tokens from the listing");
    println!("  --codes              Prefix each token with its numeric kind code");
    println!();
    println!("Environment:");
    println!("  FUSION_LOG=<filter>  Enable tracing output (e.g. fusion_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  fusion lex main.fu");
    println!("  fusion lex main.fu --no-whitespace --codes");
}
