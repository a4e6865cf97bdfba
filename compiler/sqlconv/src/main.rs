//! sqlconv CLI

use sqlconv::commands::{lex_files, render_files, strip_comments_file};
use sqlconv::{init_tracing, parse_convert_options, CliError, ConvertOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let options = match parse_convert_options(&args[2..]) {
        Ok(options) => options,
        Err(error) => fail(&error),
    };
    if let Err(error) = init_tracing(options.log.as_deref()) {
        fail(&error);
    }

    let result = run(command, &options);
    if let Err(error) = result {
        fail(&error);
    }
}

fn run(command: &str, options: &ConvertOptions) -> Result<(), CliError> {
    match command {
        "lex" => lex_files(options),
        "render" => {
            let count = render_files(options)?;
            if options.output.is_some() {
                eprintln!("rendered {count} document(s)");
            }
            Ok(())
        }
        "strip-comments" => {
            let removed = strip_comments_file(options)?;
            eprintln!("removed {removed} comment(s)");
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(error: &CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("sqlconv: format-preserving SQL token rewriting");
    eprintln!();
    eprintln!("Usage: sqlconv <command> [options] <file>...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>...            Dump the token list of each document");
    eprintln!("  render <file>...         Round-trip documents through the token list");
    eprintln!("  strip-comments <file>    Remove comments and their leading spaces");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --encoding=<enc>         narrow (UTF-8, default) or wide (UTF-16)");
    eprintln!("  --dialect=<name>         ansi (default), mysql or postgres");
    eprintln!("  --backslash-escapes      Treat \\ as an escape inside strings");
    eprintln!("  --hash-comments          Treat # as a line comment");
    eprintln!("  --nested-comments        Allow nested /* */ comments");
    eprintln!("  -o <path>                Output file (a directory for several inputs)");
    eprintln!("  --log=<path>             Write tracing output to a file");
    eprintln!();
    eprintln!("Logging is filtered by SQLCONV_LOG, or RUST_LOG when unset.");
}
