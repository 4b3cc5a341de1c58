//! mapgen CLI
//!
//! Generates standalone field-mapping programs from mapping files.

use std::path::Path;

use mapgenc::commands::{
    generate_file, list_languages, parse_generate_options, print_paths, GenerateOutcome,
};
use mapgenc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "generate" | "gen" => run_generate(&args[2..]),
        "languages" => {
            list_languages();
            Ok(())
        }
        "paths" => {
            if args.len() < 3 {
                eprintln!("Usage: mapgen paths <document.json>");
                std::process::exit(1);
            }
            print_paths(Path::new(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("mapgen {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(args: &[String]) -> Result<(), CliError> {
    let config = parse_generate_options(args)?;
    match generate_file(&config)? {
        GenerateOutcome::Stdout(program) => print!("{program}"),
        GenerateOutcome::Written(path) => eprintln!("Wrote {}", path.display()),
        GenerateOutcome::WrittenAll { dir, count } => {
            eprintln!("Wrote {count} programs to {}", dir.display());
        }
    }
    Ok(())
}

fn print_usage() {
    println!("mapgen - generate field-mapping programs");
    println!();
    println!("Usage: mapgen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <mappings.json>  Generate a program from a mapping file");
    println!("  languages                 List target languages");
    println!("  paths <document.json>     List the mappable paths of a document");
    println!("  help                      Show this message");
    println!("  version                   Show the version");
    println!();
    println!("Generate options:");
    println!("  --lang=<id>      Target language (default: groovy, or $MAPGEN_LANG)");
    println!("  -o <path>        Write to a file instead of stdout");
    println!("  --all            Generate every language into the -o directory");
    println!();
    println!("Mapping files are JSON: an array of {{\"sourcePath\", \"targetPath\"}} objects,");
    println!("or an object with a \"mappings\" array.");
    println!();
    println!("Paths output marks containers with {{}} or [] and leaves with *.");
    println!();
    println!("Environment:");
    println!("  MAPGEN_LANG      Language used when --lang is not given");
    println!("  RUST_LOG         Tracing filter, e.g. mapgen_codegen=trace");
}
