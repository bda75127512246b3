use std::process::ExitCode;

use clap::Parser;
use luhn36::{full_code, validate_code};

/// Prefixes used when none are given on the command line.
const SAMPLE_PREFIXES: [&str; 2] = ["PYTHON01", "TESTCODE"];

#[derive(Parser, Debug)]
#[command(name = "luhn36", about = "Base-36 Luhn check characters for identifiers")]
struct Cli {
    /// Identifier prefixes, or full codes with `--validate`.
    values: Vec<String>,
    /// Check existing codes instead of generating new ones.
    #[arg(long)]
    validate: bool,
}

fn generate_line(prefix: &str) -> String {
    let code = full_code(prefix);
    format!("{prefix} -> {code} (Valid: {})", validate_code(&code))
}

fn validate_line(code: &str) -> String {
    format!("{code} (Valid: {})", validate_code(code))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.validate {
        let mut all_valid = true;
        for code in &cli.values {
            all_valid &= validate_code(code);
            println!("{}", validate_line(code));
        }
        return if all_valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let prefixes: Vec<&str> = if cli.values.is_empty() {
        SAMPLE_PREFIXES.to_vec()
    } else {
        cli.values.iter().map(String::as_str).collect()
    };
    for prefix in prefixes {
        println!("{}", generate_line(prefix));
    }
    ExitCode::SUCCESS
}
