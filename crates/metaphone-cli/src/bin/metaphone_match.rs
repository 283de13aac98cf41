// metaphone-match: Filter candidate words that sound like a query word.
//
// Reads candidates from stdin (one per line) and prints each one that shares
// a phonetic code with WORD, prefixed by the match strength:
//   S: primary codes agree
//   N: one primary agrees with the other's secondary
//   W: only the secondary codes agree
//
// Usage:
//   metaphone-match [--max-length N] WORD
//
// Options:
//   --max-length N   Truncate codes to N characters before comparing
//   -h, --help       Print help

use std::io::{self, BufRead, Write};

fn main() {
    metaphone_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (max_length, args) =
        metaphone_cli::parse_max_length(&args).unwrap_or_else(|e| metaphone_cli::fatal(&e));

    if metaphone_cli::wants_help(&args) {
        println!("metaphone-match: Find phonetic matches for a word.");
        println!();
        println!("Usage: metaphone-match [--max-length N] WORD");
        println!();
        println!("Reads candidate words from stdin (one per line) and prints");
        println!("those that sound like WORD, prefixed with S:, N: or W:");
        println!("(strong, normal or weak match).");
        println!();
        println!("Options:");
        println!("  --max-length N   Truncate codes to N characters before comparing");
        println!("                   (default: ${} or no limit)", metaphone_cli::MAX_LENGTH_ENV);
        println!("  -h, --help       Print this help");
        return;
    }

    let query = match args.as_slice() {
        [word] if !word.starts_with('-') => word.clone(),
        [] => metaphone_cli::fatal("missing WORD argument"),
        _ => metaphone_cli::fatal("expected exactly one WORD argument"),
    };

    let handle = metaphone_cli::build_handle(max_length, false)
        .unwrap_or_else(|e| metaphone_cli::fatal(&e));
    let query_codes = handle.encode(&query);
    log::debug!("query {query:?} -> {query_codes}");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        if let Some(strength) = query_codes.match_strength(&handle.encode(candidate)) {
            let _ = writeln!(out, "{}: {candidate}", strength.tag());
        }
    }
}
