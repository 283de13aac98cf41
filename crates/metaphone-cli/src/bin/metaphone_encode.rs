// metaphone-encode: Print Double Metaphone codes for words from stdin.
//
// Reads one word or name per line and prints
// `word<TAB>primary<TAB>secondary`. Blank lines are skipped.
//
// Usage:
//   metaphone-encode [OPTIONS] [WORD...]
//
// Options:
//   --max-length N   Truncate codes to N characters (default: $METAPHONE_MAX_LENGTH or no cap)
//   --strict         Reject lines that are not valid UTF-8 instead of dropping bad bytes
//   -h, --help       Print help

use std::io::{self, BufRead, Write};

use metaphone_double::normalizer::decode_lossy;

fn main() {
    metaphone_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (max_length, args) =
        metaphone_cli::parse_max_length(&args).unwrap_or_else(|e| metaphone_cli::fatal(&e));

    if metaphone_cli::wants_help(&args) {
        println!("metaphone-encode: Print Double Metaphone codes.");
        println!();
        println!("Usage: metaphone-encode [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, encodes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("Output: word<TAB>primary<TAB>secondary");
        println!();
        println!("Options:");
        println!("  --max-length N   Truncate codes to N characters");
        println!("                   (default: ${} or no limit)", metaphone_cli::MAX_LENGTH_ENV);
        println!("  --strict         Reject input lines that are not valid UTF-8");
        println!("  -h, --help       Print this help");
        return;
    }

    let mut strict = false;
    let mut words: Vec<String> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--strict" => strict = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            other => metaphone_cli::fatal(&format!("unknown option {other}")),
        }
    }

    let handle = metaphone_cli::build_handle(max_length, strict)
        .unwrap_or_else(|e| metaphone_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !words.is_empty() {
        for word in &words {
            let codes = handle.encode(word);
            let _ = writeln!(out, "{}", metaphone_cli::format_codes(word, &codes));
        }
        return;
    }

    let stdin = io::stdin();
    for (n, line) in stdin.lock().split(b'\n').enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim_ascii();
        if word.is_empty() {
            continue;
        }
        match handle.encode_bytes(word) {
            Ok(codes) => {
                let text = decode_lossy(word);
                let _ = writeln!(out, "{}", metaphone_cli::format_codes(&text, &codes));
            }
            Err(e) => {
                log::warn!("skipping line {}: {e}", n + 1);
                eprintln!("error: line {}: {e}", n + 1);
            }
        }
    }
}
