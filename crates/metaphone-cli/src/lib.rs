// metaphone-cli: shared utilities for CLI tools.

use std::process;

use metaphone_core::{DecodePolicy, PhoneticCodes};
use metaphone_double::MetaphoneHandle;

/// Environment variable supplying the default code length cap.
pub const MAX_LENGTH_ENV: &str = "METAPHONE_MAX_LENGTH";

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parse a `--max-length=N` or `--max-length N` argument from command line
/// args, falling back to `METAPHONE_MAX_LENGTH`.
///
/// Returns `(max_length, remaining_args)`.
pub fn parse_max_length(args: &[String]) -> Result<(Option<usize>, Vec<String>), String> {
    let mut flag = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--max-length=") {
            flag = Some(val.to_string());
        } else if arg == "--max-length" {
            match args.get(i + 1) {
                Some(val) => {
                    flag = Some(val.clone());
                    skip_next = true;
                }
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    let env = std::env::var(MAX_LENGTH_ENV).ok();
    let max_length = resolve_max_length(flag.as_deref(), env.as_deref())?;
    Ok((max_length, remaining))
}

/// Pick the length cap: the flag wins over the environment. An empty
/// environment value means no cap.
pub fn resolve_max_length(flag: Option<&str>, env: Option<&str>) -> Result<Option<usize>, String> {
    if let Some(val) = flag {
        return parse_length(val, "--max-length").map(Some);
    }
    match env.map(str::trim) {
        Some(val) if !val.is_empty() => parse_length(val, MAX_LENGTH_ENV).map(Some),
        _ => Ok(None),
    }
}

fn parse_length(val: &str, source: &str) -> Result<usize, String> {
    match val.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid value for {source}: {val:?} (expected a positive integer)")),
    }
}

/// Build a handle with the given cap and decode policy.
pub fn build_handle(max_length: Option<usize>, strict: bool) -> Result<MetaphoneHandle, String> {
    let mut handle = MetaphoneHandle::new();
    handle
        .set_max_code_length(max_length)
        .map_err(|e| e.to_string())?;
    if strict {
        handle.set_decode_policy(DecodePolicy::Strict);
    }
    log::debug!("handle options: {:?}", handle.options());
    Ok(handle)
}

/// `word<TAB>primary<TAB>secondary`.
pub fn format_codes(word: &str, codes: &PhoneticCodes) -> String {
    format!("{word}\t{}\t{}", codes.primary(), codes.secondary())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
