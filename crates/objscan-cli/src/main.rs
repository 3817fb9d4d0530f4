//! objscan CLI - Tokenize and inspect Wavefront-style text files
//!
//! Usage:
//!   objscan [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   tokens    List the tokens of every line (default)
//!   lines     List each line's keyword and name
//!   stats     Show line, token and numeric field counts

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::process;

use objscan_core::number::parse_real;
use objscan_core::{Classify, Lexer, ObjClassifier, ScanConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;
    init_tracing(config.verbose);

    let input =
        fs::read(&config.file).map_err(|e| format!("failed to read '{}': {}", config.file, e))?;
    tracing::debug!(file = %config.file, bytes = input.len(), "loaded input");

    let scan_config = ScanConfig::new().with_decimal_comma(config.decimal_comma);
    let scan = scan_file(&input, scan_config);

    match config.command {
        Command::Tokens => cmd_tokens(&scan, &config),
        Command::Lines => cmd_lines(&scan, &config),
        Command::Stats => cmd_stats(&scan, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
    decimal_comma: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Tokens,
    Lines,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Tokens;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut decimal_comma = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("objscan {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "--decimal-comma" => decimal_comma = true,
            "tokens" => command = Command::Tokens,
            "lines" => command = Command::Lines,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
        decimal_comma,
    })
}

fn print_help() {
    eprintln!(
        r#"objscan - Wavefront-style text file scanner

USAGE:
    objscan [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    tokens      List the tokens of every line (default)
    lines       List each line's keyword and name
    stats       Show line, token and numeric field counts

OPTIONS:
    -v, --verbose        Log scanning progress to stderr
    -j, --json           Output in JSON format
        --decimal-comma  Accept ',' as the decimal separator
    -h, --help           Print help information
    -V, --version        Print version information

ENVIRONMENT:
    RUST_LOG             Overrides the log filter (e.g. objscan_core=trace)

EXAMPLES:
    objscan model.obj             List tokens line by line
    objscan lines scene.mtl       Show keywords and material names
    objscan -j stats model.obj    Statistics as JSON
"#
    );
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Scanning
// =============================================================================

/// One non-blank line of input.
#[derive(Debug, Serialize)]
struct LineRecord {
    number: u32,
    keyword: String,
    name: String,
    tokens: Vec<String>,
    numeric: usize,
}

#[derive(Debug)]
struct FileScan {
    records: Vec<LineRecord>,
    lines: u32,
    bytes: usize,
}

/// Append a `\n` when the file does not end with a line terminator, so the
/// last byte of the buffer is never content.
fn terminated(input: &[u8]) -> Cow<'_, [u8]> {
    match input.last() {
        Some(&last) if !ObjClassifier.is_line_end(last) => {
            let mut owned = Vec::with_capacity(input.len() + 1);
            owned.extend_from_slice(input);
            owned.push(b'\n');
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(input),
    }
}

fn scan_file(input: &[u8], config: ScanConfig) -> FileScan {
    let text = terminated(input);
    let mut lexer = Lexer::new(&text).with_config(config);
    let mut records = Vec::new();

    while !lexer.is_eof() {
        let number = lexer.line() + 1;
        lexer.next_word();
        if lexer.at_line_end() {
            lexer.skip_line();
            continue;
        }

        let keyword = lexer.keyword();
        let keyword = String::from_utf8_lossy(lexer.slice(keyword)).into_owned();

        let buffer = lexer.buffer();
        let (_, name) = buffer.name(buffer.next_word(lexer.offset()));

        let mut tokens = Vec::new();
        let mut numeric = 0;
        loop {
            lexer.next_word();
            if lexer.at_line_end() {
                break;
            }
            let token = lexer.keyword();
            let token = lexer.slice(token);
            if parse_real(token, config.decimal_comma).is_ok() {
                numeric += 1;
            }
            tokens.push(String::from_utf8_lossy(token).into_owned());
        }

        tracing::trace!(line = number, keyword = %keyword, fields = tokens.len(), "scanned line");
        records.push(LineRecord {
            number,
            keyword,
            name,
            tokens,
            numeric,
        });
        lexer.skip_line();
    }

    FileScan {
        records,
        lines: lexer.line(),
        bytes: input.len(),
    }
}

// =============================================================================
// Tokens Command
// =============================================================================

fn cmd_tokens(scan: &FileScan, config: &Config) -> Result<(), String> {
    match config.format {
        OutputFormat::Json => print_json(&scan.records),
        OutputFormat::Text => {
            for record in &scan.records {
                let mut fields = vec![record.keyword.as_str()];
                fields.extend(record.tokens.iter().map(String::as_str));
                println!("{:>6}: {}", record.number, fields.join(" | "));
            }
            Ok(())
        }
    }
}

// =============================================================================
// Lines Command
// =============================================================================

#[derive(Serialize)]
struct JsonLine<'a> {
    number: u32,
    keyword: &'a str,
    name: &'a str,
}

fn cmd_lines(scan: &FileScan, config: &Config) -> Result<(), String> {
    match config.format {
        OutputFormat::Json => {
            let lines: Vec<_> = scan
                .records
                .iter()
                .map(|r| JsonLine {
                    number: r.number,
                    keyword: &r.keyword,
                    name: &r.name,
                })
                .collect();
            print_json(&lines)
        }
        OutputFormat::Text => {
            for record in &scan.records {
                println!("{:>6}: {:<8} {}", record.number, record.keyword, record.name);
            }
            Ok(())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Debug, Serialize)]
struct ScanStats<'a> {
    bytes: usize,
    lines: u32,
    content_lines: usize,
    tokens: usize,
    numeric_fields: usize,
    keywords: BTreeMap<&'a str, usize>,
}

impl<'a> ScanStats<'a> {
    fn from_scan(scan: &'a FileScan) -> Self {
        let mut keywords = BTreeMap::new();
        for record in &scan.records {
            *keywords.entry(record.keyword.as_str()).or_insert(0) += 1;
        }

        Self {
            bytes: scan.bytes,
            lines: scan.lines,
            content_lines: scan.records.len(),
            tokens: scan.records.iter().map(|r| r.tokens.len() + 1).sum(),
            numeric_fields: scan.records.iter().map(|r| r.numeric).sum(),
            keywords,
        }
    }
}

fn cmd_stats(scan: &FileScan, config: &Config) -> Result<(), String> {
    let stats = ScanStats::from_scan(scan);

    if matches!(config.format, OutputFormat::Json) {
        return print_json(&stats);
    }

    println!("Scan Statistics");
    println!("---------------");
    println!("Bytes:          {}", stats.bytes);
    println!("Lines:          {}", stats.lines);
    println!("Content lines:  {}", stats.content_lines);
    println!("Tokens:         {}", stats.tokens);
    println!("Numeric fields: {}", stats.numeric_fields);
    println!();
    println!("Keywords:");
    for (keyword, count) in &stats.keywords {
        println!("  {:<10} {}", keyword, count);
    }

    Ok(())
}

// =============================================================================
// JSON Output
// =============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_appends_newline_only_when_missing() {
        assert_eq!(terminated(b"f 1 2 3").as_ref(), b"f 1 2 3\n");
        assert!(matches!(terminated(b"f 1 2 3\n"), Cow::Borrowed(_)));
        assert!(matches!(terminated(b"f 1 2 3\0"), Cow::Borrowed(_)));
        assert!(terminated(b"").is_empty());
    }

    #[test]
    fn test_scan_crlf_file_without_final_newline() {
        let input = b"v 1 2 3\r\nv 4 5 6\r\nf 1 2 3";
        let scan = scan_file(input, ScanConfig::new());

        let numbers: Vec<u32> = scan.records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(scan.lines, 3);
        assert_eq!(scan.bytes, input.len());

        let last = &scan.records[2];
        assert_eq!(last.keyword, "f");
        assert_eq!(last.tokens, vec!["1", "2", "3"]);

        let stats = ScanStats::from_scan(&scan);
        assert_eq!(stats.numeric_fields, 9);
        assert_eq!(stats.tokens, 12);
    }

    #[test]
    fn test_scan_terminated_file_counts_each_line_once() {
        let scan = scan_file(b"o cube\n\nusemtl Brushed Steel\n", ScanConfig::new());
        assert_eq!(scan.lines, 3);
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[1].number, 3);
        assert_eq!(scan.records[1].name, "Brushed Steel");
    }
}
