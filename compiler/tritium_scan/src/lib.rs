//! `tritium-scan`: print the lexeme stream of Tritium sources.
//!
//! Each input is tokenized with one shared [`Lexer`] and printed one lexeme
//! per line as `[KIND, text]`. Several files are tokenized in parallel and
//! printed in argument order, each under a `==> FILE <==` header.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tritium_lexer::{CommentPolicy, LexError, Lexer, LexerConfig, StringStyle};

pub const USAGE: &str =
    "Usage: tritium-scan [--comments] [--interpolate] [--no-import-paths] [--time] [FILE...]";

/// Name used for standard input in headers and diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

/// Parsed command-line options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Emit comments as lexemes.
    pub comments: bool,
    /// Lex `#{ ... }` inside strings as a balanced region.
    pub interpolate: bool,
    /// Lex an `@import` operand as ordinary lexemes instead of one path.
    pub no_import_paths: bool,
    /// Report tokenization time per input.
    pub time: bool,
    /// Inputs; empty means standard input.
    pub files: Vec<PathBuf>,
}

impl Options {
    pub fn lexer_config(&self) -> LexerConfig {
        let comments = if self.comments {
            CommentPolicy::Emit
        } else {
            CommentPolicy::Discard
        };
        let strings = if self.interpolate {
            StringStyle::Interpolated
        } else {
            StringStyle::Plain
        };
        LexerConfig::default()
            .with_comments(comments)
            .with_strings(strings)
            .with_import_paths(!self.no_import_paths)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Scan(Options),
    Help,
}

/// Parse arguments, not including the program name.
///
/// `--` ends option parsing; everything after it is a file.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = Options::default();
    let mut only_files = false;

    for arg in args {
        let arg = arg.as_ref();
        if only_files {
            options.files.push(PathBuf::from(arg));
            continue;
        }
        match arg {
            "--comments" => options.comments = true,
            "--interpolate" => options.interpolate = true,
            "--no-import-paths" => options.no_import_paths = true,
            "--time" => options.time = true,
            "-h" | "--help" => return Ok(Command::Help),
            "--" => only_files = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option '{arg}'"));
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    Ok(Command::Scan(options))
}

/// The outcome of scanning one input.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    /// The rendered lexemes, or a one-line diagnostic.
    pub result: Result<String, String>,
    /// Time spent in the tokenizer; `None` if the input was never read.
    pub elapsed: Option<Duration>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// `error: <name>:<line>:<col>: <message> near `<excerpt>``
pub fn format_lex_error(name: &str, err: &LexError) -> String {
    format!("error: {name}:{err} near `{}`", err.excerpt)
}

/// Tokenize `source` and render it.
pub fn scan_source(lexer: &Lexer, name: &str, source: &str) -> Report {
    let start = Instant::now();
    let tokenized = lexer.tokenize(source);
    let elapsed = start.elapsed();

    let result = match tokenized {
        Ok(stream) => {
            tracing::debug!(name, lexemes = stream.len(), "scanned");
            Ok(stream.render(source))
        }
        Err(err) => Err(format_lex_error(name, &err)),
    };
    Report {
        name: name.to_owned(),
        result,
        elapsed: Some(elapsed),
    }
}

/// Read a file as UTF-8, describing any failure in one line.
pub fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.display();
        match e.kind() {
            io::ErrorKind::NotFound => format!("error: cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => {
                format!("error: permission denied reading '{path}'")
            }
            io::ErrorKind::InvalidData => {
                format!("error: '{path}' contains invalid UTF-8 data")
            }
            _ => format!("error: error reading '{path}': {e}"),
        }
    })
}

fn scan_file(lexer: &Lexer, path: &Path) -> Report {
    let name = path.display().to_string();
    match read_source(path) {
        Ok(source) => scan_source(lexer, &name, &source),
        Err(message) => Report {
            name,
            result: Err(message),
            elapsed: None,
        },
    }
}

/// Scan `files` in parallel. Reports come back in argument order.
pub fn scan_files(lexer: &Lexer, files: &[PathBuf]) -> Vec<Report> {
    tracing::debug!(files = files.len(), "scanning files");
    files.par_iter().map(|path| scan_file(lexer, path)).collect()
}

/// Scan everything on standard input.
pub fn scan_stdin(lexer: &Lexer) -> Report {
    let mut source = String::new();
    match io::stdin().read_to_string(&mut source) {
        Ok(_) => scan_source(lexer, STDIN_NAME, &source),
        Err(e) => Report {
            name: STDIN_NAME.to_owned(),
            result: Err(format!("error: error reading standard input: {e}")),
            elapsed: None,
        },
    }
}

/// Print `reports`: lexemes to `out`, diagnostics and timings to `err`.
///
/// Returns `true` if every input tokenized.
pub fn write_reports(
    reports: &[Report],
    time: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let headers = reports.len() > 1;
    let mut all_ok = true;

    for (i, report) in reports.iter().enumerate() {
        if headers {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", report.name)?;
        }
        match &report.result {
            Ok(rendered) => out.write_all(rendered.as_bytes())?,
            Err(message) => {
                all_ok = false;
                writeln!(err, "{message}")?;
            }
        }
        if time {
            if let Some(elapsed) = report.elapsed {
                writeln!(err, "time to tokenize: {} usec", elapsed.as_micros())?;
            }
        }
    }

    Ok(all_ok)
}

/// Run the scanner and return the process exit status.
pub fn run(options: &Options) -> i32 {
    let lexer = Lexer::new(options.lexer_config());
    let reports = if options.files.is_empty() {
        vec![scan_stdin(&lexer)]
    } else {
        scan_files(&lexer, &options.files)
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match write_reports(&reports, options.time, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            // A closed pipe is not worth a second diagnostic.
            if e.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("error: {e}");
            }
            1
        }
    }
}
