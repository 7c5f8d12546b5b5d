mod output;

use clap::Parser; // clap crate for CLI argument parsing
use model::SyntaxError;
use std::fmt;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/*
Without an input path the driver reads from stdin, one line at a time,
until it sees an empty line. When stdin is a terminal a prompt is printed
first; piped input is read silently so the output stays machine-comparable.
*/

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file (reads stdin when omitted)
    input_path: Option<PathBuf>,

    /// Run lexer only and print the tokens
    #[arg(short, long, conflicts_with = "parse")]
    lex: bool,

    /// Run lexer and parser, printing only the AST
    #[arg(short, long)]
    parse: bool,
}

#[derive(Debug)]
enum DriverError {
    Io(io::Error),
    Syntax(SyntaxError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(e) => write!(f, "failed to read source: {}", e),
            DriverError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Io(err)
    }
}

impl From<SyntaxError> for DriverError {
    fn from(err: SyntaxError) -> Self {
        DriverError::Syntax(err)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // --lex: we should only lex
    // --parse: we should lex and parse, and show the AST
    // no option: we should lex and parse, and show both tokens and AST

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let source = match &args.input_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_interactive()?,
    };

    let tokens = lexer::tokenize(&source);

    if args.lex {
        print_tokens(&tokens);
        return Ok(());
    }

    // Parse before printing anything so a syntax error leaves stdout empty
    let program = parser::parse(&tokens)?;

    if !args.parse {
        print_tokens(&tokens);
        println!();
    }

    println!("AST:");
    println!("{}", output::format_program(&program));
    Ok(())
}

fn print_tokens(tokens: &[model::Token]) {
    println!("TOKENS:");
    for token in tokens {
        println!("{}", output::format_token(token));
    }
}

fn read_interactive() -> io::Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("Enter your code (finish with an empty line):");
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
