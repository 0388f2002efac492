use std::{
    io::{stderr, stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use ast::{AstPrinter, Expr, Literal, RpnPrinter, Token, TokenKind};
use clap::Parser;
use diagnostics::{Diagnostics, Line};

const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;

#[derive(clap::Parser)]
struct Args {
    /// Script to scan. Starts a prompt if omitted.
    file: Option<PathBuf>,

    /// Print the built-in sample expression in the given notation and exit.
    #[arg(long, value_enum)]
    demo_ast: Option<Notation>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Notation {
    Prefix,
    Rpn,
}

/// Scans `source` and writes one token per line to `out`. Returns the number
/// of tokens written.
fn run(
    source: &str,
    diagnostics: &mut Diagnostics,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let tokens = scanner::scan_tokens(source, diagnostics);
    for token in &tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(tokens.len())
}

fn report(diagnostics: &mut Diagnostics) -> anyhow::Result<()> {
    let mut err = stderr();
    for diagnostic in diagnostics.take_reported() {
        writeln!(err, "{}", diagnostic)?;
    }
    Ok(())
}

fn run_file(
    path: PathBuf,
    diagnostics: &mut Diagnostics,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let token_count = run(&source, diagnostics, out)?;
    log::debug!("Scanned {} tokens from {}", token_count, path.display());
    report(diagnostics)?;

    Ok(if diagnostics.had_error() { ExitCode::from(EX_DATAERR) } else { ExitCode::SUCCESS })
}

fn usage_exit_code(error: &clap::Error) -> ExitCode {
    // --help and --version also come back as errors, but go to stdout
    if error.use_stderr() {
        ExitCode::from(EX_USAGE)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt(diagnostics: &mut Diagnostics) -> anyhow::Result<ExitCode> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        run(&line, diagnostics, &mut stdout())?;
        report(diagnostics)?;
        diagnostics.reset_error();
    }
}

/// `-123 * (45.67)`
fn demo_expression() -> Expr<'static> {
    Expr::binary(
        Expr::unary(
            Token::new(TokenKind::Minus, "-", Literal::Nil, Line(1), 0),
            Expr::literal(123.0),
        ),
        Token::new(TokenKind::Star, "*", Literal::Nil, Line(1), 5),
        Expr::grouping(Expr::literal(45.67)),
    )
}

fn print_demo(notation: Notation) -> String {
    let expr = demo_expression();
    match notation {
        Notation::Prefix => AstPrinter::print(&expr),
        Notation::Rpn => RpnPrinter::print(&expr),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(usage_exit_code(&e));
        }
    };

    if let Some(notation) = args.demo_ast {
        println!("{}", print_demo(notation));
        return Ok(ExitCode::SUCCESS);
    }

    let mut diagnostics = Diagnostics::new();
    match args.file {
        Some(file) => run_file(file, &mut diagnostics, &mut stdout()),
        None => run_prompt(&mut diagnostics),
    }
}
