use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use multilex::pipeline::{codegen, graph, report, semantic};
use multilex::profile::Language;
use multilex::scanner;
use multilex::scanner::token::Token;

#[derive(Parser, Debug)]
#[command(
    name = "multilex",
    about = "A profile-driven lexical scanner with a demo compiler pipeline"
)]
struct Cli {
    /// Source file to scan (omit for the interactive tokenizer)
    file: Option<PathBuf>,

    /// Grammar profile to scan with
    #[arg(long, default_value = "c", value_parser = ["c", "python"])]
    language: String,

    /// Token output format
    #[arg(long, default_value = "lines", value_parser = ["lines", "json"])]
    format: String,

    /// Print the token-chain graph as DOT and exit
    #[arg(long)]
    graph: bool,

    /// Print first-definition diagnostics and exit
    #[arg(long)]
    semantic: bool,

    /// Print intermediate code and exit
    #[arg(long)]
    ir: bool,

    /// Print optimized intermediate code and exit
    #[arg(long)]
    optimized: bool,

    /// Print machine code and exit
    #[arg(long)]
    machine: bool,
}

fn selected_language(cli: &Cli) -> Language {
    match cli.language.as_str() {
        "python" => Language::PythonLike,
        _ => Language::CLike,
    }
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    match &cli.file {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("read source file '{}'", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => bail!("source file required for this operation"),
    }
}

fn scan_source<'s>(source: &'s str, name: &str, language: Language) -> Result<Vec<Token<'s>>> {
    match scanner::tokenize(source, language.profile()) {
        Ok(tokens) => Ok(tokens),
        Err(e) => {
            let report = miette::Report::new(e.with_source_code(name, source));
            eprintln!("{report:?}");
            bail!("lexical analysis failed");
        }
    }
}

fn program_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "program".to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let language = selected_language(&cli);

    if cli.file.is_none() {
        multilex::repl::run_repl(language);
        return Ok(());
    }

    let (source, name) = read_source(&cli)?;
    let tokens = scan_source(&source, &name, language)?;

    if cli.graph {
        print!("{}", graph::to_dot(&tokens, &program_name(&name)));
        return Ok(());
    }

    if cli.semantic {
        let diagnostics = semantic::check(&tokens);
        if diagnostics.is_empty() {
            println!("no issues found");
        } else {
            for diagnostic in &diagnostics {
                println!("{diagnostic}");
            }
        }
        return Ok(());
    }

    if cli.ir || cli.optimized || cli.machine {
        let mut lines = codegen::intermediate(&tokens);
        if cli.optimized || cli.machine {
            lines = codegen::optimize(&lines);
        }
        if cli.machine {
            lines = codegen::machine(&lines);
        }
        for line in &lines {
            println!("{line}");
        }
        return Ok(());
    }

    match cli.format.as_str() {
        "json" => print!("{}", report::to_json(&tokens)),
        _ => print!("{}", report::render(&tokens)),
    }
    Ok(())
}
