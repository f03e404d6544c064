use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use visitgen::generators::{JavaGenerator, PhpGenerator, PythonGenerator, TypeScriptGenerator};
use visitgen::{grammar_lines, parse_grammar, Emitter, Language, LOX_EXPR_GRAMMAR};

#[derive(Parser)]
#[command(
    name = "visitgen",
    about = "Generate visitor-pattern AST classes from a compact grammar"
)]
struct Cli {
    /// Directory the generated file is written to
    #[arg(required_unless_present_any = ["stdout", "dump_types"])]
    output_dir: Option<PathBuf>,

    /// Name of the abstract base type
    #[arg(short, long, default_value = "Expr")]
    base: String,

    /// Grammar file, one `Name : Type field, Type field` line per node type.
    /// Defaults to the Lox expression grammar
    #[arg(short, long)]
    grammar: Option<PathBuf>,

    /// Language to generate
    #[arg(short, long, value_enum, default_value_t = Target::Php)]
    lang: Target,

    /// Namespace (PHP) or package (Java) of the generated file.
    /// Ignored with a warning for ts and py
    #[arg(short, long)]
    namespace: Option<String>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Print the parsed node types as JSON and exit
    #[arg(long)]
    dump_types: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Php,
    Ts,
    Java,
    Py,
}

impl Target {
    fn language(self) -> &'static dyn Language {
        match self {
            Target::Php => &PhpGenerator,
            Target::Ts => &TypeScriptGenerator,
            Target::Java => &JavaGenerator,
            Target::Py => &PythonGenerator,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let source = match &cli.grammar {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read grammar {}", path.display()))?,
        None => LOX_EXPR_GRAMMAR.join("\n"),
    };
    let lines: Vec<&str> = grammar_lines(&source).collect();

    if cli.dump_types {
        let types = parse_grammar(&lines)?;
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    let mut emitter = Emitter::new(cli.lang.language());
    if let Some(namespace) = &cli.namespace {
        emitter = emitter.with_namespace(namespace);
    }

    let unit = emitter
        .generate(&cli.base, &lines)
        .with_context(|| format!("failed to generate the `{}` hierarchy", cli.base))?;

    if cli.stdout {
        print!("{}", unit.contents);
        return Ok(());
    }

    if let Some(dir) = &cli.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let path = dir.join(&unit.file_name);
        fs::write(&path, &unit.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(path = %path.display(), types = lines.len(), "wrote hierarchy");
    }

    Ok(())
}
