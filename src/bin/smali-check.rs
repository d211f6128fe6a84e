use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use smali_syntax::{Catalog, ParseOptions, Parser, SmaliError, SmaliFile, find_smali_files};

#[derive(clap::Parser)]
#[command(name = "smali-check", about = "Report syntax problems in smali files")]
struct Cli {
    /// Files or directories to check; directories are searched for `.smali` files
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Reject instructions that only exist in optimized dex files
    #[arg(long)]
    no_odex: bool,
    /// Print the tokens of every line
    #[arg(long)]
    tokens: bool,
    /// Print the parsed statement tree as YAML
    #[arg(long)]
    dump: bool,
}

fn collect(path: &Path) -> Result<Vec<SmaliFile>, SmaliError> {
    if path.is_dir() {
        find_smali_files(path)
    } else {
        Ok(vec![SmaliFile::read(path)?])
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = ParseOptions {
        odex: !cli.no_odex,
        ..ParseOptions::default()
    };
    let parser = Parser::with_options(Catalog::builtin(), options);

    let mut files = vec![];
    for path in &cli.paths {
        match collect(path) {
            Ok(found) => files.extend(found),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        }
    }

    let mut problems = 0;
    for file in &files {
        if cli.tokens {
            for (line_no, line) in file.text.lines().enumerate() {
                let tokens = parser.tokenizer().tokenize_line(line, line_no);
                for token in tokens.tokens() {
                    println!(
                        "{}:{}:{}: {:?} `{}`",
                        file.path.display(),
                        line_no + 1,
                        token.start + 1,
                        token.kind,
                        token.text
                    );
                }
            }
        }

        let doc = file.parse(&parser);
        if cli.dump {
            match serde_yaml::to_string(&doc) {
                Ok(yaml) => println!("# {}\n{yaml}", file.path.display()),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        for diagnostic in doc.diagnostics() {
            let start = diagnostic.span.start;
            print!(
                "{}:{}:{}: {}: {}",
                file.path.display(),
                start.line + 1,
                start.column + 1,
                diagnostic.kind,
                diagnostic.message
            );
            match &diagnostic.expected {
                Some(expected) => println!(" (expected `{expected}`)"),
                None => println!(),
            }
            problems += 1;
        }
    }

    if problems > 0 {
        eprintln!("{problems} problem(s) in {} file(s)", files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
