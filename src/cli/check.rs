use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chcss::{Candidate, ClassName, Rejection, Vocabulary, storage, validate};
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::{diagnostic, terminal::Colorize};

#[derive(Debug, clap::Args)]
pub struct Check {
    /// File to check, or '-' for standard input
    #[arg(default_value = "-")]
    file: PathBuf,

    /// How to find class names in the input
    #[arg(long, value_name = "FORMAT", default_value = "tokens")]
    input: InputFormat,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Only report rejected class names
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum InputFormat {
    /// Whitespace separated class names
    #[default]
    Tokens,
    /// Values of class attributes in HTML markup
    Html,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

/// Outcome of checking one class name.
struct Checked<'a> {
    candidate: Candidate<'a>,
    result: Result<ClassName<'a>, Rejection>,
}

impl Check {
    #[instrument(level = "debug", skip(vocabulary))]
    pub fn run(self, vocabulary: &Vocabulary) -> anyhow::Result<()> {
        let input = read_input(&self.file)?;
        let source = if is_stdin(&self.file) {
            "<stdin>".to_string()
        } else {
            self.file.display().to_string()
        };

        let candidates = match self.input {
            InputFormat::Tokens => storage::whitespace_tokens(&input),
            InputFormat::Html => storage::html_class_names(&input),
        };
        debug!("Checking {} class names from {source}", candidates.len());

        let results = check_all(&candidates, vocabulary);

        match self.output {
            OutputFormat::Table => self.output_table(&source, &results),
            OutputFormat::Json => Self::output_json(&source, &results)?,
            OutputFormat::Summary => Self::output_summary(&results),
        }

        if count_rejected(&results) > 0 {
            std::process::exit(2);
        }

        Ok(())
    }

    fn output_table(&self, source: &str, results: &[Checked]) {
        for checked in results {
            let text = checked.candidate.text;
            match &checked.result {
                Ok(_) if self.quiet => {}
                Ok(_) => println!("{}", format!("✓ {text}").success()),
                Err(rejection) => println!(
                    "{}\n",
                    diagnostic::render(source, checked.candidate.line, text, rejection).error()
                ),
            }
        }

        if self.quiet {
            return;
        }

        let rejected = count_rejected(results);
        if rejected == 0 {
            println!(
                "\n{}",
                format!("All {} class names valid", results.len()).success()
            );
        } else {
            println!(
                "\n{}",
                format!("{rejected} of {} class names rejected", results.len()).warning()
            );
            println!(
                "{}",
                "Run 'chcss config' to show the vocabulary in use".dim()
            );
        }
    }

    fn output_json(source: &str, results: &[Checked]) -> anyhow::Result<()> {
        use serde_json::json;

        let class_names: Vec<_> = results
            .iter()
            .map(|checked| match &checked.result {
                Ok(name) => json!({
                    "class": checked.candidate.text,
                    "line": checked.candidate.line,
                    "valid": true,
                    "segments": {
                        "namespace": name.namespace(),
                        "function": name.function(),
                        "components": name.components(),
                        "element": name.element(),
                        "modifiers": name.modifiers(),
                    }
                }),
                Err(rejection) => json!({
                    "class": checked.candidate.text,
                    "line": checked.candidate.line,
                    "valid": false,
                    "reason": rejection.to_string(),
                    "position": rejection.position(),
                    "token": rejection.token(),
                    "expected": rejection
                        .expected()
                        .iter()
                        .map(|segment| segment.name())
                        .collect::<Vec<_>>(),
                }),
            })
            .collect();

        let rejected = count_rejected(results);
        let output = json!({
            "source": source,
            "status": if rejected == 0 { "valid" } else { "rejected" },
            "class_names": class_names,
            "summary": {
                "checked": results.len(),
                "rejected": rejected,
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_summary(results: &[Checked]) {
        println!("checked={} rejected={}", results.len(), count_rejected(results));
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Validates every candidate, preserving input order.
fn check_all<'a>(candidates: &[Candidate<'a>], vocabulary: &Vocabulary) -> Vec<Checked<'a>> {
    candidates
        .par_iter()
        .map(|&candidate| Checked {
            candidate,
            result: validate(candidate.text, vocabulary),
        })
        .collect()
}

fn count_rejected(results: &[Checked]) -> usize {
    results.iter().filter(|checked| checked.result.is_err()).count()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chcss::{ConfigLayer, Segment, VocabularySet};

    use super::*;

    fn vocabulary() -> Vocabulary {
        let set = |tokens: &[&str]| VocabularySet::new(tokens.iter().copied()).unwrap();
        let overrides = ConfigLayer::unset()
            .with(Segment::Namespace, set(&["gf_news"]))
            .with(Segment::Function, set(&["c"]))
            .with(Segment::Component, set(&["navbar"]))
            .with(Segment::Modifier, set(&["reverse"]));
        Vocabulary::resolve(&ConfigLayer::defaults(), None, Some(&overrides))
    }

    #[test]
    fn check_all_preserves_order() {
        let input = (0..200)
            .map(|i| {
                if i % 3 == 0 {
                    "gfnews-c"
                } else {
                    "gf_news-c-navbar-ul-reverse"
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        let candidates = storage::whitespace_tokens(&input);

        let results = check_all(&candidates, &vocabulary());

        assert_eq!(results.len(), 200);
        for (i, checked) in results.iter().enumerate() {
            assert_eq!(checked.candidate.line, i + 1);
            assert_eq!(checked.result.is_err(), i % 3 == 0);
        }
        assert_eq!(count_rejected(&results), 67);
    }

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"gf_news-c\n").unwrap();

        assert_eq!(read_input(file.path()).unwrap(), "gf_news-c\n");
    }

    #[test]
    fn read_input_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let error = read_input(&tmp.path().join("missing.html")).unwrap_err();
        assert!(error.to_string().starts_with("failed to read"));
    }

    #[test]
    fn file_is_accepted_with_or_without_subcommand() {
        use clap::Parser;

        use crate::cli::{Cli, Command};

        let cli = Cli::try_parse_from(["chcss", "--input", "html", "index.html"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.check.file, PathBuf::from("index.html"));
        assert!(matches!(cli.check.input, InputFormat::Html));

        let cli = Cli::try_parse_from(["chcss", "check", "-q", "index.html"]).unwrap();
        let Some(Command::Check(check)) = cli.command else {
            panic!("expected the check subcommand");
        };
        assert_eq!(check.file, PathBuf::from("index.html"));
        assert!(check.quiet);
    }

    #[test]
    fn stdin_is_the_default_file() {
        use clap::Parser;

        let cli = crate::cli::Cli::try_parse_from(["chcss"]).unwrap();
        assert!(is_stdin(&cli.check.file));
    }

    #[test]
    fn dash_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("index.html")));
    }
}
