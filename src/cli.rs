use std::path::{Path, PathBuf};

mod check;
mod config;
mod diagnostic;
mod terminal;

use check::Check;
use chcss::{ConfigLayer, Vocabulary, VocabularySet, storage};
use clap::ArgAction;
use config::ShowConfig;

#[derive(Debug, clap::Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    ///
    /// A `.json` file is read from its "chcss" entry, anything else as TOML
    /// from its [tool.chcss] table. Defaults to ./pyproject.toml, then
    /// ./package.json.
    #[arg(short = 'o', long, value_name = "PATH", global = true)]
    config_file: Option<PathBuf>,

    #[command(flatten)]
    vocabulary: VocabularyArgs,

    // `check` is the default command, so its arguments are accepted here too
    #[command(flatten)]
    check: Check,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Vocabulary overrides; each replaces the configured list outright.
#[derive(Debug, clap::Args)]
struct VocabularyArgs {
    /// Comma delimited list of allowed namespaces
    #[arg(short, long, value_name = "LIST", global = true)]
    namespaces: Option<VocabularySet>,

    /// Comma delimited list of allowed functions
    #[arg(short, long, value_name = "LIST", global = true)]
    functions: Option<VocabularySet>,

    /// Comma delimited list of allowed components
    #[arg(short, long, value_name = "LIST", global = true)]
    components: Option<VocabularySet>,

    /// Comma delimited list of allowed elements [default: HTML elements]
    #[arg(short, long, value_name = "LIST", global = true)]
    elements: Option<VocabularySet>,

    /// Comma delimited list of allowed modifiers
    #[arg(short, long, value_name = "LIST", global = true)]
    modifiers: Option<VocabularySet>,

    /// Also allow obsolete HTML elements when elements are not configured
    #[arg(long, global = true)]
    obsolete_elements: bool,
}

impl VocabularyArgs {
    fn defaults(&self) -> ConfigLayer {
        if self.obsolete_elements {
            ConfigLayer::defaults_with_obsolete_elements()
        } else {
            ConfigLayer::defaults()
        }
    }

    fn overrides(self) -> ConfigLayer {
        ConfigLayer {
            namespaces: self.namespaces,
            functions: self.functions,
            components: self.components,
            elements: self.elements,
            modifiers: self.modifiers,
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let vocabulary = Self::resolve_vocabulary(self.config_file.as_deref(), self.vocabulary);

        self.command
            .unwrap_or(Command::Check(self.check))
            .run(&vocabulary)
    }

    fn resolve_vocabulary(config_file: Option<&Path>, args: VocabularyArgs) -> Vocabulary {
        let defaults = args.defaults();
        let file = storage::load_project_layer(Path::new("."), config_file);
        let overrides = args.overrides();

        Vocabulary::resolve(&defaults, Some(&file), Some(&overrides))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Reports go to stdout; keep logs out of them.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check the class names in a file (default)
    Check(Check),

    /// Show the effective vocabulary as a [tool.chcss] section
    Config(ShowConfig),
}

impl Command {
    fn run(self, vocabulary: &Vocabulary) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(vocabulary)?,
            Self::Config(command) => command.run(vocabulary)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chcss::Segment;
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chcss").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn absent_flags_are_unset() {
        let cli = parse(&[]);
        assert!(cli.vocabulary.overrides().is_unset());
    }

    #[test]
    fn empty_flag_is_concrete_empty_set() {
        let cli = parse(&["--elements", ""]);
        let overrides = cli.vocabulary.overrides();
        assert_eq!(overrides.elements, Some(VocabularySet::default()));
        assert_eq!(overrides.namespaces, None);
    }

    #[test]
    fn flags_are_comma_delimited() {
        let cli = parse(&["-n", "gf_news, gf_blog", "-f", "c", "check", "-"]);
        let overrides = cli.vocabulary.overrides();
        assert_eq!(
            overrides.get(Segment::Namespace),
            Some(&VocabularySet::new(["gf_blog", "gf_news"]).unwrap())
        );
        assert_eq!(
            overrides.get(Segment::Function),
            Some(&VocabularySet::new(["c"]).unwrap())
        );
    }

    #[test]
    fn flag_with_delimiter_is_an_error() {
        let args = ["chcss", "--components", "nav-bar"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn overrides_beat_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pyproject.toml");
        std::fs::write(
            &path,
            "[tool.chcss]\nnamespaces = [\"gf_news\"]\nfunctions = [\"c\"]\n",
        )
        .unwrap();

        let cli = parse(&["-f", "l", "--obsolete-elements"]);
        let vocabulary = Cli::resolve_vocabulary(Some(&path), cli.vocabulary);

        assert!(vocabulary.allows(Segment::Namespace, "gf_news"));
        assert!(vocabulary.allows(Segment::Function, "l"));
        assert!(!vocabulary.allows(Segment::Function, "c"));
        assert!(vocabulary.allows(Segment::Element, "marquee"));
    }

    #[test]
    fn file_without_subcommand_is_checked() {
        let cli = parse(&["index.html"]);
        assert!(cli.command.is_none());

        let cli = parse(&["check", "index.html"]);
        assert!(matches!(cli.command, Some(Command::Check(_))));
    }

    #[test]
    fn config_subcommand_still_parses() {
        let cli = parse(&["-n", "gf_news", "config"]);
        assert!(matches!(cli.command, Some(Command::Config(_))));
    }

    #[test]
    fn package_names_its_repository() {
        assert!(env!("CARGO_PKG_REPOSITORY").starts_with("https://github.com/"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
