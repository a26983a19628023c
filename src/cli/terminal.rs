//! Coloring of `check` reports on stdout

use owo_colors::{OwoColorize, colors::css};

/// Whether stdout is a terminal that renders colors.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// How a line of the report is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Accepted,
    Rejected,
    Tally,
    Hint,
}

/// Paints `text` in `tone`, or returns it unchanged when `color` is off.
fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_owned();
    }
    match tone {
        Tone::Accepted => text.fg::<css::Green>().to_string(),
        Tone::Rejected => text.fg::<css::Red>().bold().to_string(),
        Tone::Tally => text.fg::<css::Orange>().to_string(),
        Tone::Hint => text.dimmed().to_string(),
    }
}

/// Report styling for class names and summary lines.
pub trait Colorize {
    /// A class name that matched the vocabulary.
    fn success(&self) -> String;
    /// A rejection diagnostic.
    fn error(&self) -> String;
    /// A count of rejected names.
    fn warning(&self) -> String;
    /// A follow-up hint.
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Tone::Accepted, supports_color())
    }

    fn error(&self) -> String {
        paint(self.as_ref(), Tone::Rejected, supports_color())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Tone::Tally, supports_color())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Tone::Hint, supports_color())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Tone::Accepted ; "accepted")]
    #[test_case(Tone::Rejected ; "rejected")]
    #[test_case(Tone::Tally ; "tally")]
    #[test_case(Tone::Hint ; "hint")]
    fn plain_output_is_unchanged(tone: Tone) {
        assert_eq!(paint("gf_news-nav", tone, false), "gf_news-nav");
    }

    #[test_case(Tone::Accepted ; "accepted")]
    #[test_case(Tone::Rejected ; "rejected")]
    #[test_case(Tone::Tally ; "tally")]
    #[test_case(Tone::Hint ; "hint")]
    fn colored_output_wraps_text_in_escapes(tone: Tone) {
        let painted = paint("gf_news-nav", tone, true);
        assert!(painted.starts_with('\u{1b}'), "{painted:?}");
        assert!(painted.contains("gf_news-nav"));
        assert_ne!(painted, "gf_news-nav");
    }

    #[test]
    fn rejections_and_acceptances_differ() {
        assert_ne!(
            paint("x", Tone::Accepted, true),
            paint("x", Tone::Rejected, true)
        );
    }
}
