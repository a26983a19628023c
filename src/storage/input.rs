use std::sync::LazyLock;

use regex::Regex;

/// Matches a `class` attribute, capturing its double-quoted, single-quoted
/// or unquoted value. The attribute must start the input or follow
/// whitespace or a quote, so `data-class` is not a match.
static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|[\s"'])class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("class attribute pattern is valid")
});

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("class name pattern is valid"));

/// A class name found in input text, with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The class name.
    pub text: &'a str,
    /// The line the class name was found on.
    pub line: usize,
}

/// Treats the input as whitespace-separated class names.
#[must_use]
pub fn whitespace_tokens(input: &str) -> Vec<Candidate<'_>> {
    input
        .lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.split_whitespace().map(move |text| Candidate {
                text,
                line: index + 1,
            })
        })
        .collect()
}

/// Extracts the class names from every `class` attribute in markup, whether
/// its value is double-quoted, single-quoted or unquoted.
#[must_use]
pub fn html_class_names(input: &str) -> Vec<Candidate<'_>> {
    let mut line = 1;
    let mut scanned = 0;
    let mut candidates = Vec::new();

    for captures in CLASS_ATTRIBUTE.captures_iter(input) {
        let Some(value) = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))
        else {
            continue;
        };

        // Class values may span lines; track the line of each name.
        for name in CLASS_NAME.find_iter(value.as_str()) {
            let start = value.start() + name.start();
            line += input[scanned..start].matches('\n').count();
            scanned = start;
            candidates.push(Candidate {
                text: name.as_str(),
                line,
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(candidates: &[Candidate<'a>]) -> Vec<&'a str> {
        candidates.iter().map(|candidate| candidate.text).collect()
    }

    #[test]
    fn whitespace_tokens_split_lines() {
        let candidates = whitespace_tokens("gf_news-c  gf_blog-c\n\n\tgf_news-c-navbar\n");

        assert_eq!(
            candidates,
            [
                Candidate { text: "gf_news-c", line: 1 },
                Candidate { text: "gf_blog-c", line: 1 },
                Candidate { text: "gf_news-c-navbar", line: 3 },
            ]
        );
    }

    #[test]
    fn whitespace_tokens_empty_input() {
        assert!(whitespace_tokens("").is_empty());
        assert!(whitespace_tokens(" \n\t\n").is_empty());
    }

    #[test]
    fn html_class_names_from_attributes() {
        let html = r#"<nav class="gf_news-c-navbar gf_news-l">
  <ul CLASS='gf_news-c-navbar-ul'>
    <li id="x" data-class="ignored" class = "gf_news-c-navbar-li"></li>
  </ul>
</nav>"#;

        let candidates = html_class_names(html);
        assert_eq!(
            texts(&candidates),
            [
                "gf_news-c-navbar",
                "gf_news-l",
                "gf_news-c-navbar-ul",
                "gf_news-c-navbar-li",
            ]
        );
        let lines: Vec<_> = candidates.iter().map(|candidate| candidate.line).collect();
        assert_eq!(lines, [1, 1, 2, 3]);
    }

    #[test]
    fn html_class_names_spanning_lines() {
        let html = "<div class=\"a-b\n   c-d\"></div>\n<p class=\"e-f\"></p>";

        let candidates = html_class_names(html);
        assert_eq!(
            candidates,
            [
                Candidate { text: "a-b", line: 1 },
                Candidate { text: "c-d", line: 2 },
                Candidate { text: "e-f", line: 3 },
            ]
        );
    }

    #[test]
    fn html_class_names_unquoted_value() {
        let html = "<div class=gf_news-c></div>\n<p class = gf_news-l>";

        assert_eq!(
            html_class_names(html),
            [
                Candidate { text: "gf_news-c", line: 1 },
                Candidate { text: "gf_news-l", line: 2 },
            ]
        );
    }

    #[test]
    fn html_class_names_directly_after_quoted_attribute() {
        let html = r#"<div id="x"class="gf_news-c"></div><p title='y'class=gf_news-l>"#;

        assert_eq!(texts(&html_class_names(html)), ["gf_news-c", "gf_news-l"]);
    }

    #[test]
    fn html_class_names_ignores_prefixed_attributes() {
        let html = r#"<div data-class="a-b" xclass=c-d class="e-f"></div>"#;

        assert_eq!(texts(&html_class_names(html)), ["e-f"]);
    }

    #[test]
    fn html_class_names_empty_attribute() {
        assert!(html_class_names(r#"<div class=""></div>"#).is_empty());
    }
}
