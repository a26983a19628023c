//! Rendering of rejected class names for humans.

use chcss::Rejection;

/// Renders a rejection as a reason line followed by the class name with
/// the failing token underlined.
///
/// ```text
/// index.html:3: unexpected token 'form' at position 3, expected component or element
///     gf_news-c-navbar-form
///                      ^^^^
/// ```
pub fn render(source: &str, line: usize, identifier: &str, rejection: &Rejection) -> String {
    let span = rejection.span();
    let column = identifier
        .get(..span.start)
        .map_or(0, |prefix| prefix.chars().count());
    let width = identifier
        .get(span)
        .map_or(0, |token| token.chars().count())
        .max(1);

    format!(
        "{source}:{line}: {rejection}\n    {identifier}\n    {}{}",
        " ".repeat(column),
        "^".repeat(width)
    )
}
