//! HTML element names used as the default element vocabulary.
//!
//! Source: <https://developer.mozilla.org/en-US/docs/Web/HTML/Element>

/// Current HTML element names.
///
/// This is the default vocabulary for the [`Segment::Element`] segment.
///
/// [`Segment::Element`]: super::Segment::Element
pub const HTML_ELEMENTS: &[&str] = &[
    "html", "base", "head", "link", "meta", "style", "title", "body", "address", "article",
    "aside", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "main", "nav",
    "section", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure", "hr", "li", "ol",
    "ul", "p", "pre", "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em",
    "i", "kbd", "mark", "q", "rb", "rp", "rt", "rtc", "ruby", "s", "samp", "small", "span",
    "strong", "sub", "sup", "time", "u", "var", "wbr", "area", "audio", "img", "map", "track",
    "video", "embed", "iframe", "object", "param", "picture", "portal", "source", "svg", "math",
    "canvas", "noscript", "script", "del", "ins", "caption", "col", "colgroup", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "button", "datalist", "fieldset", "form",
    "input", "label", "legend", "meter", "optgroup", "option", "output", "progress", "select",
    "textarea", "details", "dialog", "menu", "summary", "slot", "template",
];

/// Obsolete and deprecated HTML element names.
///
/// Not part of the default element vocabulary, but available to callers
/// that need to accept legacy markup.
pub const HTML_ELEMENTS_OBSOLETE: &[&str] = &[
    "acronym", "applet", "basefont", "bgsound", "big", "blink", "center", "content", "dir",
    "font", "frame", "frameset", "image", "isindex", "keygen", "listing", "marquee", "menuitem",
    "multicol", "nextid", "nobr", "noembed", "noframes", "plaintext", "shadow", "spacer",
    "strike", "tt", "xmp",
];
