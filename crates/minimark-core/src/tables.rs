//! Static grammar tables. Each table is a priority order: longer or more
//! specific patterns come before shorter ones, and the first match wins.

/// How the content captured by a tag is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Nesting {
    /// Entity-escape the content verbatim (code).
    Verbatim,
    /// Re-dispatch the content as inline text.
    Inline,
    /// Re-dispatch the content as a fresh block.
    Block,
}

pub(crate) struct Tag {
    pub pattern: &'static [u8],
    pub nesting: Nesting,
    pub open: &'static str,
    pub close: &'static str,
}

const fn tag(
    pattern: &'static [u8],
    nesting: Nesting,
    open: &'static str,
    close: &'static str,
) -> Tag {
    Tag {
        pattern,
        nesting,
        open,
        close,
    }
}

/// Block constructs where every physical line starts with a fixed prefix.
/// A pattern ending in a newline (the horizontal rules) is emitted
/// immediately and captures no content.
pub(crate) const LINE_PREFIX: [Tag; 11] = [
    tag(b"    ", Nesting::Verbatim, "<pre><code>", "\n</code></pre>"),
    tag(b"\t", Nesting::Verbatim, "<pre><code>", "\n</code></pre>"),
    tag(b">", Nesting::Block, "<blockquote>", "</blockquote>"),
    tag(b"###### ", Nesting::Inline, "<h6>", "</h6>"),
    tag(b"##### ", Nesting::Inline, "<h5>", "</h5>"),
    tag(b"#### ", Nesting::Inline, "<h4>", "</h4>"),
    tag(b"### ", Nesting::Inline, "<h3>", "</h3>"),
    tag(b"## ", Nesting::Inline, "<h2>", "</h2>"),
    tag(b"# ", Nesting::Inline, "<h1>", "</h1>"),
    tag(b"- - -\n", Nesting::Inline, "<hr />", ""),
    tag(b"---\n", Nesting::Inline, "<hr />", ""),
];

/// Setext-style headings: a line of text underlined by `=` or `-`.
/// The close tag carries its own newline.
pub(crate) const UNDERLINE: [Tag; 2] = [
    tag(b"=", Nesting::Inline, "<h1>", "</h1>\n"),
    tag(b"-", Nesting::Inline, "<h2>", "</h2>\n"),
];

/// Symmetric inline delimiters, longest first so `___` is not read as
/// `_` + `__`.
pub(crate) const SURROUND: [Tag; 9] = [
    tag(b"```", Nesting::Verbatim, "<code>", "</code>"),
    tag(b"``", Nesting::Verbatim, "<code>", "</code>"),
    tag(b"`", Nesting::Verbatim, "<code>", "</code>"),
    tag(b"___", Nesting::Inline, "<strong><em>", "</em></strong>"),
    tag(b"***", Nesting::Inline, "<strong><em>", "</em></strong>"),
    tag(b"__", Nesting::Inline, "<strong>", "</strong>"),
    tag(b"**", Nesting::Inline, "<strong>", "</strong>"),
    tag(b"_", Nesting::Inline, "<em>", "</em>"),
    tag(b"*", Nesting::Inline, "<em>", "</em>"),
];

/// Exact-match substitutions: backslash escapes, bare HTML syntax bytes,
/// and the two-spaces hard line break. `&amp;` maps to itself so the `&`
/// of an already-written entity is not escaped a second time.
pub(crate) const REPLACE: [(&[u8], &str); 37] = [
    (b"\\\\", "\\"),
    (b"\\`", "`"),
    (b"\\*", "*"),
    (b"\\_", "_"),
    (b"\\{", "{"),
    (b"\\}", "}"),
    (b"\\[", "["),
    (b"\\]", "]"),
    (b"\\(", "("),
    (b"\\)", ")"),
    (b"\\#", "#"),
    (b"\\+", "+"),
    (b"\\-", "-"),
    (b"\\.", "."),
    (b"\\!", "!"),
    (b"\\\"", "&quot;"),
    (b"\\$", "$"),
    (b"\\%", "%"),
    (b"\\&", "&amp;"),
    (b"\\'", "'"),
    (b"\\,", ","),
    (b"\\/", "/"),
    (b"\\:", ":"),
    (b"\\;", ";"),
    (b"\\<", "&lt;"),
    (b"\\>", "&gt;"),
    (b"\\=", "="),
    (b"\\?", "?"),
    (b"\\@", "@"),
    (b"\\^", "^"),
    (b"\\|", "|"),
    (b"\\~", "~"),
    (b"<", "&lt;"),
    (b">", "&gt;"),
    (b"&amp;", "&amp;"),
    (b"&", "&amp;"),
    (b"  \n", "<br />\n"),
];

/// Per-column table alignment, two bits per column.
pub(crate) const ALIGN: [&str; 4] = [
    "",
    " style=\"text-align: left\"",
    " style=\"text-align: right\"",
    " style=\"text-align: center\"",
];

pub(crate) const CODE_FENCE: &[u8] = b"```";
