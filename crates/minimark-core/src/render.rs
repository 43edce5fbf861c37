//! The dispatch loop and the grammar rules.
//!
//! `process` walks a byte region and offers every position to a fixed,
//! priority-ordered rule table. A rule either declines (`None`) or writes
//! its HTML to the output and reports how many bytes it consumed together
//! with the continuation mode for the text that follows. Rules that carry
//! nested content (list items, link descriptions, blockquotes) call
//! `process` again on the extracted sub-range, so recursion depth tracks
//! markup nesting, not document size.

use crate::Options;
use crate::tables::{ALIGN, CODE_FENCE, LINE_PREFIX, Nesting, REPLACE, SURROUND, UNDERLINE};
use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Paragraph boundary: a blank line, or a code fence opening a line.
static PARAGRAPH_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n|(?:\A|\n)```").expect("paragraph boundary pattern"));

/// Table columns that can carry an alignment (two bits each in a u64).
const MAX_COLUMNS: usize = 32;

/// Renders `source` to an HTML fragment with default options.
pub fn render(source: &str) -> String {
    render_with_options(source, &Options::default())
}

/// Renders `source` to an HTML fragment.
pub fn render_with_options(source: &str, options: &Options) -> String {
    let mut renderer = Renderer::new(options);
    renderer.process(source.as_bytes(), true);
    renderer.finish()
}

/// A successful rule match: `len` bytes were consumed and rendered.
/// `block_start` is the continuation mode: `true` means the text after
/// the match is evaluated as a potential block start.
#[derive(Clone, Copy, Debug)]
struct Matched {
    len: usize,
    block_start: bool,
}

type Rule = fn(&mut Renderer, &[u8], bool) -> Option<Matched>;

/// Priority order. Earlier rules pre-empt later, more general ones; the
/// order is part of the grammar (a line-prefix heading must be tried
/// before the generic paragraph, the literal replace is the fallback).
const RULES: [Rule; 12] = [
    Renderer::underline_heading,
    Renderer::comment,
    Renderer::code_fence,
    Renderer::line_prefix,
    Renderer::list,
    Renderer::table,
    Renderer::paragraph,
    Renderer::surround,
    Renderer::link,
    Renderer::autolink,
    Renderer::raw_html,
    Renderer::replace_literal,
];

struct Renderer {
    out: Vec<u8>,
    strict: bool,
    in_paragraph: bool,
    table: TableState,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum TablePhase {
    #[default]
    Idle,
    HeaderRow,
    AlignmentRow,
    BodyRows,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RowKind {
    Header,
    Body,
}

/// Table parse state. A logical table spans many dispatcher calls (one
/// per cell), so this lives on the renderer and is reset per document.
#[derive(Debug, Default)]
struct TableState {
    phase: TablePhase,
    row: Option<RowKind>,
    cell: usize,
    align: u64,
}

impl Renderer {
    fn new(options: &Options) -> Self {
        Self {
            out: Vec::new(),
            strict: options.strict_escape,
            in_paragraph: false,
            table: TableState::default(),
        }
    }

    fn finish(self) -> String {
        match String::from_utf8(self.out) {
            Ok(html) => html,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Renders `text` to the output sink. `newblock` is true when the
    /// start of the region is known to be at a block boundary.
    fn process(&mut self, text: &[u8], mut newblock: bool) {
        let end = text.len();
        let mut pos = 0;
        while pos < end {
            if newblock {
                while text[pos] == b'\n' {
                    pos += 1;
                    if pos == end {
                        return;
                    }
                }
            }
            let mut matched = None;
            for rule in RULES {
                if let Some(m) = rule(self, &text[pos..], newblock) {
                    matched = Some(m);
                    break;
                }
            }
            match matched {
                Some(m) => pos += m.len,
                None => {
                    // Last-resort fallback: one verbatim byte.
                    self.out.push(text[pos]);
                    pos += 1;
                }
            }
            if pos >= end {
                return;
            }
            // A single newline just before the end is not emitted.
            if pos + 1 == end && text[pos] == b'\n' {
                return;
            }
            // A blank line always starts a fresh block.
            newblock = if text[pos] == b'\n' && pos + 1 != end && text[pos + 1] == b'\n' {
                true
            } else {
                matched.is_some_and(|m| m.block_start)
            };
        }
    }

    fn push(&mut self, text: &str) {
        self.out.extend_from_slice(text.as_bytes());
    }

    /// Entity-escapes `&`, `"`, `>`, `<` and copies everything else.
    fn escape(&mut self, text: &[u8]) {
        for &byte in text {
            match byte {
                b'&' => self.push("&amp;"),
                b'"' => self.push("&quot;"),
                b'>' => self.push("&gt;"),
                b'<' => self.push("&lt;"),
                _ => self.out.push(byte),
            }
        }
    }

    fn emit_nested(&mut self, content: &[u8], nesting: Nesting) {
        match nesting {
            Nesting::Verbatim => self.escape(content),
            Nesting::Inline => self.process(content, false),
            Nesting::Block => self.process(content, true),
        }
    }

    /// Block elements are not allowed inside paragraphs, so every rule
    /// that opens one closes the current paragraph first.
    fn end_paragraph(&mut self) {
        if self.in_paragraph {
            self.push("</p>\n");
            self.in_paragraph = false;
        }
    }

    /// A line of text underlined by a run of three or more `=` or `-`.
    fn underline_heading(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        if !newblock {
            return None;
        }
        let len = rest.len();
        let mut line = 0;
        while line < len && rest[line] != b'\n' {
            line += 1;
        }
        if line == 0 {
            return None;
        }
        let next = line + 1;
        for tag in &UNDERLINE {
            let marker = tag.pattern[0];
            let mut run = 0;
            while next + run < len && rest[next + run] != b'\n' && rest[next + run] == marker {
                run += 1;
            }
            if run >= 3 {
                self.push(tag.open);
                self.process(&rest[..line], false);
                self.push(tag.close);
                return Some(Matched {
                    len: next + run,
                    block_start: true,
                });
            }
        }
        None
    }

    /// `<!-- ... -->`, emitted verbatim. The continuation mode mirrors
    /// whatever mode the rule was called with.
    fn comment(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        if self.strict || !rest.starts_with(b"<!--") {
            return None;
        }
        let p = find_from(rest, b"-->", 0)?;
        if p + 3 >= rest.len() {
            return None;
        }
        self.out.extend_from_slice(&rest[..p + 3]);
        self.out.push(b'\n');
        Some(Matched {
            len: p + 3,
            block_start: newblock,
        })
    }

    /// Triple-backtick fenced code block with an optional language tag.
    /// A fence with no unescaped closer swallows the rest of the region.
    fn code_fence(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        if !newblock || !rest.starts_with(CODE_FENCE) {
            return None;
        }
        let len = rest.len();
        let fence = CODE_FENCE.len();
        let mut i = fence;
        while i < len && rest[i] != b'\n' {
            i += 1;
        }
        let lang = &rest[fence..i];
        let content = (i + 1).min(len);
        let mut stop = len;
        let mut from = content;
        while let Some(q) = find_from(rest, CODE_FENCE, from) {
            if rest[q - 1] == b'\\' {
                from = q + 1;
            } else {
                stop = q;
                break;
            }
        }
        if lang.is_empty() {
            self.push("<pre><code>");
        } else {
            self.push("<pre><code class=\"language-");
            self.escape(lang);
            self.push("\">");
        }
        self.escape(&rest[content..stop]);
        self.push("</code></pre>\n");
        Some(Matched {
            len: stop + fence,
            block_start: true,
        })
    }

    /// Constructs where every physical line starts with a fixed prefix:
    /// headings, blockquotes, indented code, horizontal rules.
    fn line_prefix(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        let len = rest.len();
        let start = if newblock {
            0
        } else if rest[0] == b'\n' {
            1
        } else {
            return None;
        };
        for tag in &LINE_PREFIX {
            let l = tag.pattern.len();
            if !rest[start.min(len)..].starts_with(tag.pattern) {
                continue;
            }
            if start == 1 {
                self.out.push(b'\n');
            }
            self.end_paragraph();
            self.push(tag.open);
            if tag.pattern[l - 1] == b'\n' {
                // Horizontal rules carry no content; the prefix's own
                // newline is left for the dispatcher.
                self.out.push(b'\n');
                return Some(Matched {
                    len: l - 1 + start,
                    block_start: false,
                });
            }
            // Collect consecutive lines for as long as they carry the
            // prefix, then drop trailing blank lines.
            let mut p = start;
            let mut buf: Vec<u8> = Vec::new();
            while p + l < len && rest[p..].starts_with(tag.pattern) {
                p += l;
                // Blockquotes allow one optional space after the marker.
                if tag.pattern[0] == b'>' && rest[p] == b' ' {
                    p += 1;
                }
                while p < len {
                    buf.push(rest[p]);
                    p += 1;
                    if rest[p - 1] == b'\n' {
                        break;
                    }
                }
            }
            while buf.last() == Some(&b'\n') {
                buf.pop();
            }
            self.emit_nested(&buf, tag.nesting);
            self.push(tag.close);
            self.out.push(b'\n');
            if p == 0 {
                return None;
            }
            return Some(Matched {
                len: p,
                block_start: true,
            });
        }
        None
    }

    /// Bullet and ordered lists, with indentation-based item
    /// continuation and nested-list recursion.
    fn list(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        let len = rest.len();
        let mut p = if newblock {
            0
        } else if rest[0] == b'\n' {
            1
        } else {
            return None;
        };
        if p >= len {
            return None;
        }
        let item_origin = p;
        let marker: Option<u8>;
        let mut start_number: u32 = 0;
        match rest[p] {
            b'-' | b'*' | b'+' => marker = Some(rest[p]),
            _ => {
                let digits = p;
                while p < len && rest[p].is_ascii_digit() {
                    p += 1;
                }
                if p >= len || (rest[p] != b'.' && rest[p] != b')') {
                    return None;
                }
                for &d in &rest[digits..p] {
                    start_number = start_number
                        .saturating_mul(10)
                        .saturating_add(u32::from(d - b'0'));
                }
                marker = None;
            }
        }
        p += 1;
        if p >= len || (rest[p] != b' ' && rest[p] != b'\t') {
            return None;
        }
        self.end_paragraph();
        p += 1;
        while p < len && (rest[p] == b' ' || rest[p] == b'\t') {
            p += 1;
        }
        // Everything between the marker and the first content byte sets
        // the indentation width continuation lines must carry.
        let indent = p - item_origin;
        if !newblock {
            self.out.push(b'\n');
        }
        match marker {
            Some(_) => self.push("<ul>"),
            None if start_number == 1 => self.push("<ol>"),
            None => {
                let open = format!("<ol start=\"{}\">", start_number);
                self.push(&open);
            }
        }
        let mut buf: Vec<u8> = Vec::new();
        let mut blocks = 0u32;
        let mut run = true;
        while p < len && run {
            buf.clear();
            'item: while p < len && run {
                if rest[p] == b'\n' {
                    if p + 1 == len {
                        break 'item;
                    }
                    // A blank line may end the item (or the list).
                    let mut q = p + 1;
                    while q < len && (rest[q] == b' ' || rest[q] == b'\t') {
                        q += 1;
                    }
                    if q < len && rest[q] == b'\n' {
                        buf.push(b'\n');
                        run = false;
                        blocks += 1;
                        p = q;
                    }
                    let q = p + 1;
                    let mut j = 0usize;
                    let next_is_marker = match marker {
                        Some(m) => q < len && rest[q] == m,
                        None => false,
                    };
                    if next_is_marker {
                        j = 1;
                    } else {
                        while q + j < len && rest[q + j].is_ascii_digit() && j < indent {
                            j += 1;
                        }
                        if q + j == len {
                            break 'item;
                        }
                        if j > 0 && (rest[q + j] == b'.' || rest[q + j] == b')') {
                            j += 1;
                        } else {
                            j = 0;
                        }
                    }
                    if q + indent < len {
                        while j < indent && (rest[q + j] == b' ' || rest[q + j] == b'\t') {
                            j += 1;
                        }
                    }
                    if j == indent {
                        // Next line is a new item or a continuation with
                        // matching indentation.
                        buf.push(b'\n');
                        p += indent;
                        run = true;
                        if q < len && (rest[q] == b' ' || rest[q] == b'\t') {
                            p += 1;
                        } else {
                            break 'item;
                        }
                    } else if j < indent {
                        run = false;
                    }
                }
                if p < len {
                    buf.push(rest[p]);
                    p += 1;
                } else {
                    break 'item;
                }
            }
            self.push("<li>");
            let as_block = blocks > 1 || (blocks == 1 && run);
            self.process(&buf, as_block);
            self.push("</li>\n");
            p += 1;
        }
        self.push(if marker.is_some() { "</ul>\n" } else { "</ol>\n" });
        // Trailing newlines are not claimed.
        let mut last = p.saturating_sub(2);
        while last > 0 && rest[last] == b'\n' {
            last -= 1;
        }
        Some(Matched {
            len: last + 1,
            block_start: true,
        })
    }

    /// Pipe-delimited tables. One invocation handles one cell (or one
    /// row/table boundary); the state machine lives on the renderer.
    fn table(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        if rest[0] != b'|' {
            return None;
        }
        let len = rest.len();
        if self.table.phase == TablePhase::AlignmentRow {
            // The alignment row was read when the table opened; skip it.
            self.table.phase = TablePhase::BodyRows;
            let mut p = 0;
            while p < len && rest[p] != b'\n' {
                p += 1;
            }
            return Some(Matched {
                len: p + 1,
                block_start: false,
            });
        }
        if self.table.row.is_some() && (len < 2 || rest[1] == b'\n') {
            // Closing `|` of a row; maybe of the whole table.
            let header = self.table.row == Some(RowKind::Header);
            self.push(if header { "</th></tr>" } else { "</td></tr>" });
            if header {
                self.table.phase = TablePhase::AlignmentRow;
            }
            self.table.row = None;
            if len <= 2 || rest[2] == b'\n' {
                self.table = TableState::default();
                self.push("\n</table>\n");
            }
            return Some(Matched {
                len: 1,
                block_start: false,
            });
        }
        if self.table.phase == TablePhase::Idle {
            self.table = TableState {
                phase: TablePhase::HeaderRow,
                row: Some(RowKind::Header),
                cell: 0,
                align: 0,
            };
            // Record per-column alignment from the second physical line:
            // a `:` right after the `|` sets the left bit, a later `:`
            // in the same cell sets the right bit.
            let mut p = 0;
            while p < len && rest[p] != b'\n' {
                p += 1;
            }
            if p < len {
                let mut col: i32 = -1;
                p += 1;
                while p < len && rest[p] != b'\n' {
                    if rest[p] == b'|' {
                        col += 1;
                        loop {
                            p += 1;
                            if p >= len || (rest[p] != b' ' && rest[p] != b'\t') {
                                break;
                            }
                        }
                        if col < MAX_COLUMNS as i32 && p < len && rest[p] == b':' {
                            self.table.align |= 1u64 << (col * 2);
                        }
                        if p >= len || rest[p] == b'\n' {
                            break;
                        }
                    } else if col >= 0 && col < MAX_COLUMNS as i32 && rest[p] == b':' {
                        self.table.align |= 1u64 << (col * 2 + 1);
                    }
                    p += 1;
                }
            }
            self.push("<table>\n<tr>");
        }
        if self.table.row.is_none() {
            self.table.row = Some(RowKind::Body);
            self.table.cell = 0;
            self.push("<tr>");
        }
        let header = self.table.row == Some(RowKind::Header);
        if self.table.cell > 0 {
            self.push(if header { "</th>" } else { "</td>" });
        }
        let align = if self.table.cell < MAX_COLUMNS {
            ((self.table.align >> (self.table.cell * 2)) & 3) as usize
        } else {
            0
        };
        self.push(if header { "<th" } else { "<td" });
        self.push(ALIGN[align]);
        self.push(">");
        self.table.cell += 1;
        let mut p = 1;
        while p < len && rest[p] == b' ' {
            p += 1;
        }
        Some(Matched {
            len: p,
            block_start: false,
        })
    }

    /// Block-level run wrapped in `<p>`, bounded by the next blank line
    /// or fence start.
    fn paragraph(&mut self, rest: &[u8], newblock: bool) -> Option<Matched> {
        if !newblock {
            return None;
        }
        let bound = match PARAGRAPH_END.find(&rest[1..]) {
            Some(m) => 1 + m.start(),
            None => rest.len(),
        };
        self.push("<p>");
        self.in_paragraph = true;
        self.process(&rest[..bound], false);
        self.end_paragraph();
        Some(Matched {
            len: bound,
            block_start: true,
        })
    }

    /// Symmetric inline delimiters: emphasis, strong and code spans.
    fn surround(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        let len = rest.len();
        for tag in &SURROUND {
            let l = tag.pattern.len();
            if len < 2 * l || !rest.starts_with(tag.pattern) {
                continue;
            }
            let start = l;
            // The closer must be unescaped: a delimiter preceded by a
            // backslash does not count.
            let mut from = start + 1;
            let mut close = None;
            while let Some(q) = find_from(rest, tag.pattern, from) {
                if rest[q - 1] == b'\\' {
                    from = q + 1;
                } else {
                    close = Some(q);
                    break;
                }
            }
            let Some(stop) = close else {
                continue;
            };
            self.push(tag.open);
            // A single space just inside both delimiters is dropped.
            let (mut s, mut e) = (start, stop);
            if rest[s] == b' ' && rest[e - 1] == b' ' && s < e - 1 {
                s += 1;
                e -= 1;
            }
            self.emit_nested(&rest[s..e], tag.nesting);
            self.push(tag.close);
            return Some(Matched {
                len: stop + l,
                block_start: false,
            });
        }
        None
    }

    /// `[description](url "title")` links and `![alt](url)` images.
    fn link(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        let len = rest.len();
        let img = if rest[0] == b'[' {
            false
        } else if rest.starts_with(b"![") {
            true
        } else {
            return None;
        };
        let desc = 1 + usize::from(img);
        let mut bracket = find_from(rest, b"](", desc)?;
        // An image inside the description: skip ahead to a later `](`
        // once per inner `![` (single-level heuristic, not balancing).
        let mut inner = find_from(rest, b"![", desc);
        while let Some(q) = inner {
            if q >= bracket {
                break;
            }
            bracket = find_from(rest, b"](", bracket + 1)?;
            inner = find_from(rest, b"![", q + 1);
        }
        let desc_end = bracket;
        let url_start = bracket + 2;
        // Find the closing paren, tracking nesting depth.
        let mut depth = 1i32;
        let mut scan = url_start;
        let url_close;
        loop {
            let off = rest
                .get(scan..)?
                .iter()
                .position(|&b| b == b'(' || b == b')')?;
            scan += off;
            if rest[scan] == b'(' {
                depth += 1;
            } else {
                depth -= 1;
            }
            if depth == 0 {
                url_close = scan;
                break;
            }
            if scan < len {
                scan += 1;
            }
        }
        // An optional quoted title after the url.
        let mut url_end = url_close;
        let mut title: Option<(usize, usize)> = None;
        let quote = rest[url_start..]
            .iter()
            .position(|&b| b == b'"' || b == b'\'')
            .map(|off| url_start + off);
        if let Some(tp) = quote {
            if tp < url_close {
                let sep = rest[tp];
                let t_start = tp + 1;
                let mut le = tp;
                while le > url_start && is_space(rest[le - 1]) {
                    le -= 1;
                }
                let mut te = url_close - 1;
                while te > url_start && is_space(rest[te]) {
                    te -= 1;
                }
                if te < t_start || rest[te] != sep {
                    return None;
                }
                url_end = le;
                title = Some((t_start, te));
            }
        }
        // Urls can be given in angle brackets.
        let (mut u_s, mut u_e) = (url_start, url_end);
        if u_e > u_s && rest[u_s] == b'<' && rest[u_e - 1] == b'>' {
            u_s += 1;
            u_e -= 1;
        }
        if img {
            self.push("<img src=\"");
            self.escape(&rest[u_s..u_e]);
            self.push("\" alt=\"");
            self.escape(&rest[desc..desc_end]);
            self.push("\" ");
            if let Some((ts, te)) = title {
                self.push("title=\"");
                self.escape(&rest[ts..te]);
                self.push("\" ");
            }
            self.push("/>");
        } else {
            self.push("<a href=\"");
            self.escape(&rest[u_s..u_e]);
            self.push("\"");
            if let Some((ts, te)) = title {
                self.push(" title=\"");
                self.escape(&rest[ts..te]);
                self.push("\"");
            }
            self.push(">");
            self.process(&rest[desc..desc_end], false);
            self.push("</a>");
        }
        Some(Matched {
            len: url_close + 1,
            block_start: false,
        })
    }

    /// Bare `<url>` and `<email>` autolinks. Emails are obfuscated with
    /// per-byte numeric entities.
    fn autolink(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        if rest[0] != b'<' {
            return None;
        }
        let mut kind = 0i8; // 1 email, -1 url, 0 undecided
        for p in 1..rest.len() {
            match rest[p] {
                b' ' | b'\t' | b'\n' => return None,
                b'#' | b':' => kind = -1,
                b'@' => {
                    if kind == 0 {
                        kind = 1;
                    }
                }
                b'>' => {
                    if kind == 0 {
                        return None;
                    }
                    let addr = &rest[1..p];
                    self.push("<a href=\"");
                    if kind == 1 {
                        self.push("&#x6D;&#x61;i&#x6C;&#x74;&#x6F;:");
                        self.obfuscate(addr);
                        self.push("\">");
                        self.obfuscate(addr);
                    } else {
                        self.escape(addr);
                        self.push("\">");
                        self.escape(addr);
                    }
                    self.push("</a>");
                    return Some(Matched {
                        len: p + 1,
                        block_start: false,
                    });
                }
                _ => {}
            }
        }
        None
    }

    fn obfuscate(&mut self, addr: &[u8]) {
        for &byte in addr {
            let entity = format!("&#{};", byte);
            self.push(&entity);
        }
    }

    /// Verbatim passthrough of an HTML element (to its matching close
    /// tag) or of a lone opening tag. Disabled under strict escaping.
    fn raw_html(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        let len = rest.len();
        if self.strict || len <= 2 {
            return None;
        }
        if rest[0] != b'<' || !rest[1].is_ascii_alphabetic() {
            return None;
        }
        let mut p = 1;
        while p < len && rest[p].is_ascii_alphanumeric() {
            p += 1;
        }
        let name = &rest[1..p];
        let mut search = p;
        while let Some(open) = find_from(rest, b"</", search) {
            let c = open + 2;
            if c + name.len() < len
                && rest[c..c + name.len()] == *name
                && rest[c + name.len()] == b'>'
            {
                let consumed = c + name.len() + 1;
                self.out.extend_from_slice(&rest[..consumed]);
                return Some(Matched {
                    len: consumed,
                    block_start: false,
                });
            }
            search = c;
        }
        if let Some(off) = rest[p..].iter().position(|&b| b == b'>') {
            let consumed = p + off + 1;
            self.out.extend_from_slice(&rest[..consumed]);
            return Some(Matched {
                len: consumed,
                block_start: false,
            });
        }
        None
    }

    /// Lowest-priority rule: exact-match substitution for backslash
    /// escapes, bare HTML syntax bytes and hard line breaks.
    fn replace_literal(&mut self, rest: &[u8], _newblock: bool) -> Option<Matched> {
        for (pattern, replacement) in REPLACE {
            if rest.starts_with(pattern) {
                self.push(replacement);
                return Some(Matched {
                    len: pattern.len(),
                    block_start: false,
                });
            }
        }
        None
    }
}

fn find_from(text: &[u8], pattern: &[u8], from: usize) -> Option<usize> {
    if from >= text.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|off| from + off)
}

fn is_space(byte: u8) -> bool {
    byte == b' ' || (b'\t'..=b'\r').contains(&byte)
}
