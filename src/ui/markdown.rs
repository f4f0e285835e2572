//! Markdown-to-markup conversion for assistant replies.
//!
//! The assistant speaks a small markdown dialect: headers, pipe tables,
//! bullets, numbered lines, bold, italics and links. [`render`] turns it into
//! styled markup fragments by running a fixed pipeline of line-oriented regex
//! substitutions. Every stage is global, pure and infallible; text that does
//! not match a stage passes through untouched.
//!
//! Stage order is part of the contract. Later stages see the output of
//! earlier ones, and bold must run before italics or the inner `*` pair of
//! `**text**` would be taken as emphasis.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A single rewrite step of the pipeline.
pub type Stage = fn(&str) -> Cow<'_, str>;

/// The rendering pipeline, in application order.
pub const STAGES: [(&str, Stage); 8] = [
    ("h2", render_h2),
    ("h3", render_h3),
    ("table_rows", render_table_rows),
    ("bullets", render_bullets),
    ("numbered", render_numbered),
    ("bold", render_bold),
    ("italic", render_italic),
    ("links", render_links),
];

/// Substring that marks a table row as a header row.
pub const TABLE_HEADER_MARKER: &str = "Category";

/// Substring that marks a table row as the `|---|---|` separator.
pub const TABLE_SEPARATOR_MARKER: &str = "-------";

// Captures stop at `\r` as well as `\n`, so CRLF replies keep the line
// ending outside the generated tags.
//
// `## ` may not be preceded by another `#`, otherwise it would swallow `### `.
// A plain `## ` pattern would turn `### x` into `#<h2>x</h2>`; here it becomes
// an `<h3>`, and `#### x` becomes `#<h3>x</h3>`.
static H2_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(^|[^#])## ([^\r\n]*)").expect("h2 regex pattern is valid")
});
static H3_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"### ([^\r\n]*)").expect("h3 regex pattern is valid"));
static TABLE_ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|[^\r\n]*\|").expect("table row regex pattern is valid"));
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- ([^\r\n]*)").expect("bullet regex pattern is valid"));
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\. ([^\r\n]*)").expect("numbered regex pattern is valid")
});
static BOLD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^\r\n]*?)\*\*").expect("bold regex pattern is valid")
});
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\r\n]*?)\*").expect("italic regex pattern is valid"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\r\n]*?)\]\(([^\r\n]*?)\)").expect("link regex pattern is valid")
});

/// Render an assistant reply into markup.
///
/// Never fails: malformed or partial markdown is left as-is, and a string
/// without any recognised construct comes back unchanged.
pub fn render(text: &str) -> String {
    let mut out = text.to_string();
    for (_, stage) in STAGES.iter() {
        let next = match stage(&out) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(next) = next {
            out = next;
        }
    }
    out
}

/// `## text` → primary heading.
pub fn render_h2(text: &str) -> Cow<'_, str> {
    H2_RE.replace_all(
        text,
        r#"${1}<h2 class="text-2xl font-bold mt-6 mb-4 text-indigo-700">${2}</h2>"#,
    )
}

/// `### text` → secondary heading.
pub fn render_h3(text: &str) -> Cow<'_, str> {
    H3_RE.replace_all(
        text,
        r#"<h3 class="text-xl font-semibold mt-5 mb-3 text-indigo-600">${1}</h3>"#,
    )
}

/// `| a | b |` → two-column grid, one container per matching line.
pub fn render_table_rows(text: &str) -> Cow<'_, str> {
    TABLE_ROW_RE.replace_all(text, |caps: &Captures| table_row(&caps[0]))
}

/// `- text` → bullet item.
pub fn render_bullets(text: &str) -> Cow<'_, str> {
    BULLET_RE.replace_all(
        text,
        r#"<li class="ml-4 mb-2 flex items-start"><span class="mr-2">•</span>${1}</li>"#,
    )
}

/// `N. text` → numbered item, keeping the original numeral.
pub fn render_numbered(text: &str) -> Cow<'_, str> {
    NUMBERED_RE.replace_all(
        text,
        r#"<div class="ml-4 mb-2 flex items-start"><span class="mr-2 font-semibold">${1}.</span>${2}</div>"#,
    )
}

/// `**text**` → strong emphasis.
pub fn render_bold(text: &str) -> Cow<'_, str> {
    BOLD_RE.replace_all(
        text,
        r#"<strong class="font-semibold text-indigo-900">${1}</strong>"#,
    )
}

/// `*text*` → light emphasis. Only correct after [`render_bold`].
pub fn render_italic(text: &str) -> Cow<'_, str> {
    ITALIC_RE.replace_all(text, r#"<em class="text-gray-600">${1}</em>"#)
}

/// `[label](url)` → link opening in a new browsing context.
pub fn render_links(text: &str) -> Cow<'_, str> {
    LINK_RE.replace_all(
        text,
        r#"<a href="${2}" class="text-blue-600 hover:underline hover:text-blue-800" target="_blank">${1}</a>"#,
    )
}

/// Split a matched row into its non-blank, trimmed cells.
pub fn table_cells(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn table_row(row: &str) -> String {
    if row.contains(TABLE_SEPARATOR_MARKER) {
        return String::new();
    }

    let cells = table_cells(row);
    // Any row mentioning the marker is styled as a header, wherever it sits.
    if row.contains(TABLE_HEADER_MARKER) {
        let inner: String = cells
            .iter()
            .map(|cell| format!(r#"<div class="text-indigo-700">{}</div>"#, cell))
            .collect();
        format!(
            "<div class=\"grid grid-cols-2 gap-4 bg-indigo-50 p-3 rounded-t-lg font-semibold\">\n{}\n</div>",
            inner
        )
    } else {
        let inner: String = cells
            .iter()
            .map(|cell| format!("<div>{}</div>", cell))
            .collect();
        format!("<div class=\"grid grid-cols-2 gap-4 border-b p-3\">\n{}\n</div>", inner)
    }
}
