//! Execution boundary: turning buffers into one runnable document.
//!
//! Composition never fails. Malformed markup or script is passed through
//! as-is for the learner to see in the preview. The composed document is
//! handed to a [`RenderHost`], which must run it somewhere that cannot
//! reach engine or learner state. Nothing comes back from the host.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::model::Buffers;

/// Something that can mount a document in an isolated context.
///
/// Hand-off is fire-and-forget: there is no return channel.
pub trait RenderHost {
    fn mount(&self, document: &str);
}

/// Composes the three buffers into a single document.
///
/// Snippets are wrapped in a minimal page. Markup that already carries an
/// `<html>`, `<head>`, or `<body>` marker is treated as a full document:
/// the style goes before the first `</head>` and the script before the
/// first `</body>`, falling back to prepend and append when the closing
/// tag is missing. Marker matching ignores ASCII case.
pub fn render(buffers: &Buffers) -> String {
    let Buffers {
        markup,
        style,
        script,
    } = buffers;

    let is_document = ["<html", "<head", "<body"]
        .iter()
        .any(|marker| find_ignore_case(markup, marker).is_some());

    if !is_document {
        return format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <style>{style}</style>\n\
             </head>\n\
             <body>\n\
             {markup}\n\
             <script>{script}</script>\n\
             </body>\n\
             </html>\n"
        );
    }

    let style_block = format!("<style>{style}</style>");
    let mut document = match find_ignore_case(markup, "</head>") {
        Some(at) => splice(markup, at, &style_block),
        None => format!("{style_block}{markup}"),
    };

    let script_block = format!("<script>{script}</script>");
    match find_ignore_case(&document, "</body>") {
        Some(at) => document = splice(&document, at, &script_block),
        None => document.push_str(&script_block),
    }

    document
}

/// Wraps a document in a host page that runs it inside a sandboxed frame.
///
/// The frame may execute script but gets an opaque origin: no access to the
/// host page, its storage, or its cookies.
pub fn sandbox_page(document: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Preview</title></head>\n\
         <body style=\"margin:0\">\n\
         <iframe title=\"Live Preview\" sandbox=\"allow-scripts\" \
         style=\"border:none;width:100vw;height:100vh\" srcdoc=\"{}\"></iframe>\n\
         </body>\n\
         </html>\n",
        escape_attribute(document)
    )
}

/// Writes each mounted document to a file as a sandboxed preview page.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    path: PathBuf,
}

impl PreviewFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RenderHost for PreviewFile {
    fn mount(&self, document: &str) {
        match fs::write(&self.path, sandbox_page(document)) {
            Ok(()) => debug!(path = %self.path.display(), "preview written"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to write preview"),
        }
    }
}

/// Byte offset of the first ASCII-case-insensitive match of `needle`.
///
/// `needle` must be lowercase.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets aligned with the original.
    haystack.to_ascii_lowercase().find(needle)
}

fn splice(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

fn escape_attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn buffers(markup: &str, style: &str, script: &str) -> Buffers {
        Buffers {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    #[test]
    fn wraps_snippets() {
        let doc = render(&buffers("<p>hi</p>", "p { color: red; }", "console.log(1)"));

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>p { color: red; }</style>"));
        assert!(doc.contains("<body>\n<p>hi</p>\n<script>console.log(1)</script>\n</body>"));
    }

    #[test]
    fn injects_into_full_documents() {
        let markup = "<!DOCTYPE html>\n<HTML><Head><title>t</title></HEAD><body><p>x</p></BODY></html>";
        let doc = render(&buffers(markup, "p{}", "go()"));

        assert!(doc.contains("<title>t</title><style>p{}</style></HEAD>"));
        assert!(doc.contains("<p>x</p><script>go()</script></BODY>"));
        assert_eq!(doc.matches("<html").count() + doc.matches("<HTML").count(), 1);
    }

    #[test]
    fn full_document_without_head_gets_style_prepended() {
        let doc = render(&buffers("<body><p>x</p></body>", "p{}", ""));
        assert!(doc.starts_with("<style>p{}</style><body>"));
        assert!(doc.ends_with("<script></script></body>"));
    }

    #[test]
    fn full_document_without_body_close_gets_script_appended() {
        let doc = render(&buffers("<head></head><body><p>x</p>", "", "go()"));
        assert!(doc.starts_with("<head><style></style></head>"));
        assert!(doc.ends_with("<script>go()</script>"));
    }

    #[test]
    fn only_first_closing_tag_is_targeted() {
        let doc = render(&buffers("<body>a</body><body>b</body>", "", "go()"));
        assert_eq!(doc.matches("<script>go()</script>").count(), 1);
        assert!(doc.contains("a<script>go()</script></body><body>b</body>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = buffers("<h1>x</h1>", "h1{}", "let a;");
        assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn malformed_content_passes_through() {
        let doc = render(&buffers("<div><p>unclosed", "}}{{", "function ("));
        assert!(doc.contains("<div><p>unclosed"));
        assert!(doc.contains("<style>}}{{</style>"));
        assert!(doc.contains("<script>function (</script>"));
    }

    #[test]
    fn sandbox_page_escapes_document() {
        let page = sandbox_page("<p class=\"a\">&</p>");
        assert!(page.contains("sandbox=\"allow-scripts\""));
        assert!(page.contains("srcdoc=\"&lt;p class=&quot;a&quot;&gt;&amp;&lt;/p&gt;\""));
    }

    #[test]
    fn preview_file_writes_sandboxed_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preview.html");
        let host = PreviewFile::new(&path);

        host.mount("<p>hi</p>");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("&lt;p&gt;hi&lt;/p&gt;"));
    }
}
