//! Validators for the built-in curriculum.
//!
//! Each one checks for required substrings rather than parsing the code.
//! Markup and attribute checks run on lowercased text; checks for a literal
//! identifier (such as `PI`) keep case. Validators marked "squashed" strip all
//! whitespace first, so `z = x + y` and `z=x+y` look the same.

use crate::model::{Buffers, Verdict};

fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Removes every whitespace character.
fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn require(ok: bool, reason: &str) -> Verdict {
    if ok { Ok(()) } else { Err(reason.to_string()) }
}

// ── HTML ──

pub(super) fn html_intro(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<!doctype html>"), "Missing <!DOCTYPE html>.")?;
    require(html.contains("<html>"), "Missing <html> tag.")?;
    require(html.contains("<body>"), "Missing <body> tag.")?;
    require(html.contains("my first page"), "Missing 'My First Page' in body.")
}

pub(super) fn html_basic(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<h1>"), "Missing <h1> tag.")?;
    require(html.contains("<br"), "Missing <br> tag.")?;
    require(html.contains("hello"), "Missing 'Hello'.")
}

pub(super) fn html_attributes(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<img"), "Missing <img> tag.")?;
    require(html.contains("src=\"logo.png\""), "Missing src=\"logo.png\".")?;
    require(html.contains("alt=\"logo\""), "Missing alt=\"logo\".")?;
    require(html.contains("width=\"100\""), "Missing width=\"100\".")
}

pub(super) fn html_headings(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<h1>"), "Missing <h1> tag.")?;
    require(html.contains("<h2>"), "Missing <h2> tag.")
}

pub(super) fn html_paragraphs(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(count(&html, "<p>") >= 2, "Need two <p> tags.")?;
    require(html.contains("<hr"), "Missing <hr> tag.")
}

pub(super) fn html_styles(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<p "), "Missing styled <p> tag.")?;
    require(html.contains("style="), "Missing style attribute.")?;
    require(
        html.contains("color:") && html.contains("blue"),
        "Style needs color: blue.",
    )?;
    require(
        html.contains("font-size:") && html.contains("20px"),
        "Style needs font-size: 20px.",
    )
}

pub(super) fn html_formatting(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<strong>"), "Missing <strong> tag.")?;
    require(html.contains("<em>"), "Missing <em> tag.")
}

pub(super) fn html_quotations(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<blockquote"), "Missing <blockquote> tag.")?;
    require(
        html.contains("to be or not to be"),
        "Missing text 'To be or not to be'.",
    )
}

pub(super) fn html_comments(code: &Buffers) -> Verdict {
    require(
        code.markup.contains("<!--") && code.markup.contains("-->"),
        "Missing HTML comment syntax <!-- -->.",
    )?;
    require(
        lower(&code.markup).contains("this is a comment"),
        "Comment must contain 'This is a comment'.",
    )
}

pub(super) fn html_colors(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<h1"), "Missing <h1> tag.")?;
    require(html.contains("style="), "Missing style attribute.")?;
    require(
        html.contains("background-color:") && html.contains("tomato"),
        "Missing background-color: Tomato.",
    )
}

pub(super) fn html_links(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<a "), "Missing <a> tag.")?;
    require(
        html.contains("href=\"https://google.com\""),
        "Missing correct href.",
    )?;
    require(
        html.contains("target=\"_blank\""),
        "Missing target=\"_blank\".",
    )
}

pub(super) fn html_images(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<img"), "Missing <img> tag.")?;
    require(
        html.contains("src=\"https://picsum.photos/200\""),
        "Missing correct src.",
    )?;
    require(
        html.contains("alt=\"random\""),
        "Missing correct alt attribute.",
    )
}

pub(super) fn html_favicon(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<title>"), "Missing <title> tag.")?;
    require(html.contains("my webpage"), "Title must be 'My Webpage'.")
}

pub(super) fn html_tables(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<table"), "Missing <table> tag.")?;
    require(html.contains("<tr"), "Missing <tr> tag.")?;
    require(count(&html, "<th") >= 2, "Need two <th> tags.")
}

pub(super) fn html_lists(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(html.contains("<ol"), "Missing <ol> tag.")?;
    require(count(&html, "<li") >= 2, "Need two <li> tags.")
}

// ── CSS ──

pub(super) fn css_syntax(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("h1") && css.contains("color") && css.contains("red"),
        "Make h1 color: red.",
    )?;
    require(
        css.contains(".important") && css.contains("font-weight") && css.contains("bold"),
        "Make .important font-weight: bold.",
    )
}

pub(super) fn css_howto(code: &Buffers) -> Verdict {
    let html = lower(&code.markup);
    require(
        html.contains("<body") && html.contains("style="),
        "Missing style attribute on body.",
    )?;
    // Either "inline" or "color:" will do, but "green" is always required.
    let mentions_color = html.contains("inline") || html.contains("color:");
    require(
        mentions_color && html.contains("green"),
        "Make body color: green.",
    )
}

pub(super) fn css_colors(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("background-color") && css.contains("#000000"),
        "Missing background-color: #000000.",
    )?;
    require(
        css.contains("color") && css.contains("#ffffff"),
        "Missing color: #ffffff.",
    )
}

pub(super) fn css_backgrounds(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    let has_url = css.contains("url(\"bg.png\")") || css.contains("url('bg.png')");
    require(
        css.contains("background-image:") && has_url,
        "Missing background-image: url('bg.png').",
    )?;
    require(
        css.contains("background-repeat:") && css.contains("no-repeat"),
        "Missing background-repeat: no-repeat.",
    )
}

pub(super) fn css_borders(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("border:")
            && css.contains("1px")
            && css.contains("solid")
            && css.contains("black"),
        "Missing border: 1px solid black.",
    )?;
    require(
        css.contains("border-radius:") && css.contains("10px"),
        "Missing border-radius: 10px.",
    )
}

pub(super) fn css_margins(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("margin:") && css.contains("20px"),
        "Missing margin: 20px.",
    )
}

pub(super) fn css_padding(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("padding:") && css.contains("30px"),
        "Missing padding: 30px.",
    )
}

pub(super) fn css_height_width(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("width:") && css.contains("100%"),
        "Missing width: 100%.",
    )?;
    require(
        css.contains("height:") && css.contains("200px"),
        "Missing height: 200px.",
    )
}

pub(super) fn css_box_model(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("width:") && css.contains("300px"),
        "Missing width: 300px",
    )?;
    require(
        css.contains("padding:") && css.contains("20px"),
        "Missing padding: 20px",
    )?;
    require(
        css.contains("border:") && css.contains("5px"),
        "Missing border: 5px solid gray",
    )?;
    require(
        css.contains("margin:") && css.contains("10px"),
        "Missing margin: 10px",
    )
}

pub(super) fn css_outline(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("outline:")
            && css.contains("2px")
            && css.contains("solid")
            && css.contains("blue"),
        "Missing outline: 2px solid blue.",
    )
}

pub(super) fn css_text(code: &Buffers) -> Verdict {
    let css = lower(&code.style);
    require(
        css.contains("text-transform:") && css.contains("uppercase"),
        "Missing text-transform: uppercase.",
    )?;
    require(
        css.contains("text-align:") && css.contains("center"),
        "Missing text-align: center.",
    )
}

// ── JavaScript ──

pub(super) fn js_output(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(
        js.contains("console.log") && js.contains("ready"),
        "Use console.log('Ready')",
    )
}

/// Squashed, case kept.
pub(super) fn js_syntax(code: &Buffers) -> Verdict {
    let js = squash(&code.script);
    require(
        js.contains("letz=") || js.contains("z=") || js.contains("constz="),
        "Declare z.",
    )?;
    require(
        js.contains("z=x+y") || js.contains("z=5+6"),
        "Assign x + y to z.",
    )
}

/// `PI` is a literal identifier, so case matters here.
pub(super) fn js_variables(code: &Buffers) -> Verdict {
    require(
        code.script.contains("const PI = 3.14159") || code.script.contains("const PI=3.14159"),
        "Declare const PI appropriately.",
    )
}

/// Squashed, case kept.
pub(super) fn js_operators(code: &Buffers) -> Verdict {
    let js = squash(&code.script);
    require(
        js.contains("c=a*b") || js.contains("c=10*5"),
        "Calculate c as a * b.",
    )
}

pub(super) fn js_datatypes(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(js.contains("true"), "Missing boolean true.")?;
    require(js.contains("john"), "Missing string 'John'.")
}

pub(super) fn js_functions(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(
        js.contains("function greet") || js.contains("greet ="),
        "Define a function named 'greet'.",
    )?;
    require(js.contains("return"), "Missing return keyword.")?;
    require(js.contains("hello"), "Missing greeting 'Hello'.")
}

pub(super) fn js_objects(code: &Buffers) -> Verdict {
    let js = lower(&squash(&code.script));
    require(
        js.contains("person={") || js.contains("person:"),
        "Define an object called person.",
    )?;
    require(js.contains("firstname:\"john\""), "Missing firstName: 'John'.")?;
    require(js.contains("age:30"), "Missing age: 30.")
}

pub(super) fn js_string_methods(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(js.contains("touppercase()"), "Use the toUpperCase() method.")?;
    require(js.contains("captext"), "Assign it to capText.")
}

pub(super) fn js_number_methods(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(js.contains("tofixed(2)"), "Use .toFixed(2).")?;
    require(js.contains("shortnum"), "Assign it to variable shortNum.")
}

pub(super) fn js_arrays(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(js.contains("fruits"), "Define 'fruits' array.")?;
    require(
        js.contains("apple") && js.contains("banana"),
        "Add Apple and Banana.",
    )?;
    require(
        js.contains("push") && js.contains("orange"),
        "Push Orange into the array.",
    )
}

pub(super) fn js_conditionals(code: &Buffers) -> Verdict {
    let js = lower(&squash(&code.script));
    require(js.contains("if(x>5)"), "Use if(x > 5).")?;
    require(js.contains("isbig=true"), "Set isBig to true.")?;
    require(js.contains("else"), "Use else.")?;
    require(js.contains("isbig=false"), "Set isBig to false.")
}

pub(super) fn js_loops(code: &Buffers) -> Verdict {
    let js = lower(&squash(&code.script));
    require(js.contains("for("), "Write a for loop.")?;
    require(
        js.contains("i=0") && js.contains("i<5") && js.contains("i++"),
        "Use loop signature (let i = 0; i < 5; i++).",
    )
}

pub(super) fn js_scope(code: &Buffers) -> Verdict {
    let js = lower(&squash(&code.script));
    require(
        js.contains("letg=1") || js.contains("constg=1") || js.contains("varg=1"),
        "Declare global g.",
    )?;
    require(js.contains("if(true)"), "Create if(true) block.")?;
    require(js.contains("letl=2"), "Declare local let l = 2.")
}

pub(super) fn js_strict(code: &Buffers) -> Verdict {
    let js = lower(&code.script);
    require(
        js.contains("\"use strict\"") || js.contains("'use strict'"),
        "Add 'use strict' directive.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(s: &str) -> Buffers {
        Buffers {
            markup: s.into(),
            ..Buffers::default()
        }
    }

    fn style(s: &str) -> Buffers {
        Buffers {
            style: s.into(),
            ..Buffers::default()
        }
    }

    fn script(s: &str) -> Buffers {
        Buffers {
            script: s.into(),
            ..Buffers::default()
        }
    }

    #[test]
    fn squash_strips_all_whitespace() {
        assert_eq!(squash(" let z =\n x +\ty; "), "letz=x+y;");
    }

    #[test]
    fn reports_first_missing_requirement() {
        let verdict = html_intro(&markup("<html><body>My First Page</body></html>"));
        assert_eq!(verdict.unwrap_err(), "Missing <!DOCTYPE html>.");

        let verdict = html_intro(&markup("<!DOCTYPE html><html><body></body></html>"));
        assert_eq!(verdict.unwrap_err(), "Missing 'My First Page' in body.");
    }

    #[test]
    fn markup_checks_ignore_case() {
        let verdict = html_headings(&markup("<H1>Main Title</H1><H2>Subtitle</H2>"));
        assert!(verdict.is_ok());
    }

    #[test]
    fn paragraphs_need_two_plain_p_tags() {
        assert_eq!(
            html_paragraphs(&markup("<p>one</p><hr>")).unwrap_err(),
            "Need two <p> tags."
        );
        assert!(html_paragraphs(&markup("<p>one</p><hr><p>two</p>")).is_ok());
    }

    #[test]
    fn identifier_checks_keep_case() {
        assert!(js_variables(&script("const PI = 3.14159;")).is_ok());
        assert_eq!(
            js_variables(&script("const pi = 3.14159;")).unwrap_err(),
            "Declare const PI appropriately."
        );
    }

    #[test]
    fn squashed_checks_ignore_spacing() {
        assert!(js_syntax(&script("let x = 5;\nlet y = 6;\nlet z = x   +  y;")).is_ok());
        assert!(js_operators(&script("let c = a *\n b;")).is_ok());
    }

    #[test]
    fn body_color_needs_green() {
        assert!(css_howto(&markup("<body style=\"color: green\"></body>")).is_ok());
        assert_eq!(
            css_howto(&markup("<body style=\"color: red\"></body>")).unwrap_err(),
            "Make body color: green."
        );
        assert_eq!(
            css_howto(&markup("<body></body>")).unwrap_err(),
            "Missing style attribute on body."
        );
    }

    #[test]
    fn background_accepts_either_quote_style() {
        let single = style("body { background-image: url('bg.png'); background-repeat: no-repeat; }");
        let double = style("body { background-image: url(\"bg.png\"); background-repeat: no-repeat; }");
        let bare = style("body { background-image: url(bg.png); background-repeat: no-repeat; }");

        assert!(css_backgrounds(&single).is_ok());
        assert!(css_backgrounds(&double).is_ok());
        assert!(css_backgrounds(&bare).is_err());
    }

    #[test]
    fn strict_mode_accepts_either_quote_style() {
        assert!(js_strict(&script("'use strict';")).is_ok());
        assert!(js_strict(&script("\"use strict\";")).is_ok());
        assert!(js_strict(&script("use strict")).is_err());
    }
}
