//! Markup cleanup for post comments.
//!
//! The order of the passes is a compatibility invariant: anchor spans and the
//! known tag tokens must be gone before the final bracket strip runs, so any
//! markup this module does not know about degrades to bracket deletion instead
//! of leaking tag text into the dump. The bracket strip is deliberately lossy:
//! a legitimately typed `<` or `>` in a post does not survive either.
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a whole `<a ...>...</a>` span, non-greedy.
static ANCHOR_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<a.*?</a>").unwrap());

/// Inline markup tokens the API is known to emit. All of them are dropped outright.
const TAG_TOKENS: [&str; 12] = [
    "<span class=\"spoiler\">",
    "<span class=\"unkfunc\">",
    "<span class=\"s\">",
    "</span>",
    "<strong>",
    "</strong>",
    "<em>",
    "</em>",
    "<p>",
    "</p>",
    "<b>",
    "</b>",
];

/// Escaped entities that unescape to a literal character. Anything not listed
/// here passes through untouched.
const ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#47;", "/"),
    ("&quot;", "\""),
    ("\u{a0}", " "),
];

/// Strips the known markup out of a single comment, returning plain text.
///
/// May return an empty string.
pub fn clean_comment(comment: &str) -> String {
    let mut text = ANCHOR_SPAN.replace_all(comment, "").into_owned();

    for token in TAG_TOKENS {
        text = text.replace(token, "");
    }

    text = text.replace("<br>", " ");

    for (entity, literal) in ENTITIES {
        text = text.replace(entity, literal);
    }

    text.replace(['<', '>'], "")
}
