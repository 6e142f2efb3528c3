//! Text manipulation utilities

/// Comment prefixes that never make a useful synopsis (compared lowercase).
const BOILERPLATE_PREFIXES: &[&str] = &["copyright", "all rights", "author"];

/// Reports whether a declared identifier is visible outside its package.
///
/// The host convention is an uppercase first letter. The blank identifier
/// `_` is never exported.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Reduces a raw doc comment to a one-line summary.
///
/// Takes the first paragraph, collapses its whitespace and cuts it after the
/// first sentence. Boilerplate comments (copyright, authorship) yield an empty
/// synopsis.
pub fn synopsis(comment: &str) -> String {
    let paragraph = first_paragraph(comment);
    let collapsed = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
    let sentence = first_sentence(&collapsed);

    let lower = sentence.to_lowercase();
    if BOILERPLATE_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return String::new();
    }
    sentence.to_string()
}

fn first_paragraph(comment: &str) -> String {
    comment
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// A sentence ends at a period followed by a space, unless the period closes a
// single capital initial such as the "A." in "A. Smith".
fn first_sentence(text: &str) -> &str {
    let (mut ppp, mut pp, mut p) = ('\0', '\0', '\0');
    for (i, q) in text.char_indices() {
        if q == ' ' && p == '.' && (!pp.is_uppercase() || ppp.is_uppercase()) {
            return &text[..i];
        }
        if p == '。' || p == '．' {
            return &text[..i];
        }
        ppp = pp;
        pp = p;
        p = q;
    }
    text
}
