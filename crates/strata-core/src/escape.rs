//! Output escaping for view-bound text.
//!
//! Comment bodies and other user-supplied strings end up inside templates
//! whose engine treats `{{ ... }}` as directives. Escaping therefore has
//! to neutralize both HTML markup and the template braces themselves;
//! [`escape_view_text`] applies both passes and is the function the
//! enrichment pipeline uses.

/// Escapes HTML-significant characters.
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replaces template braces with their numeric character references.
///
/// A directive like `{{name}}` survives HTML escaping untouched; turning
/// every brace into `&#123;`/`&#125;` keeps the template engine from ever
/// seeing an opening tag.
pub fn escape_template_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes text for embedding in a rendered view.
///
/// Markup is escaped first; the brace pass runs second because neither
/// pass produces characters the other rewrites.
pub fn escape_view_text(input: &str) -> String {
    escape_template_tags(&escape_markup(input))
}
