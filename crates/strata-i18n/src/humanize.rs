//! Humanized fallback for untranslated keys.

/// Produces a readable label from a raw localization key.
///
/// The namespace prefix (everything up to the last `:`) is dropped,
/// underscores and dashes become spaces, and each word is capitalized:
/// `"blog:news_item"` becomes `"News Item"`. Used wherever a lookup miss
/// must degrade gracefully instead of erroring.
pub fn humanize(key: &str) -> String {
    let tail = key.rsplit(':').next().unwrap_or(key);

    tail.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_namespace_prefix() {
        assert_eq!(humanize("blog:post"), "Post");
    }

    #[test]
    fn test_underscores_become_spaces() {
        assert_eq!(humanize("news_item"), "News Item");
        assert_eq!(humanize("shop:featured-products"), "Featured Products");
    }

    #[test]
    fn test_empty_and_degenerate_keys() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("blog:"), "");
        assert_eq!(humanize("__"), "");
    }

    #[test]
    fn test_already_readable_word() {
        assert_eq!(humanize("posts"), "Posts");
    }
}
