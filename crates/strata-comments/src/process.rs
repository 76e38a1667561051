//! Comment enrichment pipeline.
//!
//! Runs exactly once over each fetched batch, in order: profile URL
//! override, category label resolution, output escaping. Re-running it
//! would double-escape, so the presenter owns the only call site.

use std::collections::HashSet;

use strata_core::escape::escape_view_text;
use strata_core::settings::ENABLE_PROFILES;
use strata_i18n::{Catalog, humanize};
use url::Url;

use crate::TRACING_TARGET_PROCESS;
use crate::comment::Comment;
use crate::services::CommentServices;

/// Enriches a fetched batch of comments for display.
pub(crate) fn process(comments: &mut [Comment], catalog: &Catalog, services: &CommentServices) {
    // The namespace memo lives and dies with this invocation; nothing
    // carries over between fetches or requests.
    let mut seen_modules: HashSet<String> = HashSet::new();
    let profiles_enabled = services.settings.get_bool(ENABLE_PROFILES);

    for comment in comments.iter_mut() {
        // Authored comments point at the canonical profile when the site
        // exposes public profiles.
        if profiles_enabled
            && let Some(author) = &comment.author
            && let Some(profile) = profile_url(&services.site_url, &author.username)
        {
            comment.website = Some(profile);
        }

        // Load the owning module's language lines at most once per batch,
        // and only for modules that are actually installed.
        if seen_modules.insert(comment.module.clone())
            && services.modules.exists(&comment.module)
        {
            catalog.load_namespace(&comment.module, services.translations.as_ref());
        }

        comment.singular = Some(
            catalog
                .lookup(&comment.entry_key)
                .unwrap_or_else(|| humanize(&comment.entry_key)),
        );
        comment.plural = Some(
            catalog
                .lookup(&comment.entry_plural)
                .unwrap_or_else(|| humanize(&comment.entry_plural)),
        );

        escape_fields(comment);
    }

    tracing::debug!(
        target: TRACING_TARGET_PROCESS,
        comment_count = comments.len(),
        modules_seen = seen_modules.len(),
        "Comment batch enriched"
    );
}

fn profile_url(site_url: &Url, username: &str) -> Option<String> {
    site_url
        .join(&format!("user/{username}"))
        .ok()
        .map(String::from)
}

/// Escapes the allow-listed free-text fields of a comment.
///
/// The allow-list replaces the original dynamic loop over every record
/// field, so non-text fields added later can never be corrupted by
/// escaping.
fn escape_fields(comment: &mut Comment) {
    comment.body = escape_view_text(&comment.body);

    if let Some(website) = comment.website.take() {
        comment.website = Some(escape_view_text(&website));
    }
    if let Some(author_name) = comment.author_name.take() {
        comment.author_name = Some(escape_view_text(&author_name));
    }
    if let Some(entry_title) = comment.entry_title.take() {
        comment.entry_title = Some(escape_view_text(&entry_title));
    }
    if let Some(singular) = comment.singular.take() {
        comment.singular = Some(escape_view_text(&singular));
    }
    if let Some(plural) = comment.plural.take() {
        comment.plural = Some(escape_view_text(&plural));
    }
    if let Some(author) = comment.author.as_mut() {
        author.username = escape_view_text(&author.username);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use strata_core::crypto::EncryptionKey;
    use strata_core::mock::RecordingRenderer;
    use strata_core::registry::StaticModules;
    use strata_core::settings::MemorySettings;
    use strata_i18n::StaticTranslations;
    use uuid::Uuid;

    use super::*;
    use crate::store::MemoryStore;

    fn services() -> CommentServices {
        CommentServices::new(
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingRenderer::new()),
            EncryptionKey::generate(),
            Url::parse("https://example.com/").unwrap(),
        )
    }

    #[test]
    fn test_profile_override_requires_setting_and_author() {
        let services = services()
            .with_settings(Arc::new(MemorySettings::new().with(ENABLE_PROFILES, "1")));
        let catalog = Catalog::new();

        let mut comments = vec![
            Comment::new("blog", "7", "blog:post", "blog:posts", "hi")
                .with_author(Uuid::new_v4(), "ada")
                .with_website("https://old.example.com"),
            Comment::new("blog", "7", "blog:post", "blog:posts", "anon")
                .with_website("https://guest.example.com"),
        ];

        process(&mut comments, &catalog, &services);

        assert_eq!(
            comments[0].website.as_deref(),
            Some("https://example.com/user/ada")
        );
        // Anonymous comments keep their supplied website.
        assert_eq!(
            comments[1].website.as_deref(),
            Some("https://guest.example.com")
        );
    }

    #[test]
    fn test_profile_override_disabled_by_default() {
        let services = services();
        let catalog = Catalog::new();

        let mut comments = vec![
            Comment::new("blog", "7", "blog:post", "blog:posts", "hi")
                .with_author(Uuid::new_v4(), "ada")
                .with_website("https://old.example.com"),
        ];

        process(&mut comments, &catalog, &services);

        assert_eq!(
            comments[0].website.as_deref(),
            Some("https://old.example.com")
        );
    }

    #[test]
    fn test_labels_resolve_or_humanize() {
        let services = services()
            .with_modules(Arc::new(StaticModules::new().with_module("blog")))
            .with_translations(Arc::new(
                StaticTranslations::new().with_table("blog", [("blog:post", "Article")]),
            ));
        let catalog = Catalog::new();

        let mut comments =
            vec![Comment::new("blog", "7", "blog:post", "blog:posts", "hi")];

        process(&mut comments, &catalog, &services);

        // Localized where a line exists, humanized fallback otherwise.
        assert_eq!(comments[0].singular.as_deref(), Some("Article"));
        assert_eq!(comments[0].plural.as_deref(), Some("Posts"));
    }

    #[test]
    fn test_uninstalled_module_namespace_is_not_loaded() {
        let services = services().with_translations(Arc::new(
            StaticTranslations::new().with_table("blog", [("blog:post", "Article")]),
        ));
        let catalog = Catalog::new();

        let mut comments =
            vec![Comment::new("blog", "7", "blog:post", "blog:posts", "hi")];

        process(&mut comments, &catalog, &services);

        // Module not registered, so its table never merged.
        assert_eq!(comments[0].singular.as_deref(), Some("Post"));
        assert!(!catalog.is_loaded("blog"));
    }

    #[test]
    fn test_escaping_neutralizes_directives_and_markup() {
        let services = services();
        let catalog = Catalog::new();

        let mut comments = vec![
            Comment::new("blog", "7", "blog:post", "blog:posts", "{{inject}} <script>")
                .with_author_name("<b>Ada</b>")
                .with_entry_title("Hello {{world}}"),
        ];

        process(&mut comments, &catalog, &services);

        let comment = &comments[0];
        assert_eq!(
            comment.body,
            "&#123;&#123;inject&#125;&#125; &lt;script&gt;"
        );
        assert_eq!(comment.author_name.as_deref(), Some("&lt;b&gt;Ada&lt;/b&gt;"));
        assert_eq!(
            comment.entry_title.as_deref(),
            Some("Hello &#123;&#123;world&#125;&#125;")
        );
    }
}
