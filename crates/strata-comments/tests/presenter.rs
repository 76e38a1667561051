//! End-to-end presenter tests with in-memory collaborators.

use std::sync::Arc;

use strata_comments::{
    Comment, CommentServices, Comments, CommentsError, DISPLAY_VIEW, EntryToken, Entry,
    FLASH_COMMENT_KEY, FORM_VIEW, MemoryStore,
};
use strata_core::crypto::EncryptionKey;
use strata_core::mock::RecordingRenderer;
use strata_core::registry::StaticModules;
use strata_core::session::{FlashStore, MemoryFlash};
use strata_core::settings::{ENABLE_PROFILES, MemorySettings};
use strata_i18n::StaticTranslations;
use url::Url;
use uuid::Uuid;

struct Harness {
    store: Arc<MemoryStore>,
    renderer: Arc<RecordingRenderer>,
    flash: Arc<MemoryFlash>,
    key: EncryptionKey,
    services: CommentServices,
}

fn harness() -> Harness {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let store = Arc::new(MemoryStore::new());
    let renderer = Arc::new(RecordingRenderer::new());
    let flash = Arc::new(MemoryFlash::new());
    let key = EncryptionKey::generate();

    let services = CommentServices::new(
        store.clone(),
        renderer.clone(),
        key.clone(),
        Url::parse("https://example.com/").unwrap(),
    )
    .with_flash(flash.clone())
    .with_modules(Arc::new(StaticModules::new().with_module("blog")))
    .with_translations(Arc::new(StaticTranslations::new().with_table(
        "blog",
        [("blog:post", "Post"), ("blog:posts", "Posts")],
    )))
    .with_request_uri("/posts/7");

    Harness {
        store,
        renderer,
        flash,
        key,
        services,
    }
}

fn blog_entry() -> Entry {
    Entry::new("blog", "blog:post", "blog:posts", "7").with_title("Seven wonders")
}

#[tokio::test]
async fn test_display_renders_empty_entry() {
    let harness = harness();
    let mut presenter = Comments::new(harness.services, blog_entry()).unwrap();

    let markup = presenter.display().await.unwrap();
    assert!(markup.starts_with(DISPLAY_VIEW));

    // The display view receives an empty comment sequence, which is its
    // no-comments branch.
    let call = harness.renderer.last_call().unwrap();
    assert_eq!(call.view, DISPLAY_VIEW);
    assert_eq!(call.data["comments"].as_array().unwrap().len(), 0);
    assert_eq!(call.data["module"], "blog");

    assert_eq!(presenter.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_display_enriches_and_escapes() {
    let harness = harness();
    harness.store.push(
        Comment::new("blog", "7", "blog:post", "blog:posts", "{{inject}} <b>hi</b>")
            .with_author(Uuid::new_v4(), "ada")
            .with_website("https://old.example.com"),
    );

    let services = harness
        .services
        .clone()
        .with_settings(Arc::new(MemorySettings::new().with(ENABLE_PROFILES, "1")));
    let presenter = Comments::new(services, blog_entry()).unwrap();

    presenter.display().await.unwrap();

    let call = harness.renderer.last_call().unwrap();
    let rendered = &call.data["comments"][0];

    // Template directives and markup arrive neutralized.
    assert_eq!(
        rendered["body"],
        "&#123;&#123;inject&#125;&#125; &lt;b&gt;hi&lt;/b&gt;"
    );
    // Category labels are resolved from the blog namespace.
    assert_eq!(rendered["singular"], "Post");
    assert_eq!(rendered["plural"], "Posts");
    // The author website is overridden with the canonical profile URL.
    assert_eq!(rendered["website"], "https://example.com/user/ada");
}

#[tokio::test]
async fn test_display_humanizes_unknown_labels() {
    let harness = harness();
    harness.store.push(Comment::new(
        "gallery",
        "3",
        "gallery:photo_album",
        "gallery:photo_albums",
        "nice shots",
    ));

    let entry = Entry::new("gallery", "gallery:photo_album", "gallery:photo_albums", "3");
    let presenter = Comments::new(harness.services, entry).unwrap();

    presenter.display().await.unwrap();

    let call = harness.renderer.last_call().unwrap();
    let rendered = &call.data["comments"][0];

    // The gallery module is not installed, so the keys fall back to
    // humanized labels.
    assert_eq!(rendered["singular"], "Photo Album");
    assert_eq!(rendered["plural"], "Photo Albums");
}

#[tokio::test]
async fn test_form_carries_token_and_flash_draft() {
    let harness = harness();
    harness
        .flash
        .flash(FLASH_COMMENT_KEY, "my unfinished draft".to_owned());

    let presenter = Comments::new(harness.services, blog_entry()).unwrap();
    let markup = presenter.form().await.unwrap();
    assert!(markup.starts_with(FORM_VIEW));

    let call = harness.renderer.last_call().unwrap();
    assert_eq!(call.view, FORM_VIEW);
    assert_eq!(call.data["module"], "blog");
    assert_eq!(call.data["comment"], "my unfinished draft");

    // The token in the form decodes back to the bound entry.
    let encoded = call.data["entry_hash"].as_str().unwrap();
    let token = EntryToken::decode(&harness.key, encoded).unwrap();
    assert_eq!(token.id, "7");
    assert_eq!(token.title.as_deref(), Some("Seven wonders"));
    assert_eq!(token.singular, "blog:post");
    assert_eq!(token.plural, "blog:posts");

    // Flash drafts are one-shot: a second form render has none.
    presenter.form().await.unwrap();
    let call = harness.renderer.last_call().unwrap();
    assert!(call.data["comment"].is_null());
}

#[tokio::test]
async fn test_entry_uri_defaults_to_request_path() {
    let harness = harness();
    let key = harness.key.clone();

    // No explicit uri on the entry: the services' request path is used.
    let presenter = Comments::new(harness.services, blog_entry()).unwrap();
    let token = EntryToken::decode(&key, &presenter.entry_token().unwrap()).unwrap();
    assert_eq!(token.uri, "/posts/7");
}

#[tokio::test]
async fn test_entry_uri_override_wins() {
    let harness = harness();
    let key = harness.key.clone();

    let entry = blog_entry().with_uri("/archive/7");
    let presenter = Comments::new(harness.services, entry).unwrap();
    let token = EntryToken::decode(&key, &presenter.entry_token().unwrap()).unwrap();
    assert_eq!(token.uri, "/archive/7");
}

#[tokio::test]
async fn test_token_roundtrip_restores_entry_fields() {
    let harness = harness();
    let key = harness.key.clone();

    let entry = Entry::new("blog", "post", "posts", "42")
        .with_title("Post")
        .with_uri("/posts/42");
    let presenter = Comments::new(harness.services, entry).unwrap();

    let decoded = EntryToken::decode(&key, &presenter.entry_token().unwrap()).unwrap();
    assert_eq!(
        decoded,
        EntryToken {
            id: "42".to_owned(),
            title: Some("Post".to_owned()),
            uri: "/posts/42".to_owned(),
            singular: "post".to_owned(),
            plural: "posts".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_count_string_selects_distinct_keys() {
    let harness = harness();
    let presenter = Comments::new(harness.services, blog_entry()).unwrap();

    // Explicit counts select the plural and singular templates.
    assert_eq!(presenter.count_string(Some(0)), "0 comments");
    assert_eq!(presenter.count_string(Some(1)), "1 comment");
    assert_eq!(presenter.count_string(Some(12)), "12 comments");
}

#[tokio::test]
async fn test_count_string_uses_cached_count() {
    let harness = harness();
    harness
        .store
        .push(Comment::new("blog", "7", "blog:post", "blog:posts", "only one"));

    let mut presenter = Comments::new(harness.services, blog_entry()).unwrap();

    // Never fetched: cached count defaults to 0.
    assert_eq!(presenter.count_string(None), "0 comments");

    assert_eq!(presenter.count().await.unwrap(), 1);
    assert_eq!(presenter.count_string(None), "1 comment");
}

#[tokio::test]
async fn test_missing_configuration_fails_fast() {
    let harness = harness();

    let err = Comments::new(harness.services, Entry::new("", "blog:post", "blog:posts", "7"))
        .unwrap_err();
    assert!(matches!(
        err,
        CommentsError::MissingConfiguration { field: "module" }
    ));
}
