//! Integration tests against a live PostgreSQL instance.
//!
//! These tests require `DATABASE_URL` to point at a database the test
//! role may create tables in; they are skipped otherwise so the suite
//! stays green on machines without PostgreSQL.

use strata_postgres::prelude::*;
use uuid::Uuid;

fn test_config() -> Option<PgConfig> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(PgConfig::new(url).with_max_connections(4))
}

async fn connect() -> Option<PgClient> {
    let config = test_config()?;
    let client = PgClient::new(config).expect("client should build from config");
    client
        .run_pending_migrations()
        .await
        .expect("migrations should apply");
    Some(client)
}

#[tokio::test]
async fn test_comment_moderation_lifecycle() {
    let Some(client) = connect().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    // Unique entry per run keeps reruns independent.
    let entry_id = Uuid::new_v4().to_string();

    let first = client
        .create_comment(
            NewComment::for_entry("blog", &entry_id, "blog:post", "blog:posts", "First!")
                .with_guest("Ada", "ada@example.com"),
        )
        .await
        .unwrap();
    assert!(first.status.is_pending());
    assert!(first.is_anonymous());

    // Pending comments are invisible to the entry-scoped reads.
    let count = client
        .count_comments_by_entry("blog", "blog:post", &entry_id)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let approved = client.approve_comment(first.id).await.unwrap();
    assert!(approved.is_approved());

    let second = client
        .create_comment(
            NewComment::for_entry("blog", &entry_id, "blog:post", "blog:posts", "Second!")
                .with_guest("Brin", "brin@example.com")
                .with_status(CommentStatus::Approved),
        )
        .await
        .unwrap();

    let comments = client
        .find_comments_by_entry("blog", "blog:post", &entry_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(comments.len(), 2);
    // Oldest first.
    assert_eq!(comments[0].0.id, approved.id);
    assert_eq!(comments[1].0.id, second.id);
    // Guest comments join no account.
    assert!(comments[0].1.is_none());

    let count = client
        .count_comments_by_entry("blog", "blog:post", &entry_id)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_stream_field_schema_roundtrip() {
    let Some(client) = connect().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };

    let namespace = format!("ns_{}", Uuid::new_v4().simple());

    client
        .create_field(NewStreamField::new(&namespace, "title", "Title", "text").with_ordering(1))
        .await
        .unwrap();
    client
        .create_field(NewStreamField::new(&namespace, "intro", "Intro", "textarea"))
        .await
        .unwrap();

    let fields = client.find_fields_by_namespace(&namespace).await.unwrap();
    assert_eq!(fields.len(), 2);
    // Schema order: ordering column ascending.
    assert_eq!(fields[0].field_slug, "intro");
    assert_eq!(fields[1].field_slug, "title");

    let title = client
        .find_field_by_slug(&namespace, "title")
        .await
        .unwrap()
        .expect("slug should resolve");
    assert_eq!(title.field_type, "text");

    // Duplicate slug in the same namespace hits the unique constraint.
    let err = client
        .create_field(NewStreamField::new(&namespace, "title", "Title", "text"))
        .await
        .unwrap_err();
    assert_eq!(
        err.constraint_violation(),
        Some(ConstraintViolation::StreamField(
            strata_postgres::types::StreamFieldConstraints::SlugTaken
        ))
    );
}
