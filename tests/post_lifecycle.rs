use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

mod support;

use posts_core::application::commands::posts::{CreatePostCommand, UpdatePostCommand};
use posts_core::application::error::ApplicationError;
use posts_core::domain::post::{PostFilter, PostOrder, PostRepository, PostState};
use support::{create_command, fixed_now, in_memory_manager};

#[tokio::test]
async fn create_derives_slug_from_title() {
    let (_repo, manager) = in_memory_manager();

    let post = manager
        .create_post(create_command("My First Blog Post"))
        .await
        .expect("create");

    assert_eq!(post.slug, "my-first-blog-post");
    assert_eq!(post.state, PostState::Active);
    assert!(post.content.is_none());
}

#[tokio::test]
async fn duplicate_title_gets_numbered_slug() {
    let (_repo, manager) = in_memory_manager();

    let first = manager
        .create_post(create_command("My First Blog Post"))
        .await
        .unwrap();
    let second = manager
        .create_post(create_command("My First Blog Post"))
        .await
        .unwrap();
    let third = manager
        .create_post(create_command("my first blog post!"))
        .await
        .unwrap();

    assert_eq!(first.slug, "my-first-blog-post");
    assert_eq!(second.slug, "my-first-blog-post-1");
    assert_eq!(third.slug, "my-first-blog-post-2");
}

#[tokio::test]
async fn inactive_posts_still_reserve_their_slug() {
    let (_repo, manager) = in_memory_manager();

    let first = manager.create_post(create_command("Reserved")).await.unwrap();
    manager.delete_post(first.id).await.unwrap();

    let second = manager.create_post(create_command("Reserved")).await.unwrap();
    assert_eq!(second.slug, "reserved-1");
}

#[tokio::test]
async fn published_at_defaults_to_clock_and_honours_input() {
    let (_repo, manager) = in_memory_manager();

    let defaulted = manager.create_post(create_command("Now")).await.unwrap();
    assert!(defaulted.published_at >= fixed_now());

    let scheduled_at = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
    let scheduled = manager
        .create_post(
            CreatePostCommand::builder()
                .title("Later")
                .content("body")
                .published_at(scheduled_at)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(scheduled.published_at, scheduled_at);
    assert_eq!(scheduled.content.as_deref(), Some("body"));
}

#[tokio::test]
async fn blank_or_symbol_only_titles_are_rejected() {
    let (repo, manager) = in_memory_manager();

    let blank = manager.create_post(create_command("   ")).await.unwrap_err();
    assert!(matches!(blank, ApplicationError::Validation(_)));

    let symbols = manager.create_post(create_command("?!*&")).await.unwrap_err();
    assert!(matches!(symbols, ApplicationError::Validation(_)));

    assert!(repo.is_empty().unwrap());
}

#[tokio::test]
async fn list_returns_active_posts_newest_first() {
    let (_repo, manager) = in_memory_manager();

    let a = manager.create_post(create_command("Alpha")).await.unwrap();
    let b = manager.create_post(create_command("Beta")).await.unwrap();
    let c = manager.create_post(create_command("Gamma")).await.unwrap();
    manager.delete_post(b.id).await.unwrap();

    let listed = manager.list_active_posts().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, a.id]);
    assert!(listed.iter().all(|p| p.state == PostState::Active));

    let everything = manager.list_all_posts().await.unwrap();
    let ids: Vec<i64> = everything.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn get_post_and_slug_lookup_hide_inactive_records() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Hidden Soon")).await.unwrap();
    assert_eq!(manager.get_post(post.id).await.unwrap().id, post.id);
    assert_eq!(
        manager.get_post_by_slug("hidden-soon").await.unwrap().id,
        post.id
    );

    manager.delete_post(post.id).await.unwrap();

    assert!(matches!(
        manager.get_post(post.id).await.unwrap_err(),
        ApplicationError::NotFound(_)
    ));
    assert!(matches!(
        manager.get_post_by_slug("hidden-soon").await.unwrap_err(),
        ApplicationError::NotFound(_)
    ));
}

#[tokio::test]
async fn lookups_of_unknown_or_malformed_keys_are_not_found() {
    let (_repo, manager) = in_memory_manager();

    for id in [0, -1, 42] {
        match manager.get_post(id).await.unwrap_err() {
            ApplicationError::NotFound(msg) => {
                assert_eq!(msg, format!("Post with ID {id} not found"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    for slug in ["missing", "Not A Slug", ""] {
        assert!(matches!(
            manager.get_post_by_slug(slug).await.unwrap_err(),
            ApplicationError::NotFound(_)
        ));
    }
}

#[tokio::test]
async fn deleting_twice_is_not_found_the_second_time() {
    let (repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Once")).await.unwrap();
    manager.delete_post(post.id).await.expect("first delete");

    let err = manager.delete_post(post.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // Soft delete keeps the record.
    let stored = repo
        .find_many(&PostFilter::all(), PostOrder::CreatedAtDesc)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].state, PostState::Inactive);
    assert_eq!(stored[0].title.as_str(), "Once");
    assert_eq!(stored[0].slug.as_str(), "once");
}

#[tokio::test]
async fn update_with_same_title_keeps_slug() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Stable")).await.unwrap();
    let updated = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            title: Some("Stable".into()),
            content: Some("new body".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "stable");
    assert_eq!(updated.content.as_deref(), Some("new body"));
    assert!(updated.updated_at > post.updated_at);
    assert_eq!(updated.created_at, post.created_at);
}

#[tokio::test]
async fn update_with_new_title_recomputes_slug() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Old Name")).await.unwrap();
    let updated = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            title: Some("Brand New Name".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Brand New Name");
    assert_eq!(updated.slug, "brand-new-name");
    assert!(manager.get_post_by_slug("old-name").await.is_err());
}

#[tokio::test]
async fn retitle_to_equivalent_slug_keeps_own_slug() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Hello World")).await.unwrap();
    let updated = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            title: Some("hello, world".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "hello, world");
    assert_eq!(updated.slug, "hello-world");
}

#[tokio::test]
async fn retitle_onto_taken_slug_is_disambiguated() {
    let (_repo, manager) = in_memory_manager();

    manager.create_post(create_command("Taken")).await.unwrap();
    let other = manager.create_post(create_command("Other")).await.unwrap();

    let updated = manager
        .update_post(UpdatePostCommand {
            id: other.id,
            title: Some("Taken".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.slug, "taken-1");
}

#[tokio::test]
async fn update_of_inactive_post_is_not_found() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Gone")).await.unwrap();
    manager.delete_post(post.id).await.unwrap();

    let err = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            content: Some("revive?".into()),
            state: Some(PostState::Active),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn update_can_soft_delete_and_reschedule() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Retire Me")).await.unwrap();
    let new_date = fixed_now() + Duration::days(3);
    let updated = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            published_at: Some(new_date),
            state: Some(PostState::Inactive),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.state, PostState::Inactive);
    assert_eq!(updated.published_at, new_date);
    assert_eq!(updated.slug, post.slug);
    assert!(manager.get_post(post.id).await.is_err());
}

#[tokio::test]
async fn update_with_blank_title_is_validation_error() {
    let (_repo, manager) = in_memory_manager();

    let post = manager.create_post(create_command("Fine")).await.unwrap();
    let err = manager
        .update_post(UpdatePostCommand {
            id: post.id,
            title: Some("  ".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(manager.get_post(post.id).await.unwrap().title, "Fine");
}

#[tokio::test]
async fn many_duplicates_fall_back_to_timestamp_suffix() {
    let (_repo, manager) = in_memory_manager();

    for _ in 0..=100 {
        manager.create_post(create_command("Popular")).await.unwrap();
    }
    let hundredth = manager.get_post_by_slug("popular-100").await.unwrap();
    assert_eq!(hundredth.title, "Popular");

    let overflow = manager.create_post(create_command("Popular")).await.unwrap();
    let suffix = overflow
        .slug
        .strip_prefix("popular-")
        .expect("suffixed slug");
    let millis: i64 = suffix.parse().expect("numeric suffix");
    assert!(millis >= fixed_now().timestamp_millis());

    let all = manager.list_all_posts().await.unwrap();
    assert_eq!(all.len(), 102);
    let mut slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), 102);
}

#[tokio::test]
async fn shared_store_serves_concurrent_creators() {
    let (_repo, manager) = in_memory_manager();
    let manager = Arc::new(manager);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let manager = Arc::clone(&manager);
        handles.push(tokio::spawn(async move {
            manager.create_post(create_command("Race")).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(ApplicationError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert!(created >= 1);

    let listed = manager.list_active_posts().await.unwrap();
    let mut slugs: Vec<String> = listed.into_iter().map(|p| p.slug).collect();
    let total = slugs.len();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
}
