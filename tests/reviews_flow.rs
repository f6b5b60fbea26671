use game_storefront_api::{
    dto::reviews::{SubmitReviewRequest, UpdateReviewRequest},
    error::AppError,
    middleware::auth::AuthUser,
    models::{Review, VoteState},
    routes::params::Pagination,
    services::review_service::{self, Vote},
    store::MemoryDocumentStore,
};

fn submit(game_id: i64, rating: u8, content: &str) -> SubmitReviewRequest {
    SubmitReviewRequest {
        game_id,
        rating,
        content: content.to_string(),
    }
}

fn assert_consistent(review: &Review) {
    assert_eq!(review.likes, review.liked_by.len() as i64);
    assert_eq!(review.dislikes, review.disliked_by.len() as i64);
    assert!(review.likes >= 0 && review.dislikes >= 0);
    for voter in &review.liked_by {
        assert!(!review.disliked_by.contains(voter), "{voter} is in both sets");
    }
}

#[tokio::test]
async fn vote_toggles_keep_counters_in_step() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let author = AuthUser::new("author");
    let created = review_service::submit_review(&store, &author, submit(7, 4, "Solid"))
        .await?
        .data
        .expect("review");

    let steps = [
        (Vote::Like, VoteState::Liked, 1, 0),
        (Vote::Like, VoteState::None, 0, 0),
        (Vote::Dislike, VoteState::Disliked, 0, 1),
        (Vote::Like, VoteState::Liked, 1, 0),
        (Vote::Dislike, VoteState::Disliked, 0, 1),
        (Vote::Dislike, VoteState::None, 0, 0),
    ];
    for (vote, expected, likes, dislikes) in steps {
        let (review, state) = review_service::cast_vote(&store, &created.id, "voter", vote)
            .await?
            .expect("review exists");
        assert_eq!(state, expected, "{vote:?}");
        assert_eq!((review.likes, review.dislikes), (likes, dislikes), "{vote:?}");
        assert_consistent(&review);

        let stored = review_service::get_review(&store, &created.id)
            .await
            .expect("stored");
        assert_eq!(stored.vote_of("voter"), expected);
        assert_consistent(&stored);
    }
    Ok(())
}

#[tokio::test]
async fn votes_from_different_users_accumulate() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let author = AuthUser::new("author");
    let id = review_service::submit_review(&store, &author, submit(7, 5, "Great"))
        .await?
        .data
        .expect("review")
        .id;

    review_service::like_review(&store, &id, "a").await?;
    review_service::like_review(&store, &id, "b").await?;
    let (review, state) = review_service::dislike_review(&store, &id, "a")
        .await?
        .expect("review exists");

    assert_eq!(state, VoteState::Disliked);
    assert_eq!(review.likes, 1);
    assert_eq!(review.dislikes, 1);
    assert_eq!(review.vote_of("b"), VoteState::Liked);
    assert_eq!(review.vote_of("author"), VoteState::None);
    assert_consistent(&review);
    Ok(())
}

#[tokio::test]
async fn voting_on_missing_review() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    assert!(
        review_service::cast_vote(&store, "missing", "voter", Vote::Like)
            .await?
            .is_none()
    );

    let err = review_service::vote_review(&store, &AuthUser::new("voter"), "missing", Vote::Like)
        .await
        .expect_err("not found");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn average_rating_over_game_reviews() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();

    let empty = review_service::get_average_rating(&store, 42).await;
    assert_eq!(empty.average, 0.0);
    assert_eq!(empty.count, 0);

    review_service::submit_review(&store, &AuthUser::new("u1"), submit(42, 3, "Okay")).await?;
    review_service::submit_review(&store, &AuthUser::new("u2"), submit(42, 5, "Loved it")).await?;
    review_service::submit_review(&store, &AuthUser::new("u3"), submit(43, 1, "Other game")).await?;

    let rating = review_service::get_average_rating(&store, 42).await;
    assert_eq!(rating.average, 4.0);
    assert_eq!(rating.count, 2);
    Ok(())
}

#[tokio::test]
async fn second_submission_edits_existing_review() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let user = AuthUser {
        user_id: "u1".into(),
        name: None,
        email: Some("jane@example.com".into()),
    };

    let first = review_service::submit_review(&store, &user, submit(9, 2, "Meh"))
        .await?
        .data
        .expect("review");
    assert_eq!(first.user_name, "jane");
    assert!(review_service::has_user_reviewed(&store, "u1", 9).await);
    assert!(!review_service::has_user_reviewed(&store, "u1", 10).await);

    let second = review_service::submit_review(&store, &user, submit(9, 4, "Grew on me")).await?;
    assert_eq!(second.message, "Review updated");
    let second = second.data.expect("review");
    assert_eq!(second.id, first.id);
    assert_eq!(second.rating, 4);
    assert_eq!(second.content, "Grew on me");
    assert!(second.date >= first.date);

    let reviews = review_service::get_game_reviews(&store, 9).await;
    assert_eq!(reviews.len(), 1);
    Ok(())
}

#[tokio::test]
async fn only_the_author_may_edit_or_delete() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let author = AuthUser::new("author");
    let other = AuthUser::new("other");
    let id = review_service::submit_review(&store, &author, submit(1, 3, "Fine"))
        .await?
        .data
        .expect("review")
        .id;

    let update = || UpdateReviewRequest {
        rating: 1,
        content: "Hijacked".into(),
    };
    let err = review_service::edit_review(&store, &other, &id, update())
        .await
        .expect_err("forbidden");
    assert!(matches!(err, AppError::Forbidden));
    let err = review_service::remove_review(&store, &other, &id)
        .await
        .expect_err("forbidden");
    assert!(matches!(err, AppError::Forbidden));

    let edited = review_service::edit_review(&store, &author, &id, update())
        .await?
        .data
        .expect("review");
    assert_eq!(edited.rating, 1);

    review_service::remove_review(&store, &author, &id).await?;
    assert!(review_service::get_review(&store, &id).await.is_none());
    let err = review_service::remove_review(&store, &author, &id)
        .await
        .expect_err("gone");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn invalid_reviews_are_rejected() {
    let store = MemoryDocumentStore::new();
    let user = AuthUser::new("u1");

    for (rating, content) in [(0, "text"), (6, "text"), (3, "   ")] {
        let err = review_service::submit_review(&store, &user, submit(1, rating, content))
            .await
            .expect_err("invalid");
        assert!(matches!(err, AppError::BadRequest(_)), "{rating} {content:?}");
    }
    assert!(review_service::get_user_reviews(&store, "u1").await.is_empty());
}

#[tokio::test]
async fn user_reviews_are_listed_newest_first() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let user = AuthUser::new("u1");
    for game_id in [1, 2, 3] {
        review_service::submit_review(&store, &user, submit(game_id, 4, "Nice")).await?;
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    let page = review_service::list_user_reviews(&store, &user, Pagination::default()).await?;
    let games: Vec<i64> = page
        .data
        .expect("reviews")
        .items
        .iter()
        .map(|review| review.game_id)
        .collect();
    assert_eq!(games, vec![3, 2, 1]);
    assert_eq!(page.meta.expect("meta").total, Some(3));
    Ok(())
}
