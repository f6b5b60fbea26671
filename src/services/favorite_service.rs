use chrono::Utc;

use crate::{
    dto::favorites::{FavoriteList, FavoriteStatus},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{FavoriteEntry, Game},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    store::{self, DocumentStore, favorites_path},
};

fn snapshot(game: &Game) -> FavoriteEntry {
    FavoriteEntry {
        id: game.id,
        name: game.name.clone(),
        slug: game.slug.clone(),
        background_image: game.background_image.clone(),
        rating: game.rating,
        added: Utc::now(),
    }
}

pub async fn add_favorite(
    store: &dyn DocumentStore,
    user: &AuthUser,
    game: &Game,
) -> AppResult<ApiResponse<FavoriteEntry>> {
    let entry = snapshot(game);
    store::set_as(
        store,
        &favorites_path(&user.user_id),
        &game.id.to_string(),
        &entry,
    )
    .await?;
    tracing::debug!(user_id = %user.user_id, game_id = game.id, "favorite added");
    Ok(ApiResponse::success(
        "Added to favorites",
        entry,
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    store: &dyn DocumentStore,
    user: &AuthUser,
    game_id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    store
        .delete(&favorites_path(&user.user_id), &game_id.to_string())
        .await?;
    tracing::debug!(user_id = %user.user_id, game_id, "favorite removed");
    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Read failures count as "not a favorite".
pub async fn is_favorite(store: &dyn DocumentStore, user: &AuthUser, game_id: i64) -> bool {
    match store
        .get(&favorites_path(&user.user_id), &game_id.to_string())
        .await
    {
        Ok(doc) => doc.is_some(),
        Err(err) => {
            tracing::error!(error = %err, game_id, "failed to check favorite status");
            false
        }
    }
}

/// Flips membership and reports the new state.
///
/// This is a read followed by a write with no transaction around it; two
/// concurrent toggles for the same user and game can race.
pub async fn toggle_favorite(
    store: &dyn DocumentStore,
    user: &AuthUser,
    game: &Game,
) -> AppResult<ApiResponse<FavoriteStatus>> {
    let is_favorite = if is_favorite(store, user, game.id).await {
        remove_favorite(store, user, game.id).await?;
        false
    } else {
        add_favorite(store, user, game).await?;
        true
    };

    let message = if is_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    Ok(ApiResponse::success(
        message,
        FavoriteStatus {
            game_id: game.id,
            is_favorite,
        },
        Some(Meta::empty()),
    ))
}

pub async fn favorite_status(
    store: &dyn DocumentStore,
    user: &AuthUser,
    game_id: i64,
) -> AppResult<ApiResponse<FavoriteStatus>> {
    let is_favorite = is_favorite(store, user, game_id).await;
    Ok(ApiResponse::success(
        "OK",
        FavoriteStatus {
            game_id,
            is_favorite,
        },
        Some(Meta::empty()),
    ))
}

/// Newest first.
pub async fn list_favorites(
    store: &dyn DocumentStore,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<FavoriteList>> {
    let docs = match store.list(&favorites_path(&user.user_id)).await {
        Ok(docs) => docs,
        Err(err) => {
            tracing::error!(error = %err, user_id = %user.user_id, "failed to list favorites");
            Vec::new()
        }
    };

    let mut entries: Vec<FavoriteEntry> = docs
        .into_iter()
        .filter_map(|doc| match doc.decode::<FavoriteEntry>() {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed favorite");
                None
            }
        })
        .collect();
    entries.sort_by(|a, b| b.added.cmp(&a.added));

    let (items, page, per_page, total) = pagination.apply(entries);
    let meta = Meta::with_window(page, per_page, total);
    Ok(ApiResponse::success("OK", FavoriteList { items }, Some(meta)))
}
