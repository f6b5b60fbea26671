mod common;

use game_storefront_api::services::catalog_service::CatalogClient;

// Nothing listens on the discard port, so every request fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn unreachable_catalog_degrades_to_empty_results() -> anyhow::Result<()> {
    let client = CatalogClient::new(UNREACHABLE, None)?;

    let popular = client.popular_games(1, 20).await;
    assert!(popular.games.is_empty());
    assert_eq!(popular.count, 0);

    assert!(client.search_games("zelda", 1, 20).await.games.is_empty());
    assert!(client.games_by_genre(4, 1, 20).await.games.is_empty());
    assert!(client.game_details("the-witcher-3").await.is_none());
    assert!(client.game_screenshots(3328).await.is_empty());
    assert!(client.game_stores(3328).await.is_empty());
    assert!(client.genres().await.is_empty());
    assert!(client.platforms().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn slugs_stay_a_single_path_segment() -> anyhow::Result<()> {
    let client = CatalogClient::new(common::spawn_catalog().await?, None)?;

    let details = client.game_details("portal-2").await.expect("known game");
    assert_eq!(details.game.id, 107);

    let odd = client.game_details("a/b?x=1").await.expect("echoed game");
    assert_eq!(odd.game.name, "a/b?x=1");

    assert!(client.game_details("..").await.is_none());
    assert!(client.game_details("").await.is_none());
    assert!(client.game_details("missing").await.is_none());
    Ok(())
}
