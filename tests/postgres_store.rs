use game_storefront_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    store::{DocumentStore, PgDocumentStore, StoreError},
};
use serde_json::json;

async fn connect() -> anyhow::Result<Option<PgDocumentStore>> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL"))
    else {
        eprintln!("DATABASE_URL not set; skipping postgres store test");
        return Ok(None);
    };
    let orm = create_orm_conn(&url).await?;
    run_migrations(&orm).await?;
    let pool = create_pool(&url).await?;
    Ok(Some(PgDocumentStore::new(pool, orm)))
}

#[tokio::test]
async fn documents_round_trip_through_postgres() -> anyhow::Result<()> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let collection = format!("test-{}", uuid::Uuid::new_v4().simple());

    store
        .set(&collection, "a", json!({ "gameId": 1, "rating": 3 }))
        .await?;
    store
        .update(&collection, "a", json!({ "rating": 5 }))
        .await?;
    assert_eq!(
        store.get(&collection, "a").await?,
        Some(json!({ "gameId": 1, "rating": 5 }))
    );

    let id = store.add(&collection, json!({ "gameId": 2 })).await?;
    let hits = store.query(&collection, &[("gameId", json!(2))]).await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);
    assert_eq!(store.list(&collection).await?.len(), 2);

    let err = store
        .update(&collection, "missing", json!({ "rating": 1 }))
        .await
        .expect_err("missing document");
    assert!(matches!(err, StoreError::NotFound { .. }));

    store.delete(&collection, "a").await?;
    store.delete(&collection, "a").await?;
    store.delete(&collection, &id).await?;
    assert!(store.list(&collection).await?.is_empty());
    Ok(())
}
