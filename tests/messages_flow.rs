use game_storefront_api::{
    dto::messages::ContactRequest,
    error::AppError,
    middleware::auth::AuthUser,
    models::ContactMessage,
    services::message_service,
    store::{DocumentStore, MESSAGES, MemoryDocumentStore},
};

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        subject: "Refund".to_string(),
        message: message.to_string(),
    }
}

#[tokio::test]
async fn message_is_stored_with_sender() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let user = AuthUser::new("uid-7");

    let sent = message_service::submit_message(
        &store,
        Some(&user),
        request("  Ada ", "ada@example.com", "Where is my key?"),
    )
    .await?
    .data
    .expect("message");
    assert!(!sent.id.is_empty());
    assert_eq!(sent.name, "Ada");
    assert_eq!(sent.user_id.as_deref(), Some("uid-7"));

    let docs = store.list(MESSAGES).await?;
    assert_eq!(docs.len(), 1);
    let stored: ContactMessage = docs.into_iter().next().expect("doc").decode()?;
    assert_eq!(stored.email, "ada@example.com");
    assert_eq!(stored.subject, "Refund");
    Ok(())
}

#[tokio::test]
async fn anonymous_messages_are_accepted() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let sent = message_service::submit_message(&store, None, request("Bob", "bob@x.io", "Hi"))
        .await?
        .data
        .expect("message");
    assert!(sent.user_id.is_none());
    Ok(())
}

#[tokio::test]
async fn incomplete_messages_are_rejected() -> anyhow::Result<()> {
    let store = MemoryDocumentStore::new();
    let cases = [
        request("", "a@b.c", "text"),
        request("Ann", "not-an-email", "text"),
        request("Ann", "a@b.c", "   "),
    ];
    for payload in cases {
        let err = message_service::submit_message(&store, None, payload)
            .await
            .expect_err("invalid");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
    assert!(store.list(MESSAGES).await?.is_empty());
    Ok(())
}
