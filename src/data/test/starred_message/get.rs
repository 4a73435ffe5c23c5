use super::*;

/// Tests fetching a tracked message.
///
/// Expected: Ok(Some) with stored repost id and count
#[tokio::test]
async fn returns_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starred_message::StarredMessageFactory::new(db)
        .original_message_id("1000")
        .repost_message_id("2000")
        .star_count(4)
        .build()
        .await?;

    let repo = StarredMessageRepository::new(db);
    let starred = repo.get(1000).await?.unwrap();

    assert_eq!(starred.original_message_id, 1000);
    assert_eq!(starred.repost_message_id, 2000);
    assert_eq!(starred.star_count, 4);

    Ok(())
}

/// Tests fetching a message that was never reposted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starred_message::create_starred_message(db).await?;

    let repo = StarredMessageRepository::new(db);
    let result = repo.get(1).await?;

    assert!(result.is_none());

    Ok(())
}
