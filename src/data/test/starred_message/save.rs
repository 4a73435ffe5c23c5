use super::*;

/// Tests updating the star count of a tracked message.
///
/// Expected: Ok with the new count persisted
#[tokio::test]
async fn updates_star_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    let mut starred = repo.create(10, 20, 3).await?;
    starred.star_count = 5;

    repo.save(&starred).await?;

    let reloaded = repo.get(10).await?.unwrap();
    assert_eq!(reloaded.star_count, 5);
    assert_eq!(reloaded.repost_message_id, 20);

    Ok(())
}

/// Tests saving a record that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    let result = repo
        .save(&StarredMessage {
            original_message_id: 1,
            repost_message_id: 2,
            star_count: 3,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
