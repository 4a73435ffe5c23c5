use super::*;

/// Tests recording a new repost.
///
/// Expected: Ok with the created record and one stored row
#[tokio::test]
async fn creates_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    let created = repo.create(10, 20, 3).await?;

    assert_eq!(
        created,
        StarredMessage {
            original_message_id: 10,
            repost_message_id: 20,
            star_count: 3,
        }
    );

    let rows = entity::prelude::StarredMessage::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].original_message_id, "10");

    Ok(())
}

/// Tests recording a second repost for the same original message.
///
/// Verifies the unique index keeps at most one record per original message.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_original_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    repo.create(10, 20, 3).await?;

    let result = repo.create(10, 21, 3).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
