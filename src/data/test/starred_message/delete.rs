use super::*;

/// Tests deleting a tracked message.
///
/// Verifies only the record for the given original message is removed.
///
/// Expected: Ok with the other record kept
#[tokio::test]
async fn deletes_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    repo.create(10, 20, 3).await?;
    repo.create(11, 21, 3).await?;

    repo.delete(10).await?;

    assert!(repo.get(10).await?.is_none());
    assert!(repo.get(11).await?.is_some());

    Ok(())
}

/// Tests deleting a message that has no record.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarredMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarredMessageRepository::new(db);
    let result = repo.delete(12345).await;

    assert!(result.is_ok());

    Ok(())
}
