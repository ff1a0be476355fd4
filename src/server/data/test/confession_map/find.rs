use super::*;

/// Tests index lookups are scoped to the guild.
///
/// Expected: Ok(Some) in the owning guild, Ok(None) elsewhere
#[tokio::test]
async fn finds_index_within_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConfessionMap)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_confession(db, "100", 7).await?;
    factory::create_confession(db, "200", 8).await?;

    let repo = ConfessionMapRepository::new(db);

    assert_eq!(repo.find_by_index(100, 7).await?, Some(created));
    assert!(repo.find_by_index(200, 7).await?.is_none());

    Ok(())
}

/// Tests reverse lookup from a posted message.
///
/// Expected: Ok(Some) with the index that was posted as the message
#[tokio::test]
async fn finds_row_by_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConfessionMap)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::confession_map::ConfessionMapFactory::new(db)
        .guild_id("100")
        .index(3)
        .message_id("4242")
        .kind(Some("reply"))
        .build()
        .await?;

    let repo = ConfessionMapRepository::new(db);

    let row = repo.find_by_message_id(100, 4242).await?.unwrap();
    assert_eq!(row.confession_index, 3);
    assert_eq!(row.kind.as_deref(), Some("reply"));
    assert!(repo.find_by_message_id(100, 4243).await?.is_none());
    assert!(repo.find_by_message_id(200, 4242).await?.is_none());

    Ok(())
}

/// Tests counting rows per guild.
///
/// Expected: Ok with only the guild's own rows counted
#[tokio::test]
async fn counts_rows_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConfessionMap)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_confession(db, "100", 1).await?;
    factory::create_confession(db, "100", 2).await?;
    factory::create_confession(db, "200", 1).await?;

    let repo = ConfessionMapRepository::new(db);

    assert_eq!(repo.count_by_guild(100).await?, 2);
    assert_eq!(repo.count_by_guild(300).await?, 0);

    Ok(())
}
