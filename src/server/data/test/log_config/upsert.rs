use super::*;

/// Tests pointing a guild's log mirror at a channel in another guild.
///
/// Expected: Ok with the destination stored
#[tokio::test]
async fn stores_cross_guild_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogConfigRepository::new(db);
    repo.upsert(UpsertLogConfigParam {
        guild_id: 100,
        target_guild_id: 900,
        target_channel_id: 901,
    })
    .await?;

    let found = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(found.target_guild_id, "900");
    assert_eq!(found.target_channel_id, "901");

    Ok(())
}

/// Tests replacing an existing destination.
///
/// Expected: Ok with a single row holding the new destination
#[tokio::test]
async fn replaces_existing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_log_config(db, "100", "500").await?;

    let repo = LogConfigRepository::new(db);
    let updated = repo
        .upsert(UpsertLogConfigParam {
            guild_id: 100,
            target_guild_id: 100,
            target_channel_id: 600,
        })
        .await?;

    assert_eq!(updated.target_channel_id, "600");

    let count = entity::prelude::LogConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an unconfigured guild has no destination.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogConfigRepository::new(db);

    assert!(repo.find_by_guild_id(100).await?.is_none());

    Ok(())
}
