use super::*;

/// Tests taking the live slot of a guild without a live message.
///
/// Expected: Ok(true) with the new message recorded
#[tokio::test]
async fn swaps_from_empty_pointer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert!(repo.swap_live_message(100, None, 777).await?);
    let config = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(config.live_message_id.as_deref(), Some("777"));

    assert!(repo.swap_live_message(100, Some(777), 778).await?);
    let config = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(config.live_message_id.as_deref(), Some("778"));

    Ok(())
}

/// Tests a swap based on a pointer another submission already moved.
///
/// Expected: Ok(false) with the other submission's message kept
#[tokio::test]
async fn stale_pointer_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("100")
        .live_message_id(Some("700".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert!(repo.swap_live_message(100, Some(700), 801).await?);
    assert!(!repo.swap_live_message(100, Some(700), 802).await?);
    assert!(!repo.swap_live_message(100, None, 803).await?);

    let config = repo.find_by_guild_id(100).await?.unwrap();
    assert_eq!(config.live_message_id.as_deref(), Some("801"));

    Ok(())
}

/// Tests that an unconfigured guild is left untouched.
///
/// Expected: Ok(false) with no row created
#[tokio::test]
async fn ignores_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    assert!(!repo.swap_live_message(100, None, 777).await?);

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
