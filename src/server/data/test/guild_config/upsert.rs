use super::*;

/// Tests configuring a guild for the first time.
///
/// Expected: Ok with a row holding the channel and no live message
#[tokio::test]
async fn creates_config_for_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.upsert(100, 200).await?;

    assert_eq!(config.guild_id, "100");
    assert_eq!(config.channel_id, "200");
    assert!(config.live_message_id.is_none());

    Ok(())
}

/// Tests moving the confession channel of an already configured guild.
///
/// Verifies the channel is replaced in place and the live controls message of the
/// old channel is forgotten.
///
/// Expected: Ok with a single row, new channel, live message cleared
#[tokio::test]
async fn replaces_channel_and_clears_live_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("100")
        .channel_id("200")
        .live_message_id(Some("555".to_string()))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.upsert(100, 300).await?;

    assert_eq!(config.channel_id, "300");
    assert!(config.live_message_id.is_none());

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
