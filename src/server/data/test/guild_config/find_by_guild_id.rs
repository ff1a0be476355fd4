use super::*;

/// Tests finding the config of a configured guild.
///
/// Expected: Ok(Some) with the stored channel
#[tokio::test]
async fn finds_configured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guild_config(db).await?;
    let guild_id: u64 = created.guild_id.parse().unwrap();

    let repo = GuildConfigRepository::new(db);
    let found = repo.find_by_guild_id(guild_id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that configs of other guilds are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let found = repo.find_by_guild_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
