use super::*;

/// Tests seeding the counter of a guild that never confessed.
///
/// Expected: Ok with the next allocation returning the seeded value
#[tokio::test]
async fn seeds_counter_for_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCounterRepository::new(db);
    let counter = repo.set_next_index(100, 50).await?;

    assert_eq!(counter.last_index, 49);
    assert_eq!(repo.allocate_next(100).await?, 50);

    Ok(())
}

/// Tests moving an existing counter backwards.
///
/// Expected: Ok with allocation restarting from the new value
#[tokio::test]
async fn resets_existing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_counter(db, "100", 120).await?;

    let repo = GuildCounterRepository::new(db);
    repo.set_next_index(100, 1).await?;

    assert_eq!(repo.find_last_index(100).await?, Some(0));
    assert_eq!(repo.allocate_next(100).await?, 1);

    Ok(())
}
