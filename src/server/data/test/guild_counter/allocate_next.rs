use super::*;
use std::collections::HashSet;

/// Tests the first allocation of a guild that never confessed.
///
/// Expected: Ok(1)
#[tokio::test]
async fn first_allocation_is_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCounterRepository::new(db);

    assert_eq!(repo.allocate_next(100).await?, 1);
    assert_eq!(repo.find_last_index(100).await?, Some(1));

    Ok(())
}

/// Tests that consecutive allocations count up by one.
///
/// Expected: Ok with 1, 2, 3
#[tokio::test]
async fn consecutive_allocations_increase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCounterRepository::new(db);

    let allocated = vec![
        repo.allocate_next(100).await?,
        repo.allocate_next(100).await?,
        repo.allocate_next(100).await?,
    ];

    assert_eq!(allocated, vec![1, 2, 3]);

    Ok(())
}

/// Tests that guilds number independently.
///
/// Expected: Ok with each guild starting from its own counter
#[tokio::test]
async fn guilds_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_counter(db, "200", 41).await?;

    let repo = GuildCounterRepository::new(db);

    assert_eq!(repo.allocate_next(100).await?, 1);
    assert_eq!(repo.allocate_next(200).await?, 42);
    assert_eq!(repo.allocate_next(100).await?, 2);

    Ok(())
}

/// Tests concurrent allocations for the same guild.
///
/// Expected: Ok with every caller receiving a distinct index
#[tokio::test]
async fn concurrent_allocations_are_distinct() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCounterRepository::new(db);

    let (a, b, c, d) = tokio::join!(
        repo.allocate_next(100),
        repo.allocate_next(100),
        repo.allocate_next(100),
        repo.allocate_next(100),
    );

    let allocated: HashSet<i64> = [a?, b?, c?, d?].into_iter().collect();
    assert_eq!(allocated, HashSet::from([1, 2, 3, 4]));

    Ok(())
}
