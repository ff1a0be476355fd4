use super::*;

/// Tests recording a newly posted reply.
///
/// Expected: Ok with kind and content stored
#[tokio::test]
async fn saves_reply_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConfessionMap)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConfessionMapRepository::new(db);
    let row = repo
        .save(SaveConfessionParam {
            guild_id: 100,
            index: 4,
            channel_id: 300,
            message_id: 400,
            kind: ConfessionKind::Reply,
            content: "me too".to_string(),
        })
        .await?;

    assert_eq!(row.confession_index, 4);
    assert_eq!(row.channel_id, "300");
    assert_eq!(row.message_id, "400");
    assert_eq!(row.kind.as_deref(), Some("reply"));
    assert_eq!(row.content.as_deref(), Some("me too"));

    Ok(())
}

/// Tests re-saving an index that was already posted.
///
/// An admin counter reset makes an index be handed out twice; the newest posting wins.
///
/// Expected: Ok with one row pointing at the new message
#[tokio::test]
async fn overwrites_existing_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConfessionMap)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::confession_map::ConfessionMapFactory::new(db)
        .guild_id("100")
        .index(1)
        .message_id("10")
        .build()
        .await?;

    let repo = ConfessionMapRepository::new(db);
    repo.save(SaveConfessionParam {
        guild_id: 100,
        index: 1,
        channel_id: 300,
        message_id: 20,
        kind: ConfessionKind::Original,
        content: "second".to_string(),
    })
    .await?;

    let row = repo.find_by_index(100, 1).await?.unwrap();
    assert_eq!(row.message_id, "20");
    assert_eq!(row.content.as_deref(), Some("second"));
    assert_eq!(repo.count_by_guild(100).await?, 1);

    Ok(())
}
