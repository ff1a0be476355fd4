//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message posted by the bot.
///
/// # Arguments
/// - `channel_id` - Channel the message lives in
/// - `message_id` - Discord message ID (snowflake)
/// - `embed` - Optional `(title, description)` of a single rich embed
/// - `thread_id` - Optional ID of a public thread started from the message
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    channel_id: u64,
    message_id: u64,
    embed: Option<(&str, &str)>,
    thread_id: Option<u64>,
) -> Message {
    let embeds = match embed {
        Some((title, description)) => serde_json::json!([{
            "type": "rich",
            "title": title,
            "description": description,
            "color": 0x5865F2,
        }]),
        None => serde_json::json!([]),
    };

    let mut value = serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": "1",
            "username": "confession-bot",
            "discriminator": "0000",
            "global_name": null,
            "avatar": null,
            "bot": true,
        },
        "content": "",
        "timestamp": "2026-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": embeds,
        "pinned": false,
        "type": 0,
        "components": [],
    });

    if let Some(thread_id) = thread_id {
        value["thread"] = serde_json::json!({
            "id": thread_id.to_string(),
            "guild_id": "1",
            "parent_id": channel_id.to_string(),
            "type": 11,
            "name": "Replies",
            "position": 0,
            "nsfw": false,
            "permission_overwrites": [],
            "thread_metadata": {
                "archived": false,
                "auto_archive_duration": 1440,
                "archive_timestamp": "2026-01-01T00:00:00.000000+00:00",
                "locked": false,
            },
        });
    }

    serde_json::from_value(value).expect("Failed to create test message")
}
