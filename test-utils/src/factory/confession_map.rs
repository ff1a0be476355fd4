//! Confession map factory for creating index to message rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test confession map rows.
///
/// # Example
///
/// ```rust,ignore
/// // A legacy row written before kind and content were stored
/// let row = ConfessionMapFactory::new(&db)
///     .guild_id("100")
///     .index(3)
///     .kind(None)
///     .without_content()
///     .build()
///     .await?;
/// ```
pub struct ConfessionMapFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    index: i64,
    channel_id: String,
    message_id: String,
    kind: Option<String>,
    content: Option<String>,
}

impl<'a> ConfessionMapFactory<'a> {
    /// Creates a new ConfessionMapFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, message_id: unique generated IDs
    /// - index: `1`
    /// - kind: `"original"`
    /// - content: `"Confession {message_id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let message_id = next_id();
        Self {
            db,
            guild_id: next_id().to_string(),
            index: 1,
            channel_id: next_id().to_string(),
            message_id: message_id.to_string(),
            kind: Some("original".to_string()),
            content: Some(format!("Confession {}", message_id)),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the stored kind; `None` models a row written before kinds were stored.
    pub fn kind(mut self, kind: Option<&str>) -> Self {
        self.kind = kind.map(str::to_string);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Clears the stored content, modelling a row written before content was stored.
    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    pub async fn build(self) -> Result<entity::confession_map::Model, DbErr> {
        entity::confession_map::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            confession_index: ActiveValue::Set(self.index),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an original confession row for `guild_id` with the given index.
pub async fn create_confession(
    db: &DatabaseConnection,
    guild_id: &str,
    index: i64,
) -> Result<entity::confession_map::Model, DbErr> {
    ConfessionMapFactory::new(db)
        .guild_id(guild_id)
        .index(index)
        .build()
        .await
}
