use crate::server::{
    data::{
        confession_map::ConfessionMapRepository, guild_config::GuildConfigRepository,
        guild_counter::GuildCounterRepository,
    },
    error::{confession::ConfessionError, AppError},
    model::{
        confession::ConfessionKind,
        platform::{ControlSet, MessageLocation, SendTarget},
        submission::{
            ConfessionRequest, ReplyContext, ReplyReference, ReplyRequest, Submitter,
            ThreadContext,
        },
    },
    service::{
        confession::{artifact, ConfessionService},
        platform::fake::FakePlatform,
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext, factory};


const GUILD: u64 = 100;
const CHANNEL: u64 = 200;
const LOG_GUILD: u64 = 900;
const LOG_CHANNEL: u64 = 901;

async fn setup() -> (TestContext, FakePlatform) {
    let test = TestBuilder::new()
        .with_confession_tables()
        .build()
        .await
        .unwrap();

    (test, FakePlatform::new())
}

/// Configures `CHANNEL` as the confession channel of `GUILD`.
async fn configure(db: &DatabaseConnection, platform: &FakePlatform) -> Result<(), AppError> {
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(GUILD.to_string())
        .channel_id(CHANNEL.to_string())
        .build()
        .await?;
    platform.add_channel(GUILD, CHANNEL).await;

    Ok(())
}

fn submitter() -> Submitter {
    Submitter {
        user_id: 42,
        name: "someone".to_string(),
    }
}

fn confession(content: &str) -> ConfessionRequest {
    ConfessionRequest {
        guild_id: GUILD,
        submitter: submitter(),
        content: content.to_string(),
        attachment_url: None,
        requested_channel_id: None,
    }
}

fn reply(reference: &str, context: ReplyContext, content: &str) -> ReplyRequest {
    ReplyRequest {
        guild_id: GUILD,
        submitter: submitter(),
        content: content.to_string(),
        attachment_url: None,
        reference: ReplyReference::parse(reference).unwrap(),
        context,
    }
}

/// Context of a reply control clicked on a message in the channel.
fn attached_to(location: MessageLocation) -> ReplyContext {
    ReplyContext {
        attached_message: Some(location),
        thread: None,
    }
}
