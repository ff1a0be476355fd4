use crate::server::data::guild_counter::GuildCounterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod allocate_next;
mod set_next_index;
