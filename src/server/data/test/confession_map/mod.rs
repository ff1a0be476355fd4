use crate::server::{
    data::confession_map::ConfessionMapRepository,
    model::confession::{ConfessionKind, SaveConfessionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod save;
