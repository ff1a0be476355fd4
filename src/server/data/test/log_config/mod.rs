use crate::server::{
    data::log_config::LogConfigRepository, model::log_config::UpsertLogConfigParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
