use crate::server::data::user::{CreateUserParams, UpdateUserParams, UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
