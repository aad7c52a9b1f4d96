use crate::server::data::turf::{TurfRepository, UpdateTurfParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod filter;
mod update;
