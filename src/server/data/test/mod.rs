use std::time::Duration;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{context::OperationContext, data::Repository, error::store::StoreError};


fn ctx() -> OperationContext {
    OperationContext::background(Duration::from_secs(5))
}
