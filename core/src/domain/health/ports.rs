use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::StoreHealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<StoreHealthStatus, CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn readness(&self) -> impl Future<Output = Result<StoreHealthStatus, CoreError>> + Send;
}
