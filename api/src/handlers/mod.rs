use axum::extract::State;

use crate::{context::ApiContext, error::ApiError};

pub mod users;

pub async fn health_check(State(ctx): State<ApiContext>) -> Result<&'static str, ApiError> {
    ctx.store.ping().await?;
    Ok("Healthy")
}
