use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use roster_common::{
    params::{CreateUserParams, ModifyUserParams},
    views::{ApiErrorResponse, Link, User, UserEntity},
};
use roster_db::models::{NewUser, UserChanges};

use crate::{context::ApiContext, error::ApiError};

/// Relation name of the link from a single user back to the collection.
const REL_ALL_USERS: &str = "all-users";

#[utoipa::path(
    get,
    path = "/users",
    tags = ["users"],
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
    )
)]
pub async fn list_users(State(ctx): State<ApiContext>) -> Result<Json<Vec<User>>, ApiError> {
    let users = ctx.store.list().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tags = ["users"],
    responses(
        (status = 200, description = "User details", body = UserEntity),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
pub async fn get_user(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<UserEntity>, ApiError> {
    let user = ctx.store.get(id).await?.ok_or(ApiError::not_found(id))?;

    Ok(Json(UserEntity {
        user: user.into(),
        links: vec![Link {
            rel: REL_ALL_USERS.into(),
            href: ctx.config.users_url(),
        }],
    }))
}

#[utoipa::path(
    post,
    path = "/users",
    tags = ["users"],
    request_body = CreateUserParams,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Validation failure", body = ApiErrorResponse),
    )
)]
pub async fn create_user(
    State(ctx): State<ApiContext>,
    Json(params): Json<CreateUserParams>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), ApiError> {
    params.validate()?;

    let created = ctx
        .store
        .create(NewUser {
            name: params.name,
            email: params.email,
        })
        .await?;

    // Empty body; the new resource is advertised through Location alone.
    let location = format!("/users/{}", created.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    put,
    path = "/users",
    tags = ["users"],
    request_body = ModifyUserParams,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
pub async fn modify_user(
    State(ctx): State<ApiContext>,
    Json(params): Json<ModifyUserParams>,
) -> Result<Json<User>, ApiError> {
    let id = params.id;

    let updated = ctx
        .store
        .update(UserChanges {
            id,
            name: params.name,
            email: params.email,
        })
        .await?
        .ok_or(ApiError::not_found(id))?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tags = ["users"],
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
pub async fn delete_user(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ctx.store.delete(id).await?.ok_or(ApiError::not_found(id))?;

    Ok(StatusCode::NO_CONTENT)
}
