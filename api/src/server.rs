use std::sync::Arc;

use axum::{
    Router,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
};
use roster_common::views::ApiErrorResponse;
use roster_db::storage::Storage;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::{
    ToSchema,
    openapi::{Info, License, OpenApi, RefOr, path::Operation},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{config::RosterApiConfig, context::ApiContext, handlers};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn make(cfg: RosterApiConfig, store: Arc<dyn Storage>) -> (Router, OpenApi) {
    let context = ApiContext::new(cfg.clone(), store);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                // Log the request ID as generated
                let request_id = req.headers().get(REQUEST_ID_HEADER);
                let span = info_span!(
                    "http_request",
                    method = req.method().to_string(),
                    request_id = Option::<&str>::None,
                    path = Option::<&str>::None,
                );

                if let Some(request_id) = request_id {
                    span.record("request_id", request_id.to_str().unwrap());
                };

                if let Some(path) = req.extensions().get::<MatchedPath>() {
                    span.record("path", path.as_str())
                } else {
                    span.record("path", req.uri().path())
                };

                span
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_credentials(true)
                .allow_origin(cfg.public_url.parse::<HeaderValue>().unwrap()),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id));

    let openapi = OpenApi::builder()
        .info(
            Info::builder()
                .title("Roster API Reference")
                .version(env!("CARGO_PKG_VERSION"))
                .license(Some(
                    License::builder()
                        .name("Apache 2.0 License")
                        .identifier(Some(env!("CARGO_PKG_LICENSE")))
                        .build(),
                )),
        )
        .build();

    let (r, mut a) = OpenApiRouter::with_openapi(openapi)
        .routes(routes!(
            handlers::users::list_users,
            handlers::users::create_user,
            handlers::users::modify_user
        ))
        .routes(routes!(
            handlers::users::get_user,
            handlers::users::delete_user
        ))
        .route("/health", get(handlers::health_check))
        .layer(middleware)
        .with_state(context)
        .split_for_parts();

    a.paths.paths.iter_mut().for_each(|(_path, item)| {
        apply_default_errors(&mut item.get);
        apply_default_errors(&mut item.post);
        apply_default_errors(&mut item.patch);
        apply_default_errors(&mut item.put);
        apply_default_errors(&mut item.delete);
        apply_default_errors(&mut item.trace);
        apply_default_errors(&mut item.head);
        apply_default_errors(&mut item.options);
    });

    (r, a)
}

fn apply_default_errors(item: &mut Option<Operation>) {
    if let Some(item) = item {
        item.responses.responses.insert(
            "500".into(),
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Internal server error")
                    .ref_location_from_schema_name(ApiErrorResponse::name())
                    .build(),
            ),
        );
    }
}
