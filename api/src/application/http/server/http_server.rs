use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use cartwise_core::{application::create_service, domain::common::CartwiseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info_span, warn};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    cart::router::cart_routes, health::health_routes, mealplan::router::mealplan_routes,
    order::router::order_routes, pickup::router::pickup_routes, profile::router::profile_routes,
    scan::router::scan_routes, server::app_state::AppState, server::openapi::build_openapi,
    vision::router::vision_routes,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config: CartwiseConfig = CartwiseConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;
    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin: {origin}");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = build_openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(profile_routes(state.clone()))
        .merge(cart_routes(state.clone()))
        .merge(pickup_routes(state.clone()))
        .merge(order_routes(state.clone()))
        .merge(scan_routes(state.clone()))
        .merge(mealplan_routes(state.clone()))
        .merge(vision_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
