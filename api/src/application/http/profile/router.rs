use super::handlers::{
    delete_profile::{__path_delete_profile, delete_profile},
    get_profile::{__path_get_profile, get_profile},
    parse_profile::{__path_parse_profile, parse_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_profile, get_profile, delete_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/profile", state.args.server.root_path),
        post(parse_profile).get(get_profile).delete(delete_profile),
    )
}
