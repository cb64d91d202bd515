use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    search::{MAX_QUERY_LEN, filter_organizations},
    state::AppState,
};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub name: String,
    pub url: String,
    pub detail_path: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub loaded: bool,
    pub results: Vec<SearchHit>,
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.q.len() > MAX_QUERY_LEN {
        return Err(AppError::QueryTooLong);
    }

    state
        .search_debounce
        .call(state.tracker.search_event(&params.q));

    let response = match state.loader.get() {
        None => SearchResponse {
            loaded: false,
            results: Vec::new(),
        },
        Some(organizations) => SearchResponse {
            loaded: true,
            results: filter_organizations(organizations, &params.q)
                .into_iter()
                .map(|organization| SearchHit {
                    name: organization.name.clone(),
                    url: organization.url.clone(),
                    detail_path: organization.detail_path(),
                })
                .collect(),
        },
    };

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct RootParams {
    pub company: Option<String>,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub loaded: bool,
    pub organizations: usize,
}

/// Status probe, doubling as the `?company=` deep-link redirect into the
/// per-organization detail route.
pub async fn root_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RootParams>,
) -> Result<Response, AppError> {
    if let Some(company) = params.company {
        if !directory::is_plausible_domain(&company) {
            return Err(AppError::MalformedDomain);
        }

        return Ok(Redirect::permanent(&format!("/d/{company}/")).into_response());
    }

    let organizations = state.loader.get();

    Ok(Json(StatusResponse {
        loaded: organizations.is_some(),
        organizations: organizations.map_or(0, <[_]>::len),
    })
    .into_response())
}
