// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;

use log::info;
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::conversions::{clear_conversions, list_conversions, RecentQuery};
use crate::handlers::convert::post_convert;
use crate::handlers::currencies::list_currencies;
use crate::handlers::error::{ApiError, ApiErrorKind};
use crate::handlers::history::{get_analytics, get_history, HistoryQuery};
use crate::handlers::rates::get_rates;
use crate::handlers::session::{get_session, set_pair};
use crate::services::store::SessionStore;

// Recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        let code = match api_error.kind {
            ApiErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (code, api_error.message.clone())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid query string".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(
    store: Arc<SessionStore>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());

    let currencies_route = warp::path!("api" / "v1" / "currencies")
        .and(warp::get())
        .and_then(list_currencies);

    let rates_route = warp::path!("api" / "v1" / "rates" / String)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_rates);

    let convert_route = warp::path!("api" / "v1" / "convert")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(post_convert);

    let history_route = warp::path!("api" / "v1" / "history" / String / String)
        .and(warp::get())
        .and(warp::query::<HistoryQuery>())
        .and(store_filter.clone())
        .and_then(get_history);

    let analytics_route = warp::path!("api" / "v1" / "analytics" / String / String)
        .and(warp::get())
        .and(warp::query::<HistoryQuery>())
        .and(store_filter.clone())
        .and_then(get_analytics);

    let conversions_route = warp::path!("api" / "v1" / "conversions")
        .and(warp::get())
        .and(warp::query::<RecentQuery>())
        .and(store_filter.clone())
        .and_then(list_conversions);

    let clear_conversions_route = warp::path!("api" / "v1" / "conversions")
        .and(warp::delete())
        .and(store_filter.clone())
        .and_then(clear_conversions);

    let session_route = warp::path!("api" / "v1" / "session")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_session);

    let pair_route = warp::path!("api" / "v1" / "session" / "pair")
        .and(warp::put())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(set_pair);

    info!("All routes configured successfully.");

    currencies_route
        .or(rates_route)
        .or(convert_route)
        .or(history_route)
        .or(analytics_route)
        .or(conversions_route)
        .or(clear_conversions_route)
        .or(session_route)
        .or(pair_route)
        .recover(handle_rejection)
}
