use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 ACADEMIC PERIODS
        // ========================================
        .route(
            "/api/academic-periods",
            get(handlers::a001_academic_period::list_all),
        )
        .route(
            "/api/academic-periods/:year",
            get(handlers::a001_academic_period::get_by_year)
                .put(handlers::a001_academic_period::save)
                .delete(handlers::a001_academic_period::delete),
        )
        .route(
            "/api/academic-periods/:year/exceptions",
            get(handlers::a001_academic_period::list_exceptions)
                .post(handlers::a001_academic_period::add_exception),
        )
        .route(
            "/api/academic-periods/:year/exceptions/:date",
            axum::routing::delete(handlers::a001_academic_period::delete_exception),
        )
        // ========================================
        // A002 CLUBS / PAGELAS
        // ========================================
        .route(
            "/api/clubs",
            get(handlers::a002_club::list_all).post(handlers::a002_club::create),
        )
        .route("/api/pagelas", post(handlers::a002_club::submit_pagela))
        // ========================================
        // D100 PAGELA CONTROL DASHBOARD
        // ========================================
        .route(
            "/api/d100/current_week",
            get(handlers::d100_pagela_control::get_current_week),
        )
        .route(
            "/api/d100/weekly_control",
            get(handlers::d100_pagela_control::get_weekly_control),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}
