use actix_web::web;
use explore_layout::{Breakpoints, TileGroupingEngine};

use crate::config::ExploreConfig;
use crate::error::AppError;

pub mod explore;
pub mod health;

pub use explore::{get_columns, plan_layout};
pub use health::health_check;

/// Max JSON body accepted by the layout endpoint
const JSON_LIMIT_BYTES: usize = 4 * 1024 * 1024;

/// Shared state for explore handlers
#[derive(Debug, Clone)]
pub struct ExploreState {
    pub engine: TileGroupingEngine,
    pub breakpoints: Breakpoints,
    pub max_posts: usize,
}

impl ExploreState {
    pub fn from_config(config: &ExploreConfig) -> anyhow::Result<Self> {
        Ok(Self {
            engine: config.engine(),
            breakpoints: config.breakpoints()?,
            max_posts: config.max_posts,
        })
    }
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            engine: TileGroupingEngine::default(),
            breakpoints: Breakpoints::default(),
            max_posts: 500,
        }
    }
}

/// Register explore routes and extractor configs
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(|err, _req| AppError::from(err).into()),
    )
    .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::from(err).into()))
    .route("/api/v1/health", web::get().to(health_check))
    .service(
        web::scope("/api/v1/explore")
            .route("/layout", web::post().to(plan_layout))
            .route("/columns", web::get().to(get_columns)),
    );
}
