/// Explore API Handlers
///
/// HTTP endpoints turning a trending post list into the explore grid plan
use actix_web::{web, HttpResponse};
use explore_layout::{ExplorePost, LayoutPlan, Tile, ViewportColumns};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::handlers::ExploreState;
use crate::metrics::layout as layout_metrics;

/// Body for POST /api/v1/explore/layout
#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    #[serde(default)]
    pub posts: Vec<ExplorePost>,

    /// Explicit column count (1, 2 or 3). Takes precedence over `viewport_width`.
    pub columns: Option<u8>,

    /// Viewport width in pixels, mapped through the breakpoint table
    pub viewport_width: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LayoutResponse<'a> {
    Ready {
        columns: u8,
        count: usize,
        tiles: Vec<Tile<'a>>,
    },
    Empty {
        columns: u8,
        message: &'static str,
    },
}

/// Query parameters for GET /api/v1/explore/columns
#[derive(Debug, Deserialize)]
pub struct ColumnsQuery {
    pub width: u32,
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub width: u32,
    pub columns: u8,
}

fn resolve_columns(state: &ExploreState, req: &LayoutRequest) -> Result<ViewportColumns> {
    match (req.columns, req.viewport_width) {
        (Some(columns), _) => Ok(ViewportColumns::try_from(columns)?),
        (None, Some(width)) => Ok(state.breakpoints.columns_for_width(width)),
        (None, None) => Ok(ViewportColumns::default()),
    }
}

/// POST /api/v1/explore/layout
///
/// Group posts into hero, pairs, solos and discussions
pub async fn plan_layout(
    state: web::Data<ExploreState>,
    req: web::Json<LayoutRequest>,
) -> Result<HttpResponse> {
    if req.posts.len() > state.max_posts {
        warn!(
            post_count = req.posts.len(),
            max_posts = state.max_posts,
            "Explore layout request rejected: too many posts"
        );
        layout_metrics::record_request("rejected");
        return Err(AppError::ValidationError(format!(
            "Too many posts: {} (max {})",
            req.posts.len(),
            state.max_posts
        )));
    }

    let columns = match resolve_columns(&state, &req) {
        Ok(columns) => columns,
        Err(e) => {
            layout_metrics::record_request("rejected");
            return Err(e);
        }
    };

    let started = Instant::now();
    let plan = state.engine.plan(&req.posts, columns);
    layout_metrics::record_duration(started.elapsed());

    let response = match plan {
        LayoutPlan::NoPosts => {
            debug!(columns = columns.count(), "Explore layout has no posts");
            layout_metrics::record_request("empty");
            LayoutResponse::Empty {
                columns: columns.count(),
                message: LayoutPlan::EMPTY_MESSAGE,
            }
        }
        LayoutPlan::Tiles(tiles) => {
            info!(
                post_count = req.posts.len(),
                tile_count = tiles.len(),
                columns = columns.count(),
                "Explore layout planned"
            );
            layout_metrics::record_request("ready");
            layout_metrics::record_tiles(&tiles);
            LayoutResponse::Ready {
                columns: columns.count(),
                count: tiles.len(),
                tiles,
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/explore/columns?width=<px>
pub async fn get_columns(
    state: web::Data<ExploreState>,
    query: web::Query<ColumnsQuery>,
) -> Result<HttpResponse> {
    let columns = state.breakpoints.columns_for_width(query.width);

    Ok(HttpResponse::Ok().json(ColumnsResponse {
        width: query.width,
        columns: columns.count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(columns: Option<u8>, viewport_width: Option<u32>) -> LayoutRequest {
        LayoutRequest {
            posts: Vec::new(),
            columns,
            viewport_width,
        }
    }

    #[test]
    fn test_resolve_columns_prefers_explicit_count() {
        let state = ExploreState::default();
        let columns = resolve_columns(&state, &request(Some(1), Some(2000))).unwrap();
        assert_eq!(columns, ViewportColumns::One);
    }

    #[test]
    fn test_resolve_columns_from_width() {
        let state = ExploreState::default();
        assert_eq!(
            resolve_columns(&state, &request(None, Some(800))).unwrap(),
            ViewportColumns::Two
        );
        assert_eq!(
            resolve_columns(&state, &request(None, None)).unwrap(),
            ViewportColumns::Three
        );
    }

    #[test]
    fn test_resolve_columns_rejects_out_of_range() {
        let state = ExploreState::default();
        assert!(matches!(
            resolve_columns(&state, &request(Some(4), None)),
            Err(AppError::ValidationError(_))
        ));
    }
}
