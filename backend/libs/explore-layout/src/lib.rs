//! Explore grid layout for the Stan discover/explore pages
//!
//! This library arranges trending posts into the tiles rendered by the explore grid:
//! - **Hero**: the highest trending post, full width at the top
//! - **Pairs**: adjacent posts whose trending scores are close, rendered side by side
//! - **Solo**: posts with no close neighbour, full or half width depending on the viewport
//! - **Discussions**: always full width, appended after the grid
//!
//! It also carries the optimistic engagement state (likes, stans, poll votes) that views
//! apply locally before the backend confirms them.
//!
//! # Example
//!
//! ```rust
//! use explore_layout::{ExplorePost, PostType, TileGroupingEngine, ViewportColumns};
//!
//! let posts = vec![
//!     ExplorePost::new("1", PostType::Image, 90),
//!     ExplorePost::new("2", PostType::Poll, 85),
//! ];
//!
//! let plan = TileGroupingEngine::default().plan(&posts, ViewportColumns::Three);
//! assert_eq!(plan.len(), 2);
//! ```

pub mod engagement;
pub mod error;
pub mod grouping;
pub mod models;
pub mod viewport;

pub use engagement::{
    EngagementAction, EngagementError, EngagementSnapshot, EngagementState, MutationId,
};
pub use error::LayoutError;
pub use grouping::{TileGroupingEngine, DEFAULT_PAIR_THRESHOLD};
pub use models::{ExplorePost, LayoutPlan, PostType, Tile, TileKind, TileLayout, TilePosition};
pub use viewport::{Breakpoints, ViewportColumns};
