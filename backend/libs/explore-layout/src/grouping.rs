use tracing::debug;

use crate::models::{ExplorePost, LayoutPlan, Tile};
use crate::viewport::ViewportColumns;

/// Maximum trending score gap (inclusive) for two posts to share a row.
pub const DEFAULT_PAIR_THRESHOLD: u64 = 10;

/// Tile Grouping Engine - 探索頁排版
///
/// Arranges posts into a hero tile, side-by-side pairs, solo tiles and
/// full-width discussions. The hero is the highest trending post regardless
/// of its type; discussions never take part in pairing.
#[derive(Debug, Clone, Copy)]
pub struct TileGroupingEngine {
    pair_threshold: u64,
}

impl TileGroupingEngine {
    pub fn new(pair_threshold: u64) -> Self {
        Self { pair_threshold }
    }

    pub fn pair_threshold(&self) -> u64 {
        self.pair_threshold
    }

    /// Whether two neighbouring posts are close enough to share a row.
    pub fn pairs_with(&self, a: &ExplorePost, b: &ExplorePost) -> bool {
        a.trending_score.abs_diff(b.trending_score) <= self.pair_threshold
    }

    /// Build the render plan for `posts`.
    ///
    /// The input is not modified. Equal scores keep their input order, so the
    /// same input always yields the same plan.
    pub fn plan<'a>(&self, posts: &'a [ExplorePost], columns: ViewportColumns) -> LayoutPlan<'a> {
        let mut sorted: Vec<&ExplorePost> = posts.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.trending_score.cmp(&a.trending_score));

        let Some((&hero, rest)) = sorted.split_first() else {
            debug!("No posts to lay out");
            return LayoutPlan::NoPosts;
        };

        let (discussions, grid): (Vec<&ExplorePost>, Vec<&ExplorePost>) =
            rest.iter().copied().partition(|p| p.post_type.is_discussion());

        let mut tiles = Vec::with_capacity(posts.len());
        tiles.push(Tile::hero(hero));

        let solo_layout = columns.solo_layout();
        let mut pairs = 0usize;
        let mut i = 0;
        while i < grid.len() {
            match grid.get(i + 1) {
                Some(&next) if self.pairs_with(grid[i], next) => {
                    tiles.push(Tile::left(grid[i]));
                    tiles.push(Tile::right(next));
                    pairs += 1;
                    i += 2;
                }
                _ => {
                    tiles.push(Tile::solo(grid[i], solo_layout));
                    i += 1;
                }
            }
        }

        let discussion_count = discussions.len();
        tiles.extend(discussions.into_iter().map(Tile::discussion));

        debug!(
            hero_id = %hero.id,
            pairs,
            solos = grid.len() - pairs * 2,
            discussions = discussion_count,
            columns = columns.count(),
            "Explore layout planned"
        );

        LayoutPlan::Tiles(tiles)
    }
}

impl Default for TileGroupingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAIR_THRESHOLD)
    }
}
