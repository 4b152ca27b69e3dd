use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content type of a post. Fixed for the lifetime of the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Image,
    Video,
    Discussion,
    Poll,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Discussion => "discussion",
            Self::Poll => "poll",
        }
    }

    pub fn is_discussion(&self) -> bool {
        matches!(self, Self::Discussion)
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A post as delivered by the explore feed.
///
/// Only `id`, `type` and `trendingScore` drive the layout. Every other field
/// (content, image, title, poll options, counts...) is kept in `payload` and
/// serialized back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorePost {
    pub id: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    #[serde(alias = "trending_score")]
    pub trending_score: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ExplorePost {
    pub fn new(id: impl Into<String>, post_type: PostType, trending_score: i64) -> Self {
        Self {
            id: id.into(),
            post_type,
            trending_score,
            payload: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileLayout {
    Full,
    Half,
}

impl TileLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilePosition {
    Left,
    Right,
    Center,
}

/// Why a post ended up where it is in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Hero,
    Pair,
    Solo,
    Discussion,
}

impl TileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Pair => "pair",
            Self::Solo => "solo",
            Self::Discussion => "discussion",
        }
    }
}

/// One render instruction: a post plus where and how wide to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile<'a> {
    pub post: &'a ExplorePost,
    pub layout: TileLayout,
    pub position: TilePosition,
    pub kind: TileKind,
}

impl<'a> Tile<'a> {
    pub(crate) fn hero(post: &'a ExplorePost) -> Self {
        Self {
            post,
            layout: TileLayout::Full,
            position: TilePosition::Center,
            kind: TileKind::Hero,
        }
    }

    pub(crate) fn left(post: &'a ExplorePost) -> Self {
        Self {
            post,
            layout: TileLayout::Half,
            position: TilePosition::Left,
            kind: TileKind::Pair,
        }
    }

    pub(crate) fn right(post: &'a ExplorePost) -> Self {
        Self {
            post,
            layout: TileLayout::Half,
            position: TilePosition::Right,
            kind: TileKind::Pair,
        }
    }

    pub(crate) fn solo(post: &'a ExplorePost, layout: TileLayout) -> Self {
        Self {
            post,
            layout,
            position: TilePosition::Center,
            kind: TileKind::Solo,
        }
    }

    pub(crate) fn discussion(post: &'a ExplorePost) -> Self {
        Self {
            post,
            layout: TileLayout::Full,
            position: TilePosition::Center,
            kind: TileKind::Discussion,
        }
    }
}

/// Result of grouping a set of posts.
///
/// An empty input is a displayable state of its own ("No posts to display"),
/// distinct from a plan that is still loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutPlan<'a> {
    NoPosts,
    Tiles(Vec<Tile<'a>>),
}

impl<'a> LayoutPlan<'a> {
    pub const EMPTY_MESSAGE: &'static str = "No posts to display";

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoPosts)
    }

    pub fn len(&self) -> usize {
        self.tiles().len()
    }

    pub fn tiles(&self) -> &[Tile<'a>] {
        match self {
            Self::NoPosts => &[],
            Self::Tiles(tiles) => tiles,
        }
    }

    pub fn hero(&self) -> Option<&Tile<'a>> {
        self.tiles().first().filter(|t| t.kind == TileKind::Hero)
    }

    pub fn into_tiles(self) -> Vec<Tile<'a>> {
        match self {
            Self::NoPosts => Vec::new(),
            Self::Tiles(tiles) => tiles,
        }
    }
}
