use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::models::TileLayout;

/// Number of grid columns the current viewport can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ViewportColumns {
    One,
    Two,
    Three,
}

impl ViewportColumns {
    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Width of a post that could not be paired with its neighbour.
    pub fn solo_layout(self) -> TileLayout {
        match self {
            Self::One => TileLayout::Full,
            Self::Two | Self::Three => TileLayout::Half,
        }
    }
}

impl Default for ViewportColumns {
    fn default() -> Self {
        Self::Three
    }
}

impl TryFrom<u8> for ViewportColumns {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(LayoutError::InvalidColumns(other)),
        }
    }
}

impl From<ViewportColumns> for u8 {
    fn from(columns: ViewportColumns) -> Self {
        columns.count()
    }
}

/// Pixel breakpoints mapping a viewport width to a column count.
///
/// Widths below `small` get one column, widths below `large` get two,
/// anything wider gets three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    small: u32,
    large: u32,
}

impl Breakpoints {
    pub const DEFAULT_SMALL: u32 = 640;
    pub const DEFAULT_LARGE: u32 = 1024;

    pub fn new(small: u32, large: u32) -> Result<Self, LayoutError> {
        if small >= large {
            return Err(LayoutError::InvalidBreakpoints { small, large });
        }
        Ok(Self { small, large })
    }

    pub fn small(&self) -> u32 {
        self.small
    }

    pub fn large(&self) -> u32 {
        self.large
    }

    pub fn columns_for_width(&self, width: u32) -> ViewportColumns {
        if width < self.small {
            ViewportColumns::One
        } else if width < self.large {
            ViewportColumns::Two
        } else {
            ViewportColumns::Three
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: Self::DEFAULT_SMALL,
            large: Self::DEFAULT_LARGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoint_table() {
        let bp = Breakpoints::default();
        assert_eq!(bp.columns_for_width(0), ViewportColumns::One);
        assert_eq!(bp.columns_for_width(639), ViewportColumns::One);
        assert_eq!(bp.columns_for_width(640), ViewportColumns::Two);
        assert_eq!(bp.columns_for_width(1023), ViewportColumns::Two);
        assert_eq!(bp.columns_for_width(1024), ViewportColumns::Three);
        assert_eq!(bp.columns_for_width(2560), ViewportColumns::Three);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints::new(480, 900).unwrap();
        assert_eq!(bp.columns_for_width(479), ViewportColumns::One);
        assert_eq!(bp.columns_for_width(480), ViewportColumns::Two);
        assert_eq!(bp.columns_for_width(900), ViewportColumns::Three);
    }

    #[test]
    fn test_inverted_breakpoints_rejected() {
        assert_eq!(
            Breakpoints::new(1024, 640),
            Err(LayoutError::InvalidBreakpoints {
                small: 1024,
                large: 640
            })
        );
        assert!(Breakpoints::new(800, 800).is_err());
    }

    #[test]
    fn test_columns_from_u8() {
        assert_eq!(ViewportColumns::try_from(1), Ok(ViewportColumns::One));
        assert_eq!(ViewportColumns::try_from(3), Ok(ViewportColumns::Three));
        assert_eq!(
            ViewportColumns::try_from(0),
            Err(LayoutError::InvalidColumns(0))
        );
        assert_eq!(
            ViewportColumns::try_from(4),
            Err(LayoutError::InvalidColumns(4))
        );
    }

    #[test]
    fn test_solo_layout_depends_on_columns() {
        assert_eq!(ViewportColumns::One.solo_layout(), TileLayout::Full);
        assert_eq!(ViewportColumns::Two.solo_layout(), TileLayout::Half);
        assert_eq!(ViewportColumns::Three.solo_layout(), TileLayout::Half);
    }

    #[test]
    fn test_columns_serde_as_number() {
        let cols: ViewportColumns = serde_json::from_str("2").unwrap();
        assert_eq!(cols, ViewportColumns::Two);
        assert_eq!(serde_json::to_string(&ViewportColumns::One).unwrap(), "1");
        assert!(serde_json::from_str::<ViewportColumns>("5").is_err());
    }
}
