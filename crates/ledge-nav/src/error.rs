use thiserror::Error;

/// Errors raised while building a navigation grid.
///
/// Queries against a built grid never fail; they answer `None` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no tile layers to build navigation from")]
    NoLayers,

    #[error("layer `{name}` is {found:?} tiles, expected {expected:?}")]
    LayerSizeMismatch {
        name: String,
        expected: (i32, i32),
        found: (i32, i32),
    },

    #[error("layer `{name}` has {found} tile ids, expected {expected}")]
    LayerDataLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid jump range {min}..={max}")]
    InvalidJumpRange { min: i32, max: i32 },

    #[error("invalid tile size {width}x{height}")]
    InvalidTileSize { width: i32, height: i32 },

    #[error("invalid snap radius {0}")]
    InvalidSnapRadius(i32),

    #[error("{setting} = {value} exceeds the {limit}-tile map extent")]
    ExceedsMap {
        setting: &'static str,
        value: i32,
        limit: i32,
    },
}
