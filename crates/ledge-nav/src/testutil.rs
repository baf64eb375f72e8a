//! Fixtures shared by the unit tests.

use ledge_core::{TileFlagTable, TileFlags, TileLayer};

/// `1` is terrain, `2` is a walkable (one-way) tile, `3` has no metadata.
pub(crate) fn table() -> TileFlagTable {
    TileFlagTable::new()
        .with(1, TileFlags::TERRAIN)
        .with(2, TileFlags::WALKABLE)
}

/// Layer from ASCII rows: `#` terrain, `=` walkable, `x` unknown tile,
/// anything else empty.
pub(crate) fn layer(rows: &[&str]) -> TileLayer {
    TileLayer::from_rows("test", rows, |c| match c {
        '#' => 1,
        '=' => 2,
        'x' => 3,
        _ => 0,
    })
}
