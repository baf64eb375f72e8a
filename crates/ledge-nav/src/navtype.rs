//! Per-cell navigation data: classifications, links and locomotion modes.

use ledge_core::Point;

/// Cost of one orthogonal step.
pub const STEP_COST: i32 = 10;

/// Cost of one diagonal step for airborne agents.
pub const DIAGONAL_COST: i32 = 14;

/// Classification of a single grid cell.
///
/// Surface cells (`Platform` and the three edge kinds) are open cells resting
/// on a supporting tile. A run is a maximal horizontal sequence of surface
/// cells: `Left Platform* Right`, or a single `Solo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavType {
    /// Unclassified or unreachable.
    #[default]
    None,
    /// Solid ground.
    Terrain,
    /// Interior of a run.
    Platform,
    /// Left end of a run.
    Left,
    /// Right end of a run.
    Right,
    /// A run exactly one cell wide.
    Solo,
}

impl NavType {
    #[inline]
    pub fn is_none(self) -> bool {
        self == NavType::None
    }

    /// `Left`, `Right` or `Solo`.
    #[inline]
    pub fn is_edge(self) -> bool {
        matches!(self, NavType::Left | NavType::Right | NavType::Solo)
    }

    /// `Platform` or an edge.
    #[inline]
    pub fn is_surface(self) -> bool {
        self == NavType::Platform || self.is_edge()
    }

    /// Whether a ground agent may walk from a cell of this kind towards
    /// `dir` without leaving its run.
    #[inline]
    pub fn walks_towards(self, dir: Direction) -> bool {
        match (self, dir) {
            (NavType::Terrain | NavType::Platform, _) => true,
            (NavType::Left, Direction::Right) | (NavType::Right, Direction::Left) => true,
            _ => false,
        }
    }

    /// Single-character rendering used by debug dumps.
    pub fn glyph(self) -> char {
        match self {
            NavType::None => '.',
            NavType::Terrain => '#',
            NavType::Platform => '=',
            NavType::Left => '<',
            NavType::Right => '>',
            NavType::Solo => 'o',
        }
    }
}

/// How a link is traversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavLinkType {
    Walk,
    Fall,
    Jump,
    /// Not produced by the link builder. Also tags the first node of a
    /// route and the free moves of airborne agents.
    #[default]
    Unknown,
}

/// A directed edge from the owning [`NavPoint`] to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub destination: Point,
    pub cost: i32,
    pub movement: NavLinkType,
}

impl NavLink {
    pub fn new(destination: Point, cost: i32, movement: NavLinkType) -> Self {
        Self {
            destination,
            cost: cost.max(0),
            movement,
        }
    }

    pub fn walk(destination: Point) -> Self {
        Self::new(destination, STEP_COST, NavLinkType::Walk)
    }
}

impl Default for NavLink {
    fn default() -> Self {
        Self::new(Point::ZERO, STEP_COST, NavLinkType::Unknown)
    }
}

/// One cell of the navigation grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPoint {
    pub kind: NavType,
    /// Outgoing links in insertion order.
    pub links: Vec<NavLink>,
}

/// Locomotion capability of an agent.
///
/// `Water` and `Lava` have no dedicated link kinds and search exactly like
/// `Ground`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathfindTerrain {
    #[default]
    Ground,
    Air,
    Water,
    Lava,
}

impl PathfindTerrain {
    /// Whether links of kind `movement` may be used in this mode.
    pub fn allows(self, movement: NavLinkType) -> bool {
        match self {
            PathfindTerrain::Air => true,
            PathfindTerrain::Ground | PathfindTerrain::Water | PathfindTerrain::Lava => matches!(
                movement,
                NavLinkType::Walk | NavLinkType::Fall | NavLinkType::Jump
            ),
        }
    }

    /// Airborne agents ignore gravity and ledges.
    #[inline]
    pub fn is_airborne(self) -> bool {
        self == PathfindTerrain::Air
    }
}

/// Horizontal direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta of one step.
    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The edge kind that bounds a run when travelling this way.
    #[inline]
    pub fn boundary(self) -> NavType {
        match self {
            Direction::Left => NavType::Left,
            Direction::Right => NavType::Right,
        }
    }
}
