//! Builds navigation for a small ASCII level and prints what an agent sees.
//!
//! Run: cargo run --bin ascii-level [-- air]
//! Set `RUST_LOG=ledge_nav=debug` for build and search statistics.

use ledge_core::{Point, TileFlagTable, TileFlags, TileLayer};
use ledge_nav::{NavConfig, NavLinkType, Navigator, PathfindTerrain};
use tracing_subscriber::EnvFilter;

const LEVEL: [&str; 12] = [
    "........................",
    "..................#####.",
    "........................",
    "...====.................",
    ".............###........",
    "........................",
    "#######.......====......",
    "........................",
    "..........#.............",
    "........................",
    "#####..############.....",
    "........................",
];

const TERRAIN: u32 = 1;
const ONE_WAY: u32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let terrain = match std::env::args().nth(1).as_deref() {
        Some("air") => PathfindTerrain::Air,
        _ => PathfindTerrain::Ground,
    };

    let layer = TileLayer::from_rows("ground", &LEVEL, |c| match c {
        '#' => TERRAIN,
        '=' => ONE_WAY,
        _ => 0,
    });
    let tiles = TileFlagTable::new()
        .with(TERRAIN, TileFlags::TERRAIN)
        .with(ONE_WAY, TileFlags::WALKABLE);

    let mut nav = match Navigator::build(&[layer], &tiles, &NavConfig::default()) {
        Ok(nav) => nav,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let grid = nav.grid();

    println!("{}", grid.render());
    println!("{}", grid.stats());

    let start = Point::new(0, 9);
    let goal = Point::new(19, 0);
    let Some(route) = nav.find_route(start, goal, terrain) else {
        println!("no {terrain:?} path from {start} to {goal}");
        return;
    };
    log::info!("{} steps from {start} to {goal}", route.len());

    let mut canvas: Vec<Vec<char>> = grid.render().lines().map(|l| l.chars().collect()).collect();
    for step in &route {
        let glyph = match step.kind {
            NavLinkType::Walk => '*',
            NavLinkType::Fall => 'v',
            NavLinkType::Jump => '^',
            NavLinkType::Unknown => '+',
        };
        canvas[step.pos.y as usize][step.pos.x as usize] = glyph;
    }
    canvas[start.y as usize][start.x as usize] = 'S';
    println!();
    for row in canvas {
        println!("{}", row.into_iter().collect::<String>());
    }

    let waypoints = nav.path_to_world(&route.iter().map(|s| s.pos).collect::<Vec<_>>());
    for (step, w) in route.iter().zip(waypoints) {
        println!("{:?} to {} (world {}), cost {}", step.kind, step.pos, w, step.cost);
    }
}
