//! playground — smallest demo for the nightward simulation core.
//!
//! Runs a handful of in-game days on a small map with one building, a
//! player that walks a square patrol route, two followers, and however
//! many pursuers the day/night spawn cycle produces. Scale comment: swap
//! `MAP_SIZE_CELLS` and a real tile asset for a production-sized map.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use nightward_agent::{AgentStore, FollowerRole};
use nightward_core::{PlayerInput, Point, Tick, WorldConfig};
use nightward_map::map::MapRecord;
use nightward_map::{BuildingType, Map};
use nightward_output::writer::OutputWriter;
use nightward_output::{CsvWriter, WorldOutputObserver};
use nightward_sim::{World, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const MAP_SIZE_CELLS: usize = 40;
const CELL_SIZE: i32 = 10;
const TICK_DT: f32 = 1.0 / 30.0;
const SIM_DAYS: f32 = 2.0;
const PATROL_LEG_SECS: f32 = 6.0;

// ── Map ───────────────────────────────────────────────────────────────────

/// One rectangular wall near the center of an otherwise open field.
fn build_map() -> Result<Map> {
    let mut matrix = vec![vec![0; MAP_SIZE_CELLS]; MAP_SIZE_CELLS];
    for row in matrix.iter_mut().skip(18).take(4) {
        for cell in row.iter_mut().skip(18).take(4) {
            *cell = 1;
        }
    }

    let mut building_types = std::collections::HashMap::new();
    building_types.insert(1, BuildingType { name: "shed".into(), color_hint: None, walkable: false });

    let record = MapRecord {
        name: "playground".into(),
        width: MAP_SIZE_CELLS as i32,
        height: MAP_SIZE_CELLS as i32,
        cell_size: CELL_SIZE,
        matrix,
        building_types,
    };
    Ok(Map::compile(record)?)
}

// ── Patrol route ──────────────────────────────────────────────────────────

/// Four-leg square patrol: right, down, left, up, then repeat.
fn patrol_input(elapsed: f32) -> PlayerInput {
    let leg = ((elapsed / PATROL_LEG_SECS) as u64) % 4;
    let (move_x, move_y) = match leg {
        0 => (1.0, 0.0),
        1 => (0.0, 1.0),
        2 => (-1.0, 0.0),
        _ => (0.0, -1.0),
    };
    PlayerInput { move_x, move_y, fire: false }
}

// ── Observer wrapper to count rows ────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner: WorldOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: WorldOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> WorldObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, day: u32, time_in_day: f32, is_day: bool, agents: &AgentStore) {
        self.summary_rows += 1;
        self.snapshot_rows += agents.iter().count();
        self.inner.on_tick_end(tick, day, time_in_day, is_day, agents);
    }
}

// ── main ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== playground — nightward simulation core ===");
    println!("Seed: {SEED}  |  Days: {SIM_DAYS}");
    println!();

    // 1. Build the map.
    let map = build_map()?;
    println!("Map: {} x {} world units, {} building(s)", map.width, map.height, map.buildings.len());

    // 2. Build the world.
    let config = WorldConfig::default();
    let mut world = World::new(map, SEED, config.clone())?;

    // 3. Populate: one player, two followers.
    let player_id = world.spawn_player(Point::new(50.0, 50.0));
    let guard_id = world.spawn_follower(FollowerRole::Guard, Point::new(40.0, 50.0));
    let medic_id = world.spawn_follower(FollowerRole::Medic, Point::new(60.0, 50.0));
    println!("Spawned player {player_id:?}, guard {guard_id:?}, medic {medic_id:?}");
    println!();

    // 4. Set up output.
    std::fs::create_dir_all("output/playground")?;
    let writer = CsvWriter::new(Path::new("output/playground"))?;
    let inner_obs = WorldOutputObserver::new(writer);
    let mut obs = CountingObserver::new(inner_obs);

    // 5. Run.
    let total_ticks = ((SIM_DAYS * config.day_duration) / TICK_DT) as u64;
    println!("Running {total_ticks} ticks ({TICK_DT:.4} s each)...");
    let t0 = Instant::now();
    let mut elapsed = 0.0f32;
    for _ in 0..total_ticks {
        let input = patrol_input(elapsed);
        world.tick(TICK_DT, input, &mut obs);
        elapsed += TICK_DT;
    }
    let wall_clock = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    obs.inner.finish()?;

    // 6. Summary.
    println!("Simulation complete in {:.3} s", wall_clock.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    let view = world.snapshot();
    println!("Final state: day {} ({}), time_in_day {:.1}", view.day, if view.is_day { "day" } else { "night" }, view.time_in_day);
    println!("{:<10} {:<18} {:<10} {:<8}", "Agent", "Kind", "HP", "State");
    println!("{}", "-".repeat(48));
    for agent in &view.agents {
        println!("{:<10} {:<18?} {:<10.1} {:<8?}", agent.id.0, agent.kind, agent.hp, agent.state);
    }

    Ok(())
}
