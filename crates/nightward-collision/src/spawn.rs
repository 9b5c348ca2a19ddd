//! Rejection-sampling spawn placement, §4.D.

use nightward_core::{AgentId, Point, SimRng};

use crate::collision::CollisionService;

const MAX_ATTEMPTS: u32 = 200;
/// Margin kept clear of the map edge so a spawned agent's bounds never hang
/// off the world.
const EDGE_MARGIN: f32 = 4.0;

/// Kinds to exclude from the dynamic-index overlap check, e.g. a pursuer
/// spawn doesn't care if it lands near another pursuer.
pub struct SpawnQuery<'a> {
    pub center: Point,
    pub min_r: f32,
    pub max_r: f32,
    pub wh: (f32, f32),
    pub exclude: &'a [AgentId],
}

/// Find a safe spawn position within `[min_r, max_r]` of `center`.
///
/// Rejection-samples up to [`MAX_ATTEMPTS`] candidates on a polar
/// distribution; on exhaustion falls back to walkable-cell centers near
/// `center` within the band, then four map-corner insets, then gives up.
pub fn find_spawn(collision: &CollisionService<'_>, rng: &mut SimRng, query: &SpawnQuery<'_>) -> Option<Point> {
    for _ in 0..MAX_ATTEMPTS {
        let theta = rng.gen_angle();
        let r = rng.gen_range(query.min_r..=query.max_r);
        let candidate = Point::new(query.center.x + r * theta.cos(), query.center.y + r * theta.sin());

        if !inside_map_with_margin(collision, candidate) {
            continue;
        }
        if collision.rect_collides_buildings(candidate, query.wh.0, query.wh.1) {
            continue;
        }
        if overlaps_any_agent(collision, candidate, query) {
            continue;
        }
        return Some(candidate);
    }

    walkable_cell_fallback(collision, query).or_else(|| corner_inset_fallback(collision, query))
}

fn inside_map_with_margin(collision: &CollisionService<'_>, p: Point) -> bool {
    p.x >= EDGE_MARGIN
        && p.y >= EDGE_MARGIN
        && p.x <= collision.map.width - EDGE_MARGIN
        && p.y <= collision.map.height - EDGE_MARGIN
}

fn overlaps_any_agent(collision: &CollisionService<'_>, candidate: Point, query: &SpawnQuery<'_>) -> bool {
    let probe = nightward_core::Rect::from_center(candidate, query.wh.0, query.wh.1).expanded(query.wh.0.max(query.wh.1));
    collision
        .dynamic_tree
        .query(&probe)
        .into_iter()
        .filter(|e| !query.exclude.contains(&e.id))
        .any(|e| e.bounds.intersects(&nightward_core::Rect::from_center(candidate, query.wh.0, query.wh.1)))
}

/// Walkable-cell centers near `center`, sorted by distance, restricted to
/// the `[min_r, max_r]` band.
fn walkable_cell_fallback(collision: &CollisionService<'_>, query: &SpawnQuery<'_>) -> Option<Point> {
    let mut candidates: Vec<Point> = collision
        .map
        .walkable_cells
        .iter()
        .map(|r| r.center())
        .filter(|&p| {
            let d = p.distance(query.center);
            d >= query.min_r && d <= query.max_r
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance(query.center)
            .partial_cmp(&b.distance(query.center))
            .unwrap()
    });

    candidates
        .into_iter()
        .find(|&p| !collision.rect_collides_buildings(p, query.wh.0, query.wh.1) && !overlaps_any_agent(collision, p, query))
}

/// The four map-corner insets, tried as a last resort.
fn corner_inset_fallback(collision: &CollisionService<'_>, query: &SpawnQuery<'_>) -> Option<Point> {
    let inset = EDGE_MARGIN * 2.0;
    let corners = [
        Point::new(inset, inset),
        Point::new(collision.map.width - inset, inset),
        Point::new(inset, collision.map.height - inset),
        Point::new(collision.map.width - inset, collision.map.height - inset),
    ];
    corners
        .into_iter()
        .find(|&p| !collision.rect_collides_buildings(p, query.wh.0, query.wh.1) && !overlaps_any_agent(collision, p, query))
}
