//! Point/rect-in-building tests and the axis-decomposition slide algorithm.

use nightward_core::{AgentId, Point, Rect};
use nightward_map::Map;
use nightward_spatial::{DynamicQuadtree, StaticQuadtree};

/// Eight-way detour order used by both the slide algorithm's wall-following
/// step and the pursuer's chase detour (§4.E, REDESIGN FLAG 3). Fixed so
/// detour choice is deterministic rather than depending on iteration order.
pub const DETOUR_ORDER: [(f32, f32); 8] = [
    (1.0, 0.0),   // E
    (-1.0, 0.0),  // W
    (0.0, 1.0),   // S
    (0.0, -1.0),  // N
    (std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),   // SE
    (-std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2),  // SW
    (std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2),  // NE
    (-std::f32::consts::FRAC_1_SQRT_2, -std::f32::consts::FRAC_1_SQRT_2), // NW
];

/// Borrows the map and the two quadtrees for the duration of one tick's
/// worth of collision queries. Never mutates anything it holds.
pub struct CollisionService<'a> {
    pub map: &'a Map,
    pub static_tree: &'a StaticQuadtree,
    pub dynamic_tree: &'a DynamicQuadtree,
}

impl<'a> CollisionService<'a> {
    pub fn new(map: &'a Map, static_tree: &'a StaticQuadtree, dynamic_tree: &'a DynamicQuadtree) -> Self {
        Self { map, static_tree, dynamic_tree }
    }

    /// True iff `p` lies inside any building rectangle, or outside the map
    /// bounds.
    pub fn point_in_building(&self, p: Point) -> bool {
        if p.x < 0.0 || p.y < 0.0 || p.x > self.map.width || p.y > self.map.height {
            return true;
        }
        let probe = Rect::new(p.x, p.y, p.x, p.y);
        self.static_tree.query(&probe).into_iter().any(|e| {
            self.map
                .buildings
                .iter()
                .find(|b| b.id == e.id)
                .is_some_and(|b| b.bounds.contains_point(p))
        })
    }

    /// Same test for a rectangle centered at `center` with size `(w, h)`.
    pub fn rect_collides_buildings(&self, center: Point, w: f32, h: f32) -> bool {
        let rect = Rect::from_center(center, w, h);
        if rect.left < 0.0 || rect.top < 0.0 || rect.right > self.map.width || rect.bottom > self.map.height {
            return true;
        }
        self.static_tree.query(&rect).into_iter().any(|e| {
            self.map
                .buildings
                .iter()
                .find(|b| b.id == e.id)
                .is_some_and(|b| b.bounds.intersects(&rect))
        })
    }

    /// AABB overlap test between two agent-sized rectangles.
    pub fn pairwise_overlap(&self, a_center: Point, a_wh: (f32, f32), b_center: Point, b_wh: (f32, f32)) -> bool {
        let a = Rect::from_center(a_center, a_wh.0, a_wh.1);
        let b = Rect::from_center(b_center, b_wh.0, b_wh.1);
        a.intersects(&b)
    }

    /// First live agent (other than `exclude_id`) whose bounds overlap a
    /// `wh`-sized rectangle at `center`, searched only within `region_rect`.
    pub fn first_overlap_in_region(
        &self,
        center: Point,
        wh: (f32, f32),
        region_rect: &Rect,
        exclude_id: Option<AgentId>,
    ) -> Option<AgentId> {
        let probe = Rect::from_center(center, wh.0, wh.1);
        self.dynamic_tree
            .query(region_rect)
            .into_iter()
            .find(|e| Some(e.id) != exclude_id && e.bounds.intersects(&probe))
            .map(|e| e.id)
    }

    /// Sample at least `⌈|to - from| / 10⌉` intermediate points along the
    /// straight segment and check each for a building collision. Used by
    /// the pursuer's re-pathing / detour validation.
    pub fn path_valid(&self, from: Point, to: Point, w: f32, h: f32) -> bool {
        let dist = from.distance(to);
        let samples = ((dist / 10.0).ceil() as usize).max(1);
        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let p = from.lerp(to, t);
            if self.rect_collides_buildings(p, w, h) {
                return false;
            }
        }
        true
    }

    /// Resolve a desired motion from `from` to `to` into a safe resting
    /// position, per the five-step slide algorithm:
    ///
    /// 1. If the straight destination is clear, take it.
    /// 2. Otherwise try fractional distances `t ∈ {0.9, .., 0.1}` along the
    ///    segment, largest first.
    /// 3. Otherwise decompose into axis moves, preferring whichever lies
    ///    further along the motion.
    /// 4. Otherwise try the fixed 8-way detour at `min(|to-from|, wall_step)`.
    /// 5. Otherwise stay put.
    ///
    /// Deterministic given `(from, to, w, h)` and the current map/quadtree
    /// state; never returns a point inside a building.
    pub fn slide_translation(&self, from: Point, to: Point, w: f32, h: f32, wall_step: f32) -> Point {
        if !self.rect_collides_buildings(to, w, h) {
            return to;
        }

        let delta = to.sub(from);
        for i in (1..10).rev() {
            let t = i as f32 / 10.0;
            let candidate = from.add(delta.scale(t));
            if !self.rect_collides_buildings(candidate, w, h) {
                return candidate;
            }
        }

        let along_x = Point::new(to.x, from.y);
        let along_y = Point::new(from.x, to.y);
        let x_clear = !self.rect_collides_buildings(along_x, w, h);
        let y_clear = !self.rect_collides_buildings(along_y, w, h);
        match (x_clear, y_clear) {
            (true, true) => {
                if delta.x.abs() >= delta.y.abs() {
                    return along_x;
                }
                return along_y;
            }
            (true, false) => return along_x,
            (false, true) => return along_y,
            (false, false) => {}
        }

        let step = delta.length().min(wall_step);
        for (dx, dy) in DETOUR_ORDER {
            let candidate = from.add(Point::new(dx, dy).scale(step));
            if !self.rect_collides_buildings(candidate, w, h) {
                return candidate;
            }
        }

        from
    }
}
