//! A depth-bounded region quadtree supporting insert / remove / range-query.
//!
//! Two flavors share this one generic implementation, distinguished only by
//! the id type they index: [`StaticQuadtree`] holds [`BuildingId`]s and is
//! built once at map load, [`DynamicQuadtree`] holds [`AgentId`]s and is
//! rebuilt or patched every tick. Both obey the same subdivision policy.

use nightward_core::{AgentId, BuildingId, Rect};

/// One stored object: an opaque id plus the bounding rectangle it occupies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadEntry<Id> {
    pub id: Id,
    pub bounds: Rect,
}

impl<Id> QuadEntry<Id> {
    pub fn new(id: Id, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

/// A region quadtree over entries of id type `Id`.
///
/// # Subdivision policy
///
/// A leaf holds entries directly while `count < max_objects` or `depth ==
/// max_depth`. Past that it splits into four equal quadrants (NW, NE, SW,
/// SE); an entry is pushed into the unique child whose bounds **fully
/// contain** it, or kept at the current node if no single child does. This
/// is what keeps an entry straddling a split line from being duplicated
/// across children.
#[derive(Debug)]
pub struct QuadTree<Id> {
    bounds: Rect,
    max_depth: u8,
    max_objects: usize,
    depth: u8,
    entries: Vec<QuadEntry<Id>>,
    children: Option<Box<[QuadTree<Id>; 4]>>,
}

impl<Id: Copy + PartialEq> QuadTree<Id> {
    pub fn new(bounds: Rect, max_depth: u8, max_objects: usize) -> Self {
        Self::with_depth(bounds, max_depth, max_objects, 0)
    }

    fn with_depth(bounds: Rect, max_depth: u8, max_objects: usize, depth: u8) -> Self {
        Self {
            bounds,
            max_depth,
            max_objects,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Insert `entry`. Returns `false` without modifying the tree if its
    /// bounds don't intersect the tree's overall bounds.
    pub fn insert(&mut self, entry: QuadEntry<Id>) -> bool {
        if !self.bounds.intersects(&entry.bounds) {
            return false;
        }
        self.insert_entry(entry);
        true
    }

    fn insert_entry(&mut self, entry: QuadEntry<Id>) {
        if self.children.is_none() {
            if self.entries.len() < self.max_objects || self.depth >= self.max_depth {
                self.entries.push(entry);
                return;
            }
            self.subdivide();
        }
        match self.child_index_for(&entry.bounds) {
            Some(idx) => self.children.as_mut().unwrap()[idx].insert_entry(entry),
            None => self.entries.push(entry),
        }
    }

    fn subdivide(&mut self) {
        if self.children.is_some() {
            return;
        }
        let quads = self.bounds.quadrants();
        let child_depth = self.depth + 1;
        let make = |b: Rect| Self::with_depth(b, self.max_depth, self.max_objects, child_depth);
        self.children = Some(Box::new([make(quads[0]), make(quads[1]), make(quads[2]), make(quads[3])]));

        let displaced: Vec<_> = self.entries.drain(..).collect();
        for entry in displaced {
            match self.child_index_for(&entry.bounds) {
                Some(idx) => self.children.as_mut().unwrap()[idx].insert_entry(entry),
                None => self.entries.push(entry),
            }
        }
    }

    /// Index of the unique child whose bounds fully contain `bounds`, if any.
    fn child_index_for(&self, bounds: &Rect) -> Option<usize> {
        let children = self.children.as_ref()?;
        children.iter().position(|c| c.bounds.contains_rect(bounds))
    }

    /// Remove the entry with the given id. Linear in the size of the subtree
    /// that would contain it. Returns `false`, leaving the tree unchanged,
    /// if no entry with that id is found.
    pub fn remove(&mut self, id: Id) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            return true;
        }
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.remove(id) {
                    return true;
                }
            }
        }
        false
    }

    /// Append every entry whose bounds intersect `range` to `out`, parent
    /// entries before child entries, children visited NW, NE, SW, SE.
    /// No duplicates; callers must not depend on any ordering beyond that.
    pub fn query_into(&self, range: &Rect, out: &mut Vec<QuadEntry<Id>>) {
        if !self.bounds.intersects(range) {
            return;
        }
        out.extend(self.entries.iter().filter(|e| e.bounds.intersects(range)).copied());
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_into(range, out);
            }
        }
    }

    pub fn query(&self, range: &Rect) -> Vec<QuadEntry<Id>> {
        let mut out = Vec::new();
        self.query_into(range, &mut out);
        out
    }

    /// Whether any entry anywhere in the tree intersects `range`. Short-circuits
    /// on the first hit, useful where only presence matters.
    pub fn any_intersects(&self, range: &Rect) -> bool {
        if !self.bounds.intersects(range) {
            return false;
        }
        if self.entries.iter().any(|e| e.bounds.intersects(range)) {
            return true;
        }
        self.children
            .as_ref()
            .is_some_and(|children| children.iter().any(|c| c.any_intersects(range)))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.children = None;
    }

    pub fn len(&self) -> usize {
        let mut total = self.entries.len();
        if let Some(children) = &self.children {
            total += children.iter().map(QuadTree::len).sum::<usize>();
        }
        total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Static tree of building rectangles, built once at map load and never
/// mutated afterward (I3).
pub type StaticQuadtree = QuadTree<BuildingId>;

/// Dynamic tree of live agents, rebuilt or patched every tick per the
/// three-regime update strategy.
pub type DynamicQuadtree = QuadTree<AgentId>;
