//! `Map::compile` — turns a raw cell matrix into merged building rectangles
//! and walkable cells.

use std::collections::HashMap;

use nightward_core::{BuildingId, Rect};

use crate::building::{Building, BuildingType};
use crate::error::{MapError, MapResult};

/// The external map record, §6.1. Deserialized from whatever asset format
/// the render/load layer uses, then handed to [`Map::compile`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapRecord {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub matrix: Vec<Vec<i32>>,
    pub building_types: HashMap<i32, BuildingType>,
}

/// A compiled, immutable map.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
    rows: usize,
    cols: usize,
    matrix: Vec<Vec<i32>>,
    building_types: HashMap<i32, BuildingType>,
    pub buildings: Vec<Building>,
    pub walkable_cells: Vec<Rect>,
}

impl Map {
    /// Compile a raw record into merged building rectangles and walkable
    /// cells. Pure: no I/O, no randomness, rejects malformed matrices.
    pub fn compile(record: MapRecord) -> MapResult<Self> {
        let MapRecord { name, width, height, cell_size, matrix, building_types } = record;

        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        for (r, row) in matrix.iter().enumerate() {
            if row.len() != cols {
                return Err(MapError::RaggedRow { row: r, got: row.len(), expected: cols });
            }
        }
        for row in &matrix {
            for &key in row {
                if key != 0 && !building_types.contains_key(&key) {
                    return Err(MapError::UnknownBuildingType(key));
                }
            }
        }

        let cell_size_f = cell_size as f32;
        let buildings = flood_fill_buildings(&matrix, rows, cols, cell_size_f);
        let walkable_cells = walkable_rects(&matrix, rows, cols, cell_size_f);

        Ok(Self {
            name,
            width: width as f32,
            height: height as f32,
            cell_size: cell_size_f,
            rows,
            cols,
            matrix,
            building_types,
            buildings,
            walkable_cells,
        })
    }

    pub fn building_type(&self, key: i32) -> Option<&BuildingType> {
        self.building_types.get(&key)
    }

    /// Grid coordinates of the cell containing world point `(x, y)`, or
    /// `None` if `(x, y)` falls outside the matrix.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        if row < self.rows && col < self.cols {
            Some((row, col))
        } else {
            None
        }
    }

    pub fn value_at(&self, row: usize, col: usize) -> Option<i32> {
        self.matrix.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

fn cell_rect(row: usize, col: usize, cell_size: f32) -> Rect {
    let left = col as f32 * cell_size;
    let top = row as f32 * cell_size;
    Rect::new(left, top, left + cell_size, top + cell_size)
}

/// 4-connected flood fill over cells with identical nonzero value, merging
/// each connected component into one axis-aligned building rectangle.
fn flood_fill_buildings(matrix: &[Vec<i32>], rows: usize, cols: usize, cell_size: f32) -> Vec<Building> {
    let mut visited = vec![vec![false; cols]; rows];
    let mut buildings = Vec::new();
    let mut next_id = 0u32;

    for r in 0..rows {
        for c in 0..cols {
            if visited[r][c] || matrix[r][c] == 0 {
                continue;
            }
            let type_key = matrix[r][c];
            let mut cells = Vec::new();
            let mut stack = vec![(r, c)];
            visited[r][c] = true;

            while let Some((cr, cc)) = stack.pop() {
                cells.push((cr, cc));
                let neighbors = [
                    (cr.checked_sub(1), Some(cc)),
                    (Some(cr + 1), Some(cc)),
                    (Some(cr), cc.checked_sub(1)),
                    (Some(cr), Some(cc + 1)),
                ];
                for (nr, nc) in neighbors {
                    let (Some(nr), Some(nc)) = (nr, nc) else { continue };
                    if nr >= rows || nc >= cols || visited[nr][nc] {
                        continue;
                    }
                    if matrix[nr][nc] == type_key {
                        visited[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }

            let min_row = cells.iter().map(|&(r, _)| r).min().unwrap();
            let max_row = cells.iter().map(|&(r, _)| r).max().unwrap();
            let min_col = cells.iter().map(|&(_, c)| c).min().unwrap();
            let max_col = cells.iter().map(|&(_, c)| c).max().unwrap();

            let bounds = Rect::new(
                min_col as f32 * cell_size,
                min_row as f32 * cell_size,
                (max_col + 1) as f32 * cell_size,
                (max_row + 1) as f32 * cell_size,
            );

            buildings.push(Building {
                id: BuildingId(next_id),
                bounds,
                type_key,
                cells,
            });
            next_id += 1;
        }
    }

    buildings
}

fn walkable_rects(matrix: &[Vec<i32>], rows: usize, cols: usize, cell_size: f32) -> Vec<Rect> {
    let mut out = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if matrix[r][c] == 0 {
                out.push(cell_rect(r, c, cell_size));
            }
        }
    }
    out
}
