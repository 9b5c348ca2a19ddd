//! Unit tests for map compilation.

#[cfg(test)]
mod compile {
    use std::collections::HashMap;

    use crate::building::BuildingType;
    use crate::map::{Map, MapRecord};
    use crate::MapError;

    fn building_types() -> HashMap<i32, BuildingType> {
        let mut m = HashMap::new();
        m.insert(1, BuildingType { name: "wall".into(), color_hint: None, walkable: false });
        m
    }

    #[test]
    fn empty_matrix_is_legal() {
        let record = MapRecord {
            name: "empty".into(),
            width: 0,
            height: 0,
            cell_size: 10,
            matrix: vec![],
            building_types: HashMap::new(),
        };
        let map = Map::compile(record).unwrap();
        assert!(map.buildings.is_empty());
        assert!(map.walkable_cells.is_empty());
    }

    #[test]
    fn ragged_rows_rejected() {
        let record = MapRecord {
            name: "ragged".into(),
            width: 20,
            height: 20,
            cell_size: 10,
            matrix: vec![vec![0, 0], vec![0]],
            building_types: HashMap::new(),
        };
        assert!(matches!(Map::compile(record), Err(MapError::RaggedRow { .. })));
    }

    #[test]
    fn unknown_building_key_rejected() {
        let record = MapRecord {
            name: "bad-key".into(),
            width: 10,
            height: 10,
            cell_size: 10,
            matrix: vec![vec![7]],
            building_types: HashMap::new(),
        };
        assert!(matches!(Map::compile(record), Err(MapError::UnknownBuildingType(7))));
    }

    #[test]
    fn single_cell_building_bounds() {
        let record = MapRecord {
            name: "one-wall".into(),
            width: 30,
            height: 30,
            cell_size: 10,
            matrix: vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]],
            building_types: building_types(),
        };
        let map = Map::compile(record).unwrap();
        assert_eq!(map.buildings.len(), 1);
        let b = &map.buildings[0];
        assert_eq!(b.bounds, nightward_core::Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(map.walkable_cells.len(), 8);
    }

    #[test]
    fn connected_cells_merge_into_one_building() {
        // An L-shaped run of three connected cells of type 1.
        let record = MapRecord {
            name: "l-shape".into(),
            width: 30,
            height: 20,
            cell_size: 10,
            matrix: vec![vec![1, 1, 0], vec![1, 0, 0]],
            building_types: building_types(),
        };
        let map = Map::compile(record).unwrap();
        assert_eq!(map.buildings.len(), 1);
        assert_eq!(map.buildings[0].cells.len(), 3);
        // bbox spans both rows and the first two columns
        assert_eq!(map.buildings[0].bounds, nightward_core::Rect::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn disconnected_same_type_cells_become_two_buildings() {
        let record = MapRecord {
            name: "two-walls".into(),
            width: 30,
            height: 10,
            cell_size: 10,
            matrix: vec![vec![1, 0, 1]],
            building_types: building_types(),
        };
        let map = Map::compile(record).unwrap();
        assert_eq!(map.buildings.len(), 2);
    }

    #[test]
    fn cell_at_out_of_range_is_none() {
        let record = MapRecord {
            name: "small".into(),
            width: 10,
            height: 10,
            cell_size: 10,
            matrix: vec![vec![0]],
            building_types: HashMap::new(),
        };
        let map = Map::compile(record).unwrap();
        assert_eq!(map.cell_at(5.0, 5.0), Some((0, 0)));
        assert_eq!(map.cell_at(50.0, 50.0), None);
        assert_eq!(map.cell_at(-1.0, 0.0), None);
    }
}
