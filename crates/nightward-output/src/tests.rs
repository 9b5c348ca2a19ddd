//! Integration tests for nightward-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            kind: "Pursuer(Shambler)".into(),
            x: 10.0,
            y: 20.0,
            hp: 120.0,
            max_hp: 120.0,
            state: "Pursuer(Idle)".into(),
            w: 8.0,
            h: 8.0,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, day: 1, time_in_day: tick as f32, is_day: true, alive_agents: 3, pursuers: 1, followers: 2 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "kind", "x", "y", "hp", "max_hp", "state", "w", "h"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "day", "time_in_day", "is_day", "alive_agents", "pursuers", "followers"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5"); // tick
        assert_eq!(&read_rows[0][1], "0"); // agent_id
        assert_eq!(&read_rows[1][1], "1");
        assert_eq!(&read_rows[2][1], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][4], "3"); // alive_agents
        assert_eq!(&read_rows[0][5], "1"); // pursuers
        assert_eq!(&read_rows[0][6], "2"); // followers
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }
}

#[cfg(test)]
mod observer_tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use nightward_core::{PlayerInput, WorldConfig};
    use nightward_map::map::MapRecord;
    use nightward_map::Map;
    use nightward_sim::World;

    use crate::csv::CsvWriter;
    use crate::observer::WorldOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn open_map() -> Map {
        let record = MapRecord {
            name: "open".into(),
            width: 200,
            height: 200,
            cell_size: 10,
            matrix: vec![vec![0; 20]; 20],
            building_types: HashMap::new(),
        };
        Map::compile(record).unwrap()
    }

    #[test]
    fn a_few_ticks_write_one_snapshot_row_per_agent_and_one_summary_row() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = WorldOutputObserver::new(writer);

        let mut world = World::new(open_map(), 7, WorldConfig::default()).unwrap();
        world.spawn_player(nightward_core::Point::new(100.0, 100.0));

        for _ in 0..3 {
            world.tick(1.0 / 60.0, PlayerInput::default(), &mut obs);
        }
        assert!(obs.take_error().is_none(), "no write errors expected");
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3, "one player row per tick over 3 ticks");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows2: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows2.len(), 3);
    }
}
