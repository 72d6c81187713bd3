//! Integration tests for vs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, TRANSITION_FILE};
    use crate::row::{TransitionRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, time: f64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            time,
            vehicle_id,
            name:      format!("UAM-{vehicle_id}"),
            state:     "at_gate",
            x:         1.5,
            y:         -2.0,
            vertiport: Some(0),
            gate:      Some(vehicle_id),
        }
    }

    fn read_all(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(dir.path().join(SNAPSHOT_FILE));
        assert_eq!(headers, ["time", "vehicle_id", "name", "state", "x", "y", "vertiport", "gate"]);
        assert!(rows.is_empty());

        let (headers, _) = read_all(dir.path().join(TRANSITION_FILE));
        assert_eq!(headers, ["time", "vehicle_id", "name", "from", "to", "x", "y"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut airborne = snap_row(2, 6.0);
        airborne.vertiport = None;
        airborne.gate = None;
        airborne.state = "in_air";
        w.write_snapshots(&[snap_row(0, 6.0), snap_row(1, 6.0), airborne]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_all(dir.path().join(SNAPSHOT_FILE));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "6.000");
        assert_eq!(&rows[1][2], "UAM-1");
        assert_eq!(&rows[1][4], "1.500");
        assert_eq!(&rows[1][7], "1");
        assert_eq!(&rows[2][3], "in_air");
        assert_eq!(&rows[2][6], "");
        assert_eq!(&rows[2][7], "");
    }

    #[test]
    fn transition_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_transition(&TransitionRow {
            time:       12.3,
            vehicle_id: 4,
            name:       "UAM-4".into(),
            from:       "at_gate",
            to:         "takeoff_ground",
            x:          0.0,
            y:          10.0,
        })
        .unwrap();
        w.finish().unwrap();

        let (_, rows) = read_all(dir.path().join(TRANSITION_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "12.300");
        assert_eq!(&rows[0][3], "at_gate");
        assert_eq!(&rows[0][4], "takeoff_ground");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use vs_core::{Point, SimConfig, VertiportId};
    use vs_ground::{GroundLayout, GroundLayoutBuilder, UniformCostRouter};
    use vs_sim::{RunStop, SimBuilder};
    use vs_vehicle::VehicleSpec;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, TRANSITION_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::TransitionRow;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, VehicleSnapshotRow};

    fn line_layout() -> GroundLayout {
        GroundLayout::from_template(
            &[
                ("FATO_Takeoff", Point::new(0.0, 0.0)),
                ("FATO_Landing", Point::new(10.0, 0.0)),
                ("GATE1", Point::new(5.0, 5.0)),
            ],
            &[("GATE1", &["FATO_Takeoff", "FATO_Landing"])],
            "FATO_Takeoff",
            "FATO_Landing",
            &["GATE1"],
        )
        .unwrap()
    }

    fn one_leg_builder(config: SimConfig) -> SimBuilder<UniformCostRouter> {
        let layout = Arc::new(line_layout());
        let mut b = SimBuilder::new(config, UniformCostRouter);
        let a = b.vertiport("A", Point::ORIGIN, Point::ORIGIN, layout.clone());
        let c = b.vertiport("B", Point::new(50.0, 0.0), Point::new(50.0, 0.0), layout);
        b.vehicle(VehicleSpec::from_plan("UAM-1", a, 0.0, &[c]).unwrap().speeds(10.0, 50.0));
        b
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig { snapshot_interval_ticks: 10, ..SimConfig::default() };
        let mut sim = one_leg_builder(config).build().unwrap();

        let dir = TempDir::new().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        assert_eq!(sim.run(&mut obs), RunStop::Settled);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join(TRANSITION_FILE)).unwrap();
        let to: Vec<String> = rdr.records().map(|r| r.unwrap()[4].to_owned()).collect();
        assert_eq!(to, ["takeoff_ground", "in_air", "landing_ground", "done"]);

        let expected = sim.clock.ticks / 10;
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        assert_eq!(rdr.records().count() as u64, expected);
    }

    #[test]
    fn fault_written_as_transition() {
        let mut lb = GroundLayoutBuilder::new();
        let t = lb.add_node("FATO_Takeoff", Point::new(0.0, 0.0));
        let g = lb.add_node("GATE1", Point::new(5.0, 5.0));
        lb.takeoff(t).landing(t).add_gate(g);
        let layout = Arc::new(lb.build().unwrap());

        let mut b = SimBuilder::new(SimConfig::default(), UniformCostRouter);
        b.vertiport("A", Point::ORIGIN, Point::ORIGIN, layout.clone());
        b.vertiport("B", Point::new(50.0, 0.0), Point::new(50.0, 0.0), layout);
        b.vehicle(VehicleSpec::from_plan("cut-off", VertiportId(0), 0.0, &[VertiportId(1)]).unwrap());
        let mut sim = b.build().unwrap();

        let dir = TempDir::new().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        assert_eq!(sim.run(&mut obs), RunStop::Settled);

        let mut rdr = csv::Reader::from_path(dir.path().join(TRANSITION_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "at_gate");
        assert_eq!(&rows[0][4], TransitionRow::FAULT);
    }

    /// Writer whose every call fails.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_transition(&mut self, _row: &TransitionRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("first")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("finish")))
        }
    }

    #[test]
    fn keeps_first_error() {
        let config = SimConfig { snapshot_interval_ticks: 1, ..SimConfig::default() };
        let mut sim = one_leg_builder(config).build().unwrap();
        let mut obs = SimOutputObserver::new(Broken);
        sim.run(&mut obs);

        // The first tick both transitions and snapshots; transitions come first.
        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: first");
        assert!(obs.take_error().is_none());
    }
}
