//! quad: four vertiports and sixteen vehicles.  Every vehicle tours the
//! other three vertiports and returns home.
//!
//! Usage: `quad [config.json]`.  The optional file holds a `SimConfig`;
//! missing fields keep their defaults.

mod layout;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};

use vs_core::{Point, SimClock, SimConfig, VertiportId};
use vs_ground::{UniformCostRouter, Vertiport};
use vs_output::{CsvWriter, OutputWriter, SimOutputObserver};
use vs_sim::{SimBuilder, SimObserver};
use vs_vehicle::{Transition, Vehicle, VehicleError, VehicleSpec};

use layout::two_pad_six_gate;

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLES_PER_PORT: usize = 4;
const DEPARTURE_SPACING: f64   = 60.0;
const STATUS_EVERY_SECS: f64   = 60.0;
const OUTPUT_DIR:        &str  = "output/quad";

/// (name, airspace position, ground offset)
const PORTS: [(&str, (f64, f64), (f64, f64)); 4] = [
    ("Vertiport A", (5.0, 30.0), (0.0, 0.0)),
    ("Vertiport B", (25.0, 30.0), (30.0, 0.0)),
    ("Vertiport C", (5.0, 5.0), (0.0, 30.0)),
    ("Vertiport D", (25.0, 5.0), (30.0, 30.0)),
];

// ── Observer: periodic status + row counts ────────────────────────────────────

struct StatusObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    next_status:   f64,
    snapshot_rows: usize,
    transitions:   usize,
    faults:        usize,
}

impl<W: OutputWriter> StatusObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, next_status: STATUS_EVERY_SECS, snapshot_rows: 0, transitions: 0, faults: 0 }
    }
}

impl<W: OutputWriter> SimObserver for StatusObserver<W> {
    fn on_tick_start(&mut self, clock: &SimClock) {
        self.inner.on_tick_start(clock);
    }

    fn on_tick_end(&mut self, clock: &SimClock, live: usize) {
        if clock.time >= self.next_status {
            println!("{clock}: {live} vehicles active, {} transitions so far", self.transitions);
            self.next_status += STATUS_EVERY_SECS;
        }
        self.inner.on_tick_end(clock, live);
    }

    fn on_transition(&mut self, vehicle: &Vehicle, transition: &Transition) {
        self.transitions += 1;
        self.inner.on_transition(vehicle, transition);
    }

    fn on_fault(&mut self, vehicle: &Vehicle, error: &VehicleError) {
        self.faults += 1;
        eprintln!("{}: {error}", vehicle.name);
        self.inner.on_fault(vehicle, error);
    }

    fn on_snapshot(&mut self, time: f64, vehicles: &[Vehicle], vertiports: &[Vertiport]) {
        self.snapshot_rows += vehicles.len();
        self.inner.on_snapshot(time, vehicles, vertiports);
    }

    fn on_sim_end(&mut self, clock: &SimClock) {
        self.inner.on_sim_end(clock);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig { snapshot_interval_ticks: 100, ..SimConfig::default() });
    };
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    let config = load_config()?;
    println!("=== quad: vertiport traffic ===");
    println!(
        "Vertiports: {}  |  Vehicles: {}  |  dt: {:.2} s  |  tick cap: {}",
        PORTS.len(),
        PORTS.len() * VEHICLES_PER_PORT,
        config.dt(),
        config.max_ticks,
    );
    println!();

    // 1. Vertiports, all sharing one layout.
    let layout = Arc::new(two_pad_six_gate()?);
    println!(
        "Ground layout: {} nodes, {} directed links, {} gates",
        layout.node_count(),
        layout.adjacency_len(),
        layout.gates.len(),
    );

    let mut builder = SimBuilder::new(config, UniformCostRouter);
    let ports: Vec<VertiportId> = PORTS
        .iter()
        .map(|&(name, pos, offset)| {
            builder.vertiport(name, Point::from(pos), Point::from(offset), layout.clone())
        })
        .collect();

    // 2. Vehicles: tour the other three ports, then return home.
    let mut n = 0;
    for &origin in &ports {
        let plan: Vec<VertiportId> = ports
            .iter()
            .copied()
            .filter(|&p| p != origin)
            .chain(std::iter::once(origin))
            .collect();
        for i in 0..VEHICLES_PER_PORT {
            n += 1;
            let departure = i as f64 * DEPARTURE_SPACING;
            let spec = VehicleSpec::from_plan(format!("UAM-{n}"), origin, departure, &plan)
                .context("empty flight plan")?;
            builder.vehicle(spec);
        }
    }

    let mut sim = builder.build()?;

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StatusObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let stop = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Stopped ({stop:?}) at {} in {:.3} s wall time", sim.clock, elapsed.as_secs_f64());
    println!("  {OUTPUT_DIR}/vehicle_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  {OUTPUT_DIR}/transitions.csv       : {} rows", obs.transitions + obs.faults);
    println!();

    // 6. Final vehicle table.
    println!("{:<8} {:<16} {:<14} {:>8} {:<18}", "Vehicle", "State", "Vertiport", "Legs", "Position");
    println!("{}", "-".repeat(68));
    for v in &sim.vehicles {
        let port = v
            .current
            .and_then(|id| sim.vertiport(id))
            .map_or("-", |vp| vp.name.as_str());
        let state = if v.fault().is_some() { "fault" } else { v.kind().as_str() };
        println!(
            "{:<8} {:<16} {:<14} {:>8} {:<18}",
            v.name,
            state,
            port,
            v.air_legs,
            v.position.to_string(),
        );
    }

    Ok(())
}
