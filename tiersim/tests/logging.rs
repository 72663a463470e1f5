use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use tiersim::{BodyGroup, GroupKind, GroupParams, NVec2, Parameters, SimError, Simulation};

/// Keeps every record so the test can inspect levels and messages
struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

// Only test in this binary: the logger can be installed once per process
#[test]
fn failed_step_is_left_to_the_driver_to_report() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let suns = vec![NVec2::new(0.5, 0.5); 2];
    let primary = BodyGroup::new(GroupKind::Primary, GroupParams::new(2, 100.0, 10.0, 1.0e6), suns).unwrap();
    let planet = vec![NVec2::new(0.1, 0.1)];
    let secondary = BodyGroup::new(GroupKind::Secondary, GroupParams::new(1, 1.0, 3.0, 1.0e6), planet).unwrap();
    let mut sim = Simulation::new(primary, secondary, Parameters::default()).unwrap();

    let err = sim.advance().unwrap_err();
    assert!(matches!(err, SimError::CoincidentBodies { .. }));

    let records = CAPTURE.0.lock().unwrap();
    assert!(records.iter().any(|(_, msg)| msg.contains("stopped")), "engine logged nothing: {:?}", records);
    assert!(!records.iter().any(|(level, _)| *level == Level::Error), "engine logged an error itself: {:?}", records);
}
