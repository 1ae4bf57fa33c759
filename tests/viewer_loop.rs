//! End-to-end runs of the viewer loop against a recording sink.

use std::{cell::RefCell, f64::consts::TAU, rc::Rc};

use duplex::{
    camera::{CameraMatrices, Viewport},
    geometry::{helix_angle, HelixFrame},
    options::Options,
    sequence::Duplex,
    viewer::{FrameSink, LoopState, PresentError, ViewerLoop},
    InputEvent,
};

#[derive(Debug, Default)]
struct Record {
    frames: Vec<(usize, usize)>,
    resizes: Vec<Viewport>,
    releases: usize,
}

/// Shares its record with the test so it can be read after the loop is
/// dropped.
struct RecordingSink(Rc<RefCell<Record>>);

impl FrameSink for RecordingSink {
    fn resize(&mut self, viewport: Viewport) {
        self.0.borrow_mut().resizes.push(viewport);
    }

    fn present(
        &mut self,
        frame: &HelixFrame,
        camera: &CameraMatrices,
    ) -> Result<(), PresentError> {
        assert!(camera.view_proj().is_finite());
        self.0
            .borrow_mut()
            .frames
            .push((frame.spheres.len(), frame.connectors.len()));
        Ok(())
    }

    fn release(&mut self) {
        self.0.borrow_mut().releases += 1;
    }
}

fn start(primary: &str) -> (ViewerLoop<RecordingSink>, Rc<RefCell<Record>>) {
    let record = Rc::new(RefCell::new(Record::default()));
    let duplex = Duplex::from_primary(primary.parse().unwrap());
    let viewer = ViewerLoop::new(
        &duplex,
        &Options::default(),
        RecordingSink(Rc::clone(&record)),
        Viewport::new(900, 700),
    );
    (viewer, record)
}

#[test]
fn ten_base_pairs_complete_one_turn() {
    let options = Options::default();
    let phase = helix_angle(10, &options.helix) - helix_angle(0, &options.helix);
    let turns = phase / TAU;
    assert!((turns - turns.round()).abs() < 1e-9);
    assert_eq!(turns.round(), 1.0);

    let (mut viewer, record) = start("ATGCATGCAT");
    assert_eq!(viewer.tick([]), LoopState::Running);
    assert_eq!(record.borrow().frames, vec![(20, 28)]);
}

#[test]
fn empty_duplex_idles_then_closes() {
    let (mut viewer, record) = start("");
    for _ in 0..3 {
        assert_eq!(viewer.tick([]), LoopState::Running);
    }
    assert_eq!(record.borrow().frames, vec![(0, 0); 3]);
    assert_eq!(viewer.tick([InputEvent::CloseRequested]), LoopState::Stopped);
    assert_eq!(record.borrow().releases, 1);
}

#[test]
fn close_on_first_tick_releases_exactly_once() {
    let (mut viewer, record) = start("GATTACA");
    assert_eq!(viewer.tick([InputEvent::CloseRequested]), LoopState::Stopped);
    assert_eq!(viewer.state(), LoopState::Stopped);
    assert_eq!(viewer.tick([]), LoopState::Stopped);
    viewer.shutdown();
    drop(viewer);

    let record = record.borrow();
    assert!(record.frames.is_empty());
    assert_eq!(record.releases, 1);
}

#[test]
fn dropping_a_running_loop_releases() {
    let (mut viewer, record) = start("GC");
    let _ = viewer.tick([]);
    drop(viewer);
    assert_eq!(record.borrow().releases, 1);
}

#[test]
fn zero_height_resize_keeps_presenting() {
    let (mut viewer, record) = start("ATGC");
    let state = viewer.tick([InputEvent::Resized {
        width: 800,
        height: 0,
    }]);
    assert_eq!(state, LoopState::Running);
    assert_eq!(record.borrow().resizes, vec![Viewport::new(800, 1)]);
    assert_eq!(record.borrow().frames.len(), 1);
}
