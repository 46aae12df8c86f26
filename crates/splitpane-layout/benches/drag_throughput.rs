//! Benchmarks: gesture throughput through the splitter state machine.
//!
//! Run with: cargo bench --package splitpane-layout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use splitpane_core::{
    Orientation, PaneDimensions, PaneEvent, PointerSample, Position, PressSample, SizeUnit,
};
use splitpane_layout::{PaneState, UpdateConfig};

/// One press, `moves` jittery moves, one release.
fn gen_gesture(moves: usize) -> Vec<PaneEvent> {
    let container = PaneDimensions::new(1920, 1080);
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PaneEvent::Press(PressSample::pointer(
        Position::new(960, 540),
        container,
    )));
    for i in 0..moves {
        let x = 960 + ((i * 7) % 41) as i32 - 20;
        let y = 540 + ((i * 3) % 17) as i32 - 8;
        events.push(PaneEvent::Move(PointerSample::at(Position::new(x, y))));
    }
    events.push(PaneEvent::Release(PointerSample::at(Position::new(960, 540))));
    events
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let config = UpdateConfig::new().on_resize(|size: SizeUnit| size);

    for &moves in &[16usize, 256, 4096] {
        let events = gen_gesture(moves);
        group.throughput(Throughput::Elements(events.len() as u64));

        group.bench_with_input(BenchmarkId::new("percentage", moves), &events, |b, events| {
            b.iter(|| {
                let mut state = PaneState::init(Orientation::Horizontal);
                for &event in events {
                    let (next, msg) = state.update_with(&config, event);
                    state = next;
                    black_box(msg);
                }
                black_box(state)
            })
        });

        group.bench_with_input(BenchmarkId::new("pixels", moves), &events, |b, events| {
            b.iter(|| {
                let mut state = PaneState::init(Orientation::Vertical)
                    .configure_splitter(SizeUnit::pixels(300, Some((100, 900))));
                for &event in events {
                    state = state.update(event);
                }
                black_box(state)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
