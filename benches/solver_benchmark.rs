//! Layout benchmark: size solving and focus-driven re-layout.
//!
//! Target: a full tab cycle over a 3-level tree in well under a frame.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panestack::layout::solve;
use panestack::{
    BorderKind, Container, Decoration, Direction, Event, Key, KeyBindings, KeyCode, Padding, Root, Size, SizeMode,
    Sizing, Spacer, TextView,
};

/// Alternating static and weighted children with borders and gaps.
fn create_sizings(count: usize) -> Vec<Sizing> {
    let frame = Decoration::bordered(BorderKind::Rounded).padding(Padding::symmetric(0, 1)).frame_size();
    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                Sizing::new(SizeMode::Static(4), 1, frame)
            } else {
                Sizing::new(SizeMode::Weighted(1.0 + i as f64), 1, frame)
            }
        })
        .collect()
}

/// Root with `depth` levels of alternating nested containers.
fn create_tree(depth: usize, fanout: usize) -> Root {
    fn level(depth: usize, fanout: usize, direction: Direction) -> Container {
        let mut container = Container::new(direction);
        for i in 0..fanout {
            if depth > 1 && i == 0 {
                let child = level(depth - 1, fanout, direction.cross());
                container.add_weighted(child, 2.0, Decoration::bordered(BorderKind::Rounded), 1);
            } else if i % 2 == 0 {
                container.add_weighted(Spacer::new(), 1.0, Decoration::bordered(BorderKind::Rounded), 1);
            } else {
                container.add_static(TextView::new("pane"), 3, Decoration::bordered(BorderKind::Rounded), 1);
            }
        }
        container
    }

    let mut root = Root::from_container(level(depth, fanout, Direction::Horizontal), KeyBindings::default());
    root.set_size(Size::new(200, 60));
    root
}

fn solve_by_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_by_count");

    for count in [4, 16, 64, 256] {
        let sizings = create_sizings(count);
        group.bench_with_input(BenchmarkId::new("horizontal", count), &sizings, |b, sizings| {
            b.iter(|| solve(Direction::Horizontal, black_box(Size::new(1000, 60)), black_box(sizings)));
        });
    }

    group.finish();
}

fn relayout_focus_cycle(c: &mut Criterion) {
    let tab = Event::Key(Key::from(KeyCode::Tab));

    c.bench_function("focus_cycle_3_levels", |b| {
        let mut root = create_tree(3, 4);
        root.init();
        b.iter(|| {
            for _ in 0..8 {
                black_box(root.update(&tab));
            }
        });
    });
}

fn full_view(c: &mut Criterion) {
    let mut root = create_tree(3, 4);
    root.init();

    c.bench_function("view_200x60", |b| {
        b.iter(|| black_box(root.view()));
    });
}

criterion_group!(benches, solve_by_count, relayout_focus_cycle, full_view);
criterion_main!(benches);
