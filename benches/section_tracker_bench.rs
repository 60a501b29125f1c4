// Benchmark for section tracking and scroll animation
// Measures the per-frame cost of locating the active section and easing the scroll offset

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use luna_yoga::models::section::Section;
use luna_yoga::services::scroll::ScrollAnimation;
use luna_yoga::services::section_tracker::SectionTracker;
use luna_yoga::services::viewport::{SectionExtent, Viewport};
use std::time::{Duration, Instant};

struct StaticViewport {
    offset: f32,
}

impl Viewport for StaticViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn section_extent(&self, section: Section) -> Option<SectionExtent> {
        Some(match section {
            Section::Hero => SectionExtent::new(0.0, 600.0),
            Section::Services => SectionExtent::new(600.0, 700.0),
            Section::Schedule => SectionExtent::new(1300.0, 800.0),
        })
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn set_scroll_locked(&mut self, _locked: bool) {}
}

fn bench_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_tracker_observe");

    for offset in [0.0f32, 900.0, 1800.0, 5000.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(offset), offset, |b, &offset| {
            let viewport = StaticViewport { offset };
            let mut tracker = SectionTracker::default();
            b.iter(|| tracker.observe(black_box(&viewport)));
        });
    }

    group.finish();
}

fn bench_scroll_animation(c: &mut Criterion) {
    let started_at = Instant::now();
    let animation = ScrollAnimation::new(0.0, 1220.0, started_at, Duration::from_millis(450));
    let frames: Vec<Instant> = (0..27)
        .map(|frame| started_at + Duration::from_millis(frame * 16))
        .collect();

    c.bench_function("scroll_animation_frames", |b| {
        b.iter(|| {
            frames
                .iter()
                .map(|now| animation.offset_at(black_box(*now)))
                .sum::<f32>()
        })
    });
}

criterion_group!(benches, bench_observe, bench_scroll_animation);
criterion_main!(benches);
