use criterion::{Criterion, black_box, criterion_group, criterion_main};

use filmstrip_core::geometry::Size;
use filmstrip_core::panel::{ImageRef, Panel, PanelDeck, PanelKey};
use filmstrip_core::state::CarouselState;
use filmstrip_widgets::{IndicatorBar, Strip};

fn deck(n: usize) -> PanelDeck {
    let panels = (0..n)
        .map(|i| {
            Panel::new(
                format!("header {i}"),
                format!("body {i}"),
                ImageRef::new(format!("img://{i}")),
                PanelKey::new(format!("panel-{i}")),
            )
        })
        .collect();
    PanelDeck::new(panels).unwrap()
}

fn bench_placements(c: &mut Criterion) {
    let deck = deck(16);
    let mut state = CarouselState::new(deck.len());
    state.initialize();
    state.jump_to(7);
    let viewport = Some(Size::new(1920, 1080));

    c.bench_function("strip_placements_16", |b| {
        b.iter(|| {
            let strip = Strip::new(black_box(&deck), black_box(&state)).viewport(viewport);
            black_box(strip.placements())
        })
    });
}

fn bench_indicator_format(c: &mut Criterion) {
    let mut state = CarouselState::new(16);
    state.initialize();
    state.jump_to(7);

    c.bench_function("indicator_format_16", |b| {
        b.iter(|| {
            let bar = IndicatorBar::from_state(black_box(&state));
            black_box(bar.format_for_width(64))
        })
    });
}

criterion_group!(benches, bench_placements, bench_indicator_format);
criterion_main!(benches);
