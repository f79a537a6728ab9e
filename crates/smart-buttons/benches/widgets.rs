//! Benchmarks for widget construction, broadcast updates and menu navigation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use smart_buttons::dropdown::FocusDirection;
use smart_buttons::prelude::*;
use smart_buttons_dom::{Document, Key};

fn styled_button(i: usize) -> ButtonOptions {
    ButtonOptions::new()
        .text(format!("Button {}", i))
        .ty(ButtonType::Primary)
        .icon(IconSpec::new("fa fa-check"))
        .effect(EffectKind::Ripple)
}

fn bench_button_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("button_create");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("plain", size), &size, |b, &size| {
            b.iter(|| {
                let doc = Document::new();
                for i in 0..size {
                    let button = Button::new(&doc, ButtonOptions::new().text(format!("Button {}", i)));
                    doc.append_child(doc.body(), black_box(button.node()));
                }
                doc
            });
        });

        group.bench_with_input(BenchmarkId::new("styled", size), &size, |b, &size| {
            b.iter(|| {
                let doc = Document::new();
                for i in 0..size {
                    let button = Button::new(&doc, styled_button(i));
                    doc.append_child(doc.body(), black_box(button.node()));
                }
                doc
            });
        });
    }

    group.finish();
}

fn bench_button_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("button_updates");

    let doc = Document::new();
    let button = Button::new(&doc, styled_button(0));
    doc.append_child(doc.body(), button.node());

    group.bench_function("set_text", |b| {
        b.iter(|| button.set_text(black_box("Updated")));
    });

    // Structural change, rebuilds the node
    group.bench_function("set_type", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            button.set_type(if flip { ButtonType::Danger } else { ButtonType::Primary });
        });
    });

    group.bench_function("toggle_loading", |b| {
        b.iter(|| {
            button.set_loading(true);
            button.set_loading(false);
        });
    });

    group.finish();
}

fn bench_group_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_broadcast");

    for size in [10, 100] {
        group.throughput(Throughput::Elements(size as u64));

        let doc = Document::new();
        let buttons = ButtonGroup::new(
            &doc,
            ButtonGroupOptions::new().buttons((0..size).map(styled_button)),
        );
        doc.append_child(doc.body(), buttons.node());

        group.bench_with_input(BenchmarkId::new("set_type", size), &size, |b, _| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                buttons.set_type(if flip { ButtonType::Success } else { ButtonType::Primary });
            });
        });

        group.bench_with_input(BenchmarkId::new("set_enabled", size), &size, |b, _| {
            let mut enabled = false;
            b.iter(|| {
                enabled = !enabled;
                buttons.set_enabled(black_box(enabled));
            });
        });
    }

    group.finish();
}

fn bench_dropdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropdown");

    for size in [10, 100] {
        let doc = Document::new();
        let dropdown = DropdownButton::new(
            &doc,
            DropdownOptions::new()
                .button(ButtonOptions::new().text("Actions"))
                .items((0..size).map(|i| MenuItem::entry(format!("Item {}", i)))),
        );
        doc.append_child(doc.body(), dropdown.node());

        group.bench_with_input(BenchmarkId::new("open_close", size), &size, |b, _| {
            b.iter(|| {
                dropdown.open();
                dropdown.close();
            });
        });

        dropdown.open();
        group.bench_with_input(BenchmarkId::new("focus_next", size), &size, |b, _| {
            b.iter(|| dropdown.focus_item(black_box(FocusDirection::Next)));
        });

        group.bench_with_input(BenchmarkId::new("arrow_keys", size), &size, |b, _| {
            b.iter(|| {
                doc.key_down(dropdown.node(), Key::ArrowDown);
                doc.key_down(dropdown.node(), Key::ArrowUp);
            });
        });
        dropdown.close();
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_button_create,
    bench_button_updates,
    bench_group_broadcast,
    bench_dropdown
);
criterion_main!(benches);
