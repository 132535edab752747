//! Benchmarks for document layout and transcript rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use covenant_hub::app::{Message, Model, update};
use covenant_hub::document::{find, layout_body};
use covenant_hub::ui::transcript_lines;

fn bench_layout_body(c: &mut Criterion) {
    let Some(doc) = find(1) else {
        return;
    };
    c.bench_function("layout_body", |b| {
        b.iter(|| layout_body(doc, black_box("Oakridge Estates"), black_box(72)));
    });
}

fn bench_transcript(c: &mut Criterion) {
    let mut model = Model::default();
    for question in ["fence", "pets", "noise", "paint", "parking", "trash"] {
        model = update(model, Message::Send(question.to_string()));
        model = update(model, Message::DeliverReply(question.to_string()));
    }
    model = update(model, Message::NextCitation);

    c.bench_function("transcript_lines", |b| {
        b.iter(|| transcript_lines(&model, black_box(48)));
    });
}

criterion_group!(benches, bench_layout_body, bench_transcript);
criterion_main!(benches);
