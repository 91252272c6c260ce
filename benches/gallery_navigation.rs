// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery selection transitions.
//!
//! Measures the cost of:
//! - Stepping through media with wrap-around
//! - Dispatching a mixed action sequence through the reducer

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use storefront_gallery::domain::gallery::{MediaEntry, VariantEntry};
use storefront_gallery::gallery::{
    advance_media, reduce, Direction, GalleryAction, GalleryData, GallerySelection,
};

fn media(count: usize) -> Vec<MediaEntry> {
    (0..count)
        .map(|i| MediaEntry::image(format!("media/{i}.jpg")))
        .collect()
}

/// Full loop through the media list, one `Next` per entry.
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for count in [2usize, 16, 128] {
        let media = media(count);
        let id = BenchmarkId::new("advance_loop", count);
        group.bench_with_input(id, &media, |b, media| {
            b.iter(|| {
                let mut selection = GallerySelection::new();
                for _ in 0..media.len() {
                    selection = advance_media(&selection, media, Direction::Next);
                }
                black_box(selection);
            });
        });
    }

    group.finish();
}

/// Realistic session: browse, pick a variant, preview a review, close.
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let media = media(12);
    let variants: Vec<VariantEntry> = (0..6)
        .map(|i| VariantEntry::new(format!("variants/{i}.jpg"), format!("Variant {i}")))
        .collect();
    let reviews: Vec<String> = (0..20).map(|i| format!("reviews/{i}.jpg")).collect();
    let actions = [
        GalleryAction::Advance(Direction::Next),
        GalleryAction::Advance(Direction::Next),
        GalleryAction::SelectMedia(7),
        GalleryAction::SelectVariant(3),
        GalleryAction::PreviewCurrentMedia,
        GalleryAction::CloseOverlay,
        GalleryAction::PreviewReviewImage(5),
        GalleryAction::CloseOverlay,
        GalleryAction::Advance(Direction::Previous),
    ];

    group.bench_function("reduce_session", |b| {
        b.iter(|| {
            let data = GalleryData {
                media: &media,
                variants: &variants,
                review_images: &reviews,
            };
            let mut selection = GallerySelection::new();
            for action in actions {
                if let Ok(next) = reduce(&selection, data, action) {
                    selection = next;
                }
            }
            black_box(selection);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_reduce);
criterion_main!(benches);
