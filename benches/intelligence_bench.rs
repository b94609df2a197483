// ABOUTME: Criterion benchmarks for the swing analysis engines
// ABOUTME: Measures derivation, feedback generation, trajectory fitting, and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the swing analysis engines.
//!
//! Covers the per-swing hot path (derive + feedback), the weighted
//! least-squares trajectory fit, and the rayon-backed batch analysis.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swing_insight::models::{
    BallPosition, Detection, DetectionSequence, MeasurementSet, ReliabilityKey,
};
use swing_insight::SwingAnalysisService;
use swing_intelligence::{
    BiomechanicsDeriver, FeedbackEngine, FeedbackGenerator, TrajectoryReconstructor,
};

/// Batch sizes for throughput benchmarks
const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss)]
fn generate_measurements(count: usize) -> Vec<MeasurementSet> {
    (0..count)
        .map(|index| {
            let speed = 70.0 + (index % 50) as f64;
            let tempo = 2.0 + (index % 25) as f64 / 10.0;
            MeasurementSet::builder(speed, tempo)
                .plane_angle_deg(55.0 + (index % 20) as f64)
                .reliability(ReliabilityKey::SwingPlane, 0.6 + (index % 4) as f64 / 10.0)
                .predicted_label(if index % 3 == 0 { "over_the_top" } else { "on_plane" })
                .detail("wrist_lag_angle", 80.0)
                .build()
        })
        .collect()
}

fn generate_detections(frames: u32) -> DetectionSequence {
    let (vx, vy, gravity, fps) = (38.0, 14.0, 9.81, 240.0);
    let detections = (0..frames)
        .map(|frame| {
            let t = f64::from(frame) / fps;
            Detection {
                frame_index: frame,
                position: BallPosition {
                    x: vx * t,
                    y: (0.5 * gravity * t).mul_add(-t, vy * t),
                },
                confidence: 0.85,
            }
        })
        .collect();
    DetectionSequence::new(detections, frames * 2).with_frame_rate(fps)
}

fn bench_single_swing(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_swing");
    let measurement = generate_measurements(1).remove(0);
    let deriver = BiomechanicsDeriver::new();
    let engine = FeedbackEngine::new();
    let analysis = deriver.derive(&measurement);

    group.bench_function("derive", |b| {
        b.iter(|| deriver.derive(black_box(&measurement)));
    });

    group.bench_function("feedback", |b| {
        b.iter(|| engine.generate_feedback(black_box(&analysis)));
    });

    group.finish();
}

fn bench_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory");
    let reconstructor = TrajectoryReconstructor::new();

    for frames in [8_u32, 60, 480] {
        let sequence = generate_detections(frames);
        group.throughput(Throughput::Elements(u64::from(frames)));
        group.bench_with_input(
            BenchmarkId::new("reconstruct", frames),
            &sequence,
            |b, sequence| {
                b.iter(|| reconstructor.reconstruct(black_box(sequence)));
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_analysis");
    let service = SwingAnalysisService::new();

    for size in BATCH_SIZES {
        let measurements = generate_measurements(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_batch", size),
            &measurements,
            |b, measurements| {
                b.iter(|| service.analyze_batch(black_box(measurements)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_swing, bench_trajectory, bench_batch);
criterion_main!(benches);
