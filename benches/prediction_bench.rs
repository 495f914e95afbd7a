// ABOUTME: Criterion benchmarks for normalization, prediction, and reply parsing
// ABOUTME: Measures the per-request cost of the CPU-bound parts of the coaching pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the prediction pipeline.
//!
//! Measures feature normalization, model inference over batches of athletes,
//! prompt rendering, and structured reply parsing.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use para_coach::coaching::{CoachingContext, CoachingPrompt};
use para_coach::intelligence::{FeatureNormalizer, FeatureVector, PredictionEngine};
use para_coach::models::{RawAthleteInput, StructuredReply};

const DISABILITIES: [&str; 5] = [
    "amputee",
    "visually impaired",
    "cerebral palsy",
    "spinal cord injury",
    "intellectual",
];

const SPORTS: [&str; 5] = [
    "wheelchair racing",
    "para swimming",
    "powerlifting",
    "track 400m",
    "archery",
];

/// Generate varied but always valid raw athlete forms
#[allow(clippy::cast_precision_loss)]
fn generate_raw_inputs(count: usize) -> Vec<RawAthleteInput> {
    (0..count)
        .map(|index| RawAthleteInput {
            age: Some(18.0 + (index % 40) as f64),
            gender: Some(if index % 2 == 0 { "Male" } else { "Female" }.to_owned()),
            disability_type: Some(DISABILITIES[index % DISABILITIES.len()].to_owned()),
            sport_type: Some(SPORTS[index % SPORTS.len()].to_owned()),
            weight_kg: Some(55.0 + ((index * 7) % 40) as f64),
            height_cm: Some(155.0 + ((index * 11) % 40) as f64),
            training_days_per_week: None,
            training_hours_per_week: Some(5.0 + ((index * 3) % 12) as f64),
            sleep_hours: Some(6.0 + ((index * 5) % 30) as f64 / 10.0),
            heart_rate_rest: Some(50.0 + ((index * 13) % 30) as f64),
            daily_calorie_intake: Some(2000.0 + ((index * 97) % 1500) as f64),
            protein_intake_g: Some(80.0 + ((index * 17) % 80) as f64),
            water_intake_liters: Some(2.0 + ((index * 3) % 20) as f64 / 10.0),
            hydration_level: None,
        })
        .collect()
}

fn sample_reply() -> String {
    "## Summary\nSteady week with good sleep.\n\n\
     **Calories & Diet:**\nAim for 2600 kcal and 130 g protein.\n\n\
     3. Sample Day Meal Plan\nOats, rice bowl, salmon and greens.\n\n\
     ### Actions - Training + Recovery\n- Two easy sessions.\n- Sleep 8 hours."
        .to_owned()
}

fn bench_normalization(c: &mut Criterion) {
    let normalizer = FeatureNormalizer::default();
    let inputs = generate_raw_inputs(100);

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("raw_to_profile", |b| {
        b.iter(|| {
            for raw in &inputs {
                let _ = black_box(normalizer.normalize(black_box(raw)));
            }
        });
    });
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let normalizer = FeatureNormalizer::default();
    let engine = PredictionEngine::default();

    let mut group = c.benchmark_group("predict");
    for count in [1_usize, 10, 100] {
        let profiles: Vec<_> = generate_raw_inputs(count)
            .iter()
            .filter_map(|raw| normalizer.normalize(raw).ok())
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("three_models", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    for profile in profiles {
                        let _ = black_box(engine.predict(black_box(profile)));
                    }
                });
            },
        );
    }

    if let Some(profile) = generate_raw_inputs(1)
        .first()
        .and_then(|raw| normalizer.normalize(raw).ok())
    {
        group.bench_function("feature_vector", |b| {
            b.iter(|| FeatureVector::from_profile(black_box(&profile)));
        });
    }
    group.finish();
}

fn bench_dialogue_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialogue_text");

    let reply = sample_reply();
    group.bench_function("parse_reply", |b| {
        b.iter(|| StructuredReply::parse(black_box(reply.as_str())));
    });

    let normalizer = FeatureNormalizer::default();
    let engine = PredictionEngine::default();
    let context = generate_raw_inputs(1).first().and_then(|raw| {
        let profile = normalizer.normalize(raw).ok()?;
        let predictions = engine.predict(&profile).ok()?;
        let mut context = CoachingContext::new(profile, predictions);
        for turn in 0..8 {
            let answer = StructuredReply::parse(sample_reply()).ok()?;
            context.append_turn(format!("Question {turn}"), answer);
        }
        Some(context)
    });
    if let Some(context) = context {
        group.bench_function("build_prompt_8_turns", |b| {
            b.iter(|| CoachingPrompt::build(black_box(&context), "What diet should I follow?"));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_prediction,
    bench_dialogue_text
);
criterion_main!(benches);
