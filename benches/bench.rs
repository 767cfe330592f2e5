// Criterion benchmarks for Dormmate Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dormmate_algo::core::Matcher;
use dormmate_algo::models::{Gender, Respondent, SurveyAnswers};

fn create_group(size: usize) -> Vec<Respondent> {
    (0..size)
        .map(|i| Respondent {
            student_id: format!("2024{:04}", i),
            name: format!("Student {}", i),
            gender: "M".to_string(),
            answers: SurveyAnswers {
                wake_time: if i % 3 == 0 { "6to8" } else { "8to10" }.to_string(),
                bed_time: if i % 2 == 0 { "10to12" } else { "after2" }.to_string(),
                smoking: if i % 5 == 0 { "yes" } else { "no" }.to_string(),
                sleep_habit: if i % 4 == 0 { "yes" } else { "no" }.to_string(),
                personality: if i % 2 == 0 { Some("INTJ".to_string()) } else { None },
                major: None,
                notes: None,
            },
            submitted_at: None,
        })
        .collect()
}

fn bench_pair_group(c: &mut Criterion) {
    let matcher = Matcher::with_defaults();
    let mut group = c.benchmark_group("pair_group");

    for size in [10, 50, 100, 200] {
        let respondents = create_group(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &respondents, |b, respondents| {
            b.iter(|| matcher.pair_group(black_box(respondents), Gender::Male));
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let matcher = Matcher::with_defaults();
    let mut mixed = create_group(60);
    for (i, respondent) in mixed.iter_mut().enumerate() {
        if i % 2 == 0 {
            respondent.gender = "F".to_string();
        }
    }

    c.bench_function("run_60_mixed", |b| {
        b.iter(|| matcher.run(black_box(&mixed)).unwrap());
    });
}

criterion_group!(benches, bench_pair_group, bench_full_run);
criterion_main!(benches);
