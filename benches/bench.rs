// Criterion benchmarks for Labour Hub

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use labour_hub::core::{JobMatcher, distance::haversine_distance};
use labour_hub::models::{Coordinates, FarmOwner, Job, JobFilter, JobLocation, Payment, PaymentType, WorkType};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

const DELHI: Coordinates = Coordinates { lat: 28.6139, lng: 77.2090 };

fn create_job(id: usize, lat: f64, lng: f64) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: format!("Job {}", id),
        work_type: WorkType::ALL[id % WorkType::ALL.len()],
        location: JobLocation::new(Coordinates::new(lat, lng), format!("Farm {}", id)),
        date_time: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap().and_hms_opt(8, 0, 0).unwrap(),
        payment: Payment {
            amount: 100 + (id % 20) as u32 * 50,
            payment_type: PaymentType::Daily,
        },
        notes: String::new(),
        farm_owner: FarmOwner::default(),
        applicants: vec![],
        created_at: Utc::now(),
    }
}

fn create_board(count: usize) -> Vec<Job> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.003) % 1.0;
            let lng_offset = (i as f64 * 0.007) % 1.0;
            create_job(i, DELHI.lat + lat_offset, DELHI.lng - lng_offset)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(28.6139),
                black_box(77.2090),
                black_box(28.7041),
                black_box(77.1025),
            )
        });
    });
}

fn bench_find_jobs(c: &mut Criterion) {
    let matcher = JobMatcher::default();
    let filter = JobFilter {
        search: "job".to_string(),
        min_payment: Some("200".to_string()),
        ..JobFilter::default()
    };

    let mut group = c.benchmark_group("find_jobs");

    for job_count in [10, 100, 1000].iter() {
        let jobs = create_board(*job_count);

        group.bench_with_input(
            BenchmarkId::new("with_location", job_count),
            job_count,
            |b, _| {
                b.iter(|| matcher.find_jobs(black_box(&jobs), black_box(Some(DELHI)), black_box(&filter)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("without_location", job_count),
            job_count,
            |b, _| {
                b.iter(|| matcher.find_jobs(black_box(&jobs), black_box(None), black_box(&filter)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_find_jobs);

criterion_main!(benches);
