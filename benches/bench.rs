// Criterion benchmarks for the LifeLink pure core

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;

use lifelink::core::{count_by, filter_eligible, is_eligible};
use lifelink::models::Donor;

fn create_donor(id: usize) -> Donor {
    let groups = ["O+", "O-", "A+", "A-", "B+", "B-", "AB+", "AB-"];
    let conditions = if id % 7 == 0 {
        vec!["defer".to_string()]
    } else {
        vec![]
    };

    Donor {
        id: Uuid::new_v4(),
        name: format!("Donor {}", id),
        blood_group: groups[id % groups.len()].to_string(),
        last_donation: (Utc::now() - Duration::days((id % 200) as i64)).date_naive(),
        health_conditions: conditions,
        email: Some(format!("donor{}@example.com", id)),
        phone: None,
    }
}

fn bench_is_eligible(c: &mut Criterion) {
    let donor = create_donor(1);
    let now = Utc::now();

    c.bench_function("is_eligible", |b| {
        b.iter(|| is_eligible(black_box(&donor), black_box(now)));
    });
}

fn bench_filter_eligible(c: &mut Criterion) {
    let now = Utc::now();
    let mut group = c.benchmark_group("filter_eligible");

    for donor_count in [10, 100, 1000, 10000].iter() {
        let donors: Vec<Donor> = (0..*donor_count).map(create_donor).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(donor_count),
            &donors,
            |b, donors| {
                b.iter(|| filter_eligible(black_box(donors.clone()), black_box(now)));
            },
        );
    }

    group.finish();
}

fn bench_count_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_by_blood_group");

    for donor_count in [100, 1000, 10000].iter() {
        let donors: Vec<Donor> = (0..*donor_count).map(create_donor).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(donor_count),
            &donors,
            |b, donors| {
                b.iter(|| count_by(black_box(donors), |d| d.blood_group.as_str()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_is_eligible, bench_filter_eligible, bench_count_by);
criterion_main!(benches);
