use criterion::{Criterion, criterion_group, criterion_main};
use kvc_model::{ModelKv, Value, decode, model};
use smol_str::SmolStr;
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

model! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Profile {
        pub bio: SmolStr,
        pub avatar: SmolStr,
    }
}

model! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct User {
        pub id: SmolStr,
        pub name: SmolStr,
        pub age: i64,
        pub score: f64,
        pub active: bool,
        pub nickname: Option<SmolStr>,
        pub profile: Option<Profile>,
    }
}

fn bench_user() -> User {
    User {
        id: SmolStr::from("user:abc123"),
        name: SmolStr::from("Alice"),
        age: 28,
        score: 99.5,
        active: true,
        nickname: None,
        profile: Some(Profile {
            bio: SmolStr::from("Software engineer"),
            avatar: SmolStr::from("https://example.com/avatar.jpg"),
        }),
    }
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion) {
    let user = bench_user();
    c.bench_function("get_scalar_by_key", |b| {
        b.iter(|| black_box(user.get(black_box("score"))))
    });
    c.bench_function("get_nested_by_key", |b| {
        b.iter(|| black_box(user.get(black_box("profile"))))
    });
}

fn bench_set(c: &mut Criterion) {
    let mut user = bench_user();
    c.bench_function("set_scalar_by_key", |b| {
        b.iter(|| user.set_value(black_box("age"), Value::from(29i64)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let user = bench_user();
    c.bench_function("encode", |b| b.iter(|| black_box(user.encode())));

    let map = user.encode();
    c.bench_function("decode", |b| {
        b.iter(|| black_box(decode::<User>(black_box(&map)).unwrap()))
    });
}

criterion_group!(benches, bench_get, bench_set, bench_codec);
criterion_main!(benches);
