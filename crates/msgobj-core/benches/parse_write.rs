use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use msgobj_core::{from_str, to_string, Message, MessageArray, MessageObject};

/// A lobby snapshot with `players` entries, each a small named object.
fn make_lobby(players: usize) -> Message {
    let mut roster = MessageArray::named("Roster").unwrap();
    for i in 0..players {
        let player = MessageObject::named("Player")
            .unwrap()
            .with("id", i as i64)
            .unwrap()
            .with("nick", format!("player_{i}"))
            .unwrap()
            .with("rating", 1500.0 + i as f64 * 0.25)
            .unwrap()
            .with("ready", i % 2 == 0)
            .unwrap()
            .with("team", if i % 3 == 0 { None } else { Some("red") })
            .unwrap();
        roster.add(player);
    }
    MessageObject::named("LobbyState")
        .unwrap()
        .with("lobby", "main \"arena\"")
        .unwrap()
        .with("players", roster)
        .unwrap()
        .into()
}

/// Alternating arrays and objects, `depth` levels deep.
fn make_nested(depth: usize) -> Message {
    let mut obj = MessageObject::named("Leaf").unwrap().with("v", 1).unwrap();
    for _ in 0..depth {
        let arr = MessageArray::anonymous().with(obj).with(0.5);
        obj = MessageObject::named("N").unwrap().with("c", arr).unwrap();
    }
    obj.into()
}

fn criterion_benchmark(c: &mut Criterion) {
    let cases = [
        ("lobby_10", make_lobby(10)),
        ("lobby_1000", make_lobby(1000)),
        ("nested_100", make_nested(100)),
    ];

    let mut group = c.benchmark_group("write");
    for (name, message) in &cases {
        let len = to_string(message).unwrap().len();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), message, |b, m| {
            b.iter(|| to_string(black_box(m)).unwrap())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parse");
    for (name, message) in &cases {
        let text = to_string(message).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, t| {
            b.iter(|| from_str(black_box(t)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
