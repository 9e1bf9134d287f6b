use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdesk_core::report::parse_report;
use quizdesk_core::store::parse_quiz;

fn bench_parse_quiz(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quiz");

    let small = "Question,Answer\n\
\"What is the capital of France?\",\"Paris\"\n\
\"2 + 2\",\"4\"\n";

    let escaped = "Question,Answer\n\
\"Say \"\"hi\"\", politely\",\"hello, friend\"\n\
\"Name three colors\",\"red, green, blue\"\n";

    let large = {
        let mut s = String::from("Question,Answer\n");
        for i in 0..500 {
            s.push_str(&format!("\"What is {i} squared?\",\"{}\"\n", i * i));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| parse_quiz("small", black_box(small.as_bytes())))
    });

    group.bench_function("escaped", |b| {
        b.iter(|| parse_quiz("escaped", black_box(escaped.as_bytes())))
    });

    group.bench_function("large", |b| {
        b.iter(|| parse_quiz("large", black_box(large.as_bytes())))
    });

    group.finish();
}

fn bench_parse_report(c: &mut Criterion) {
    let report = {
        let mut s = String::from("Student Name,Marks Obtained,Total Marks,Percentage\n");
        for i in 0..1000 {
            let score = i % 6;
            s.push_str(&format!(
                "student{i},{score},5,{:.2}%\n",
                score as f64 * 20.0
            ));
        }
        s.push_str("Cumulative Statistics\n");
        s
    };

    c.bench_function("parse_report", |b| {
        b.iter(|| parse_report(black_box(&report)))
    });
}

criterion_group!(benches, bench_parse_quiz, bench_parse_report);
criterion_main!(benches);
