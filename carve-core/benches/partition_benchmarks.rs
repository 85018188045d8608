//! Performance benchmarks for the chunk partitioner
//!
//! Run with: cargo bench --bench partition_benchmarks

use carve_core::annotation::Word;
use carve_core::application::{partition_by_count, partition_by_length};
use carve_core::{AnnotatedDocument, Config, ConlluAnnotator, DocumentSession, SentenceArtifact};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Right-branching sentence of `len` tokens with a comma every fifth word
fn generate_document(sentences: usize, len: usize) -> AnnotatedDocument {
    let mut builder = AnnotatedDocument::builder();
    for _ in 0..sentences {
        let words = (0..len).map(|i| {
            let head = if i == 0 { None } else { Some((i - 1) / 2) };
            if i % 5 == 4 {
                Word::new(",", head)
            } else {
                Word::new(format!("word{i}"), head)
            }
        });
        builder.push_sentence(words);
    }
    builder.build()
}

fn artifact(len: usize) -> SentenceArtifact {
    let doc = generate_document(1, len);
    SentenceArtifact::build(&doc.text, &doc.sentences[0])
}

/// Benchmark artifact construction for different sentence lengths
fn bench_artifact_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("artifact_build");

    for len in [10, 40, 160] {
        let doc = generate_document(1, len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("tokens", len), &doc, |b, doc| {
            b.iter(|| SentenceArtifact::build(black_box(&doc.text), &doc.sentences[0]));
        });
    }

    group.finish();
}

/// Benchmark both searches on a single sentence
fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for len in [10, 40, 160] {
        let artifact = artifact(len);
        group.bench_with_input(BenchmarkId::new("by_count", len), &artifact, |b, a| {
            b.iter(|| partition_by_count(black_box(a), 4));
        });
        group.bench_with_input(BenchmarkId::new("by_length", len), &artifact, |b, a| {
            b.iter(|| partition_by_length(black_box(a), 40));
        });
    }

    group.finish();
}

/// Benchmark whole documents with different thread counts
fn bench_thread_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_counts");
    let doc = generate_document(2_000, 30);

    for threads in [1, 2, 4] {
        let config = Config::builder()
            .threads(Some(threads))
            .parallel_threshold(1)
            .build()
            .unwrap();
        let mut session = DocumentSession::with_config(ConlluAnnotator::new(), config).unwrap();
        session.load_annotated(doc.clone()).unwrap();

        group.bench_with_input(BenchmarkId::new("threads", threads), &session, |b, s| {
            b.iter(|| s.to_chunks_by_length(black_box(40)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_artifact_build,
    bench_partition,
    bench_thread_counts
);
criterion_main!(benches);
