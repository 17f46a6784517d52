//! Query-path throughput over a synthetic corpus.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use norma_core::config::NormaConfig;
use norma_index::{HashingEmbedder, SourceDocument};
use norma_retrieval::RetrievalEngine;
use test_fixtures::{page, FixtureExtractor};

fn synthetic_engine(articles: usize) -> RetrievalEngine {
    let mut ex = FixtureExtractor::new();
    let mut text = String::new();
    for n in 1..=articles {
        text.push_str(&format!(
            "Artículo {n} Los estudiantes del programa numero {n} deben cumplir los requisitos \
             de permanencia establecidos por el consejo y presentar los documentos indicados \
             dentro del plazo ordinario correspondiente al periodo lectivo. "
        ));
    }
    ex.insert("reglamento_sintetico.pdf", vec![page(1, &text)]);

    let engine = RetrievalEngine::new(
        Arc::new(ex),
        Arc::new(HashingEmbedder::new(256)),
        NormaConfig::default(),
    );
    engine
        .rebuild(&[SourceDocument::new(
            "reglamento_sintetico.pdf",
            "reglamento_sintetico.pdf",
        )])
        .unwrap();
    engine
}

fn bench_query(c: &mut Criterion) {
    let engine = synthetic_engine(200);
    c.bench_function("query_200_articles", |b| {
        b.iter(|| engine.query("¿Qué dice el Artículo 57?", 3).unwrap())
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let mut ex = FixtureExtractor::new();
    let mut text = String::new();
    for n in 1..=100 {
        text.push_str(&format!(
            "Artículo {n} Disposiciones sobre la materia numero {n} aplicables a todos los \
             estudiantes matriculados en el periodo lectivo vigente segun el calendario \
             academico aprobado por el consejo universitario. "
        ));
    }
    ex.insert("reglamento.pdf", vec![page(1, &text)]);
    let engine = RetrievalEngine::new(
        Arc::new(ex),
        Arc::new(HashingEmbedder::new(256)),
        NormaConfig::default(),
    );
    let docs = [SourceDocument::new("reglamento.pdf", "reglamento.pdf")];

    c.bench_function("rebuild_100_articles", |b| {
        b.iter(|| engine.rebuild(&docs).unwrap())
    });
}

criterion_group!(benches, bench_query, bench_rebuild);
criterion_main!(benches);
