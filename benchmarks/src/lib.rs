//! Benchmarks for cc-wick live in `benches/`.
