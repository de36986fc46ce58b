//! Integration tests and benchmarks live under `tests/` and `benches/`.
