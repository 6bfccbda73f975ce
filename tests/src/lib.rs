//! Cross-crate integration tests exercising the full compile-and-scan
//! pipeline alongside the exact-substring engines.

#[cfg(test)]
mod engine_equivalence;
#[cfg(test)]
mod matcher_parity;
