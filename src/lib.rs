// Library target for integration tests and criterion benchmarks.
// The quiz core has no terminal dependencies, so it is the only module tree
// here. The binary imports it from this crate instead of re-declaring it,
// which keeps one copy of every quiz type.
pub mod quiz;
