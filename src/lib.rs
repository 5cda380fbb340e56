// Library target shared by the `dalquiz` binary, the integration tests and
// the criterion benchmarks.

pub mod app;
pub mod config;
pub mod event;
pub mod quiz;
pub mod ui;
