//! Backend layer: runs commands off the UI thread.

mod query_runner;

pub use query_runner::QueryRunner;
