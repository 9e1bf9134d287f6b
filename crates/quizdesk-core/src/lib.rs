//! quizdesk-core: quiz store, session runner, and score reports.
//!
//! This crate holds everything the `quizdesk` binary needs that is not
//! console interaction: the data model, CSV persistence for quizzes and
//! reports, question selection and grading, and configuration.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod statistics;
pub mod store;
