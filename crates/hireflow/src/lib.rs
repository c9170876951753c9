//! Applicant tracking core.
//!
//! The two entry points are [`commands::AddCommandParser`], which turns an `add` command
//! line into a validated applicant, and [`storage::JsonApplicantStorage`], which moves the
//! applicant book to and from its JSON data file.

pub mod applicants;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod storage;
pub mod telemetry;
