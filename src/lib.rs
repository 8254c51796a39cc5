//! Grade and Attendance Aggregation Engine
//!
//! This crate turns sparse per-assignment scores and per-day attendance
//! marks into percentages, letter grades and class rollups, the same way for
//! the gradebook grid, the student dashboard, the teacher summary and the
//! parent report card.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod session;
pub mod store;
