//! Gradebook operations over a record store.
//!
//! [`Gradebook`] wires the pure aggregation functions to a [`RecordStore`]:
//! reads always re-fetch and recompute, writes validate before touching the
//! store. [`ClassDashboard`] keeps the last good class report and only
//! replaces it after a successful write and re-fetch.
//!
//! [`RecordStore`]: crate::store::RecordStore

mod dashboard;
mod gradebook;

pub use dashboard::ClassDashboard;
pub use gradebook::{Clock, Gradebook, parse_score};
