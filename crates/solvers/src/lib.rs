//! Solvers for two-variable linear programs reduced to a line segment.
//!
//! # Solvers
//!
//! - [`segment`] — the graphical method: derive the segment endpoints from an
//!   equality constraint, check the bounds at each, and pick the best feasible
//!   endpoint

pub mod segment;
