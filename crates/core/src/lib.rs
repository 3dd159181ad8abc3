//! Core types for two-variable linear programs reduced to a line segment.
//!
//! An equality constraint `a·x1 + b·x2 = T` collapses the feasible region of a
//! two-variable problem onto a line. Intersected with the non-negative
//! quadrant, that line is a segment between two corner points, and any linear
//! objective attains its optimum at one of them.
//!
//! This crate defines the value types that solvers and observers build on:
//!
//! - [`LinearExpr`] — `a·x1 + b·x2 + c`, evaluated at a [`Point`]
//! - [`EqualityConstraint`] — the line that defines the segment
//! - [`Bound`] — a linear inequality with a [`Relation`] and threshold
//! - [`Goal`] — minimize or maximize
//! - [`Corner`], [`CornerPoint`] — the labeled endpoints of the segment
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! # Features
//!
//! - `serde` (default) — derives `Serialize` and `Deserialize` for the value types.

mod constraint;
mod corner;
mod expr;
mod goal;
mod observer;

pub use constraint::{Bound, EqualityConstraint, Relation};
pub use corner::{Corner, CornerPoint};
pub use expr::{LinearExpr, Point};
pub use goal::Goal;
pub use observer::Observer;
