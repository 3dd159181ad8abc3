//! Reusable observers for the segment-lp solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing the right capabilities.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasCorner`], [`HasObjective`], [`HasFeasibility`], [`CanStopEarly`],
//!   [`CanAssumeInfeasible`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — records each endpoint evaluation as a `tracing` event
//!
//! [`Observer`]: segment_lp_core::Observer
//! [`HasCorner`]: traits::HasCorner
//! [`HasObjective`]: traits::HasObjective
//! [`HasFeasibility`]: traits::HasFeasibility
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeInfeasible`]: traits::CanAssumeInfeasible

pub mod traits;

mod tracing_observer;

pub use tracing_observer::TracingObserver;
