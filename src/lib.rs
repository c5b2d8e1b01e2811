//! Payroll Schedule Engine
//!
//! This crate generates payroll pay dates: for each period it resolves the
//! EFT (funds transfer) date from the payroll's cycle and anchor settings,
//! moves it off weekends and public holidays, and derives the processing
//! date that precedes it.
//!
//! The calculation path in [`calculation`] is pure and takes every date
//! explicitly. [`config`] loads holiday calendars from YAML and [`api`]
//! exposes the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
