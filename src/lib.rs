//! rosterdb - an in-memory Teacher record store driven by a console menu
//!
//! - `roster`: the record type and the head-first record store
//! - `cli`: arguments, configuration, input provider and menu dispatch
//! - `observability`: structured JSON logging

pub mod cli;
pub mod observability;
pub mod roster;
