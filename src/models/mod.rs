//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod department;
mod employee;
mod roster;
mod shift;
mod week;

pub use department::{Activity, Department};
pub use employee::Employee;
pub use roster::{EmployeeShifts, Roster, RosterKey};
pub use shift::{Shift, ShiftId};
pub use week::IsoYearWeek;

pub(crate) use shift::hhmm;
