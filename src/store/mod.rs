//! In-memory document stores for rosters and employee master data.
//!
//! The roster store mirrors the contract of the external realtime document
//! tree: point writes at the shift level, whole-snapshot reads, and a
//! subscription channel through which every writer observes its own writes.

mod directory;
mod roster_store;

pub use directory::EmployeeDirectory;
pub use roster_store::RosterStore;
