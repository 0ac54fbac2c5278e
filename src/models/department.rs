//! Departments and shift activities.
//!
//! Departments group activities into the rows of the scheduling matrix.
//! A shift stores its department as a first-class field resolved at
//! creation time; classification never relies on reverse lookup from the
//! activity label.

use serde::{Deserialize, Serialize};

/// A department a shift or employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Floor service: waiters, runners, service leads.
    Service,
    /// Kitchen: cooks, kitchen hands, dishwashers.
    Kitchen,
    /// Bar: bartenders, barbacks.
    Bar,
    /// Storage and facility work.
    Logistics,
    /// Entrance: security and cloakroom.
    Entrance,
    /// Management: office and planning.
    Management,
    /// Fallback for roles no mapping entry recognises.
    Other,
}

impl Department {
    /// All departments shown as rows of the scheduling matrix.
    pub const ALL: [Department; 7] = [
        Department::Service,
        Department::Kitchen,
        Department::Bar,
        Department::Logistics,
        Department::Entrance,
        Department::Management,
        Department::Other,
    ];

    /// The standard activities offered for this department.
    ///
    /// Any activity outside this list is captured as
    /// [`Activity::Specified`] with free-text detail.
    pub fn activities(&self) -> &'static [&'static str] {
        match self {
            Department::Service => &["Waiter", "Runner", "Service Lead"],
            Department::Kitchen => &["Cook", "Kitchen Hand", "Dishwasher"],
            Department::Bar => &["Bartender", "Barback"],
            Department::Logistics => &["Storekeeper", "Cleaning"],
            Department::Entrance => &["Security", "Cloakroom"],
            Department::Management => &["Office", "Planning"],
            Department::Other => &["General"],
        }
    }

    /// Resolves a free-text role tag to a department.
    ///
    /// The mapping is an explicit table over known role spellings; anything
    /// unrecognised lands in [`Department::Other`] rather than being
    /// silently misfiled elsewhere.
    pub fn from_role(role: &str) -> Department {
        match role.trim().to_ascii_lowercase().as_str() {
            "service" | "waiter" | "runner" | "service lead" => Department::Service,
            "kitchen" | "cook" | "chef" | "kitchen hand" | "dishwasher" => Department::Kitchen,
            "bar" | "bartender" | "barback" => Department::Bar,
            "logistics" | "storekeeper" | "warehouse" | "cleaning" | "facility" => {
                Department::Logistics
            }
            "entrance" | "security" | "cloakroom" => Department::Entrance,
            "management" | "office" | "planning" => Department::Management,
            _ => Department::Other,
        }
    }
}

/// The role performed within a single shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    /// One of the department's standard activities.
    Named {
        /// The activity label, e.g. "Waiter".
        name: String,
    },
    /// A custom activity outside the standard list.
    Specified {
        /// Free-text description of the work.
        detail: String,
    },
}

impl Activity {
    /// Convenience constructor for a standard activity.
    pub fn named(name: impl Into<String>) -> Self {
        Activity::Named { name: name.into() }
    }

    /// Convenience constructor for a custom activity.
    pub fn specified(detail: impl Into<String>) -> Self {
        Activity::Specified {
            detail: detail.into(),
        }
    }

    /// The display label of this activity.
    pub fn label(&self) -> &str {
        match self {
            Activity::Named { name } => name,
            Activity::Specified { detail } => detail,
        }
    }
}
