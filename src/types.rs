//! Patient record and priority model shared across the intake system.

use std::fmt;

/// Urgency level assigned at intake. Lower level is served first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Serious = 1,
    Medium = 2,
    General = 3,
}

impl Priority {
    /// Parse a numeric level; `None` for anything outside 1..=3.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Priority::Serious),
            2 => Some(Priority::Medium),
            3 => Some(Priority::General),
            _ => None,
        }
    }

    /// Numeric level as entered at intake.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Lowercase label used in roster listings.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Serious => "serious",
            Priority::Medium => "medium",
            Priority::General => "general",
        }
    }
}

/// One patient's intake data plus assigned priority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub symptoms: String,
    pub contact: String,
    /// Assigned by the intake validator; read-only once the record exists.
    pub priority: Priority,
}

impl Patient {
    /// Construct a record from the five intake fields.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        symptoms: impl Into<String>,
        contact: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            symptoms: symptoms.into(),
            contact: contact.into(),
            priority,
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient Name: {}, Age: {}, Symptoms: {}, Contact: {}, Priority: {} ({})",
            self.name,
            self.age,
            self.symptoms,
            self.contact,
            self.priority.level(),
            self.priority.label()
        )
    }
}
