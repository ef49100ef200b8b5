//! Prepared category labels.
//!
//! Labels are discriminated once, when a record's category field is split,
//! so resolution switches over a closed set of cases.

use crate::taxonomy::CategoryLabel;

/// Label that expands to the interacting/multiple galaxy pair.
pub const INTERACTING_GALAXY: &str = "Galaxy > Interacting";

/// Labels that always classify with the `C` distance letter.
pub const MAGELLANIC_CLOUD_LABELS: [&str; 2] =
    ["Galaxy > Magellanic Clouds", "Galaxy > Magellanic Cloud"];

pub fn is_magellanic_cloud(label: &str) -> bool {
    MAGELLANIC_CLOUD_LABELS.contains(&label)
}

/// Control labels that resolve to no code at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Miscellaneous,
    Unknown,
}

impl Sentinel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Miscellaneous" => Some(Self::Miscellaneous),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miscellaneous => "Miscellaneous",
            Self::Unknown => "unknown",
        }
    }
}

/// One informal category label, classified for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreparedLabel {
    /// `Miscellaneous` or `unknown`: blanks the whole record.
    Sentinel(Sentinel),
    /// `Galaxy > Interacting`: fixed two-code expansion.
    Interacting,
    /// Ordinary label resolved through the reference tables.
    Lookup(CategoryLabel),
}

impl PreparedLabel {
    pub fn from_label(label: &str) -> Self {
        if let Some(sentinel) = Sentinel::from_label(label) {
            Self::Sentinel(sentinel)
        } else if label == INTERACTING_GALAXY {
            Self::Interacting
        } else {
            Self::Lookup(CategoryLabel::new(label))
        }
    }

    /// The label text as it appeared in the source field.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sentinel(sentinel) => sentinel.as_str(),
            Self::Interacting => INTERACTING_GALAXY,
            Self::Lookup(label) => label.as_str(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel(_))
    }
}
