use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// Whether the space is open.
///
/// Numeric codes follow the listener convention: `1` is open, `0` is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Closed = 0,
    Open = 1,
}

impl Status {
    /// Every member, in code order.
    pub const ALL: [Self; 2] = [Self::Closed, Self::Open];

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks a canonical name up in [`Status::ALL`]. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}
