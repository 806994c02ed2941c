//! Canonical festival record as exchanged with the front-end.
//!
//! Wire shape:
//! { "name": "春节", "days": 12, "type": "农历节日" }

use std::fmt;

/// Name the backend reports when nothing falls inside its search window.
pub const NONE_NAME: &str = "无";

/// Fields are private; values come from `Festival::new` or the codec.
/// `codec::encode` is its only serializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Festival {
    name: String,
    days: i64,
    kind: String,
}

/// Labels the backend emits in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FestivalKind {
    Solar,
    Lunar,
    SolarTerm,
}

impl FestivalKind {
    pub const ALL: [FestivalKind; 3] = [Self::Solar, Self::Lunar, Self::SolarTerm];

    pub fn label(self) -> &'static str {
        match self {
            Self::Solar => "公历节日",
            Self::Lunar => "农历节日",
            Self::SolarTerm => "节气",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl fmt::Display for FestivalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Festival {
    pub fn new(name: impl Into<String>, days: i64, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days,
            kind: kind.into(),
        }
    }

    pub fn of_kind(name: impl Into<String>, days: i64, kind: FestivalKind) -> Self {
        Self::new(name, days, kind.label())
    }

    /// The "no upcoming festival" record.
    pub fn none() -> Self {
        Self::new(NONE_NAME, 0, "")
    }

    pub fn is_none(&self) -> bool {
        self.name == NONE_NAME && self.days == 0 && self.kind.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    /// Raw `type` text, unconstrained.
    pub fn kind_label(&self) -> &str {
        &self.kind
    }

    /// `None` for labels the backend does not currently emit.
    pub fn classify(&self) -> Option<FestivalKind> {
        FestivalKind::from_label(&self.kind)
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_days(&self, days: i64) -> Self {
        Self {
            days,
            ..self.clone()
        }
    }

    pub fn with_kind(&self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self.clone()
        }
    }
}
