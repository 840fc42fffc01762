use chrono::{DateTime, Utc};

pub type ElementId = u64;

/// Banner category derived from the modifier class riding alongside the
/// banner marker (`alert-success`, `alert-danger`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl BannerKind {
    /// Derive the banner kind from an element's class list.
    /// Returns None when no modifier class is present.
    pub fn from_classes(classes: &[String]) -> Option<Self> {
        for class in classes {
            match class.as_str() {
                "alert-success" => return Some(Self::Success),
                "alert-danger" => return Some(Self::Danger),
                "alert-warning" => return Some(Self::Warning),
                "alert-info" => return Some(Self::Info),
                _ => {}
            }
        }
        None
    }

    /// Get the display name for this banner kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// Outcome of one element's dismissal attempt during a sweep.
#[derive(Clone, Debug)]
pub struct DismissalRecord {
    pub element: ElementId,
    /// Rendered error when the dismissal failed, None on success.
    pub error: Option<String>,
}

/// Result of a dismissal sweep over the page.
#[derive(Clone, Debug)]
pub struct SweepReport {
    /// Elements matching the marker at fire time.
    pub matched: usize,
    pub dismissed: usize,
    pub failed: usize,
    pub completed_at: DateTime<Utc>,
    pub records: Vec<DismissalRecord>,
}
