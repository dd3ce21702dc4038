//! Calendar view modes.

use serde::{Deserialize, Serialize};

/// Which rendering the calendar page is showing.
///
/// `Week` and `Day` are accepted and stored but render through the month
/// grid for now; dedicated layouts are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Agenda,
    Week,
    Day,
}
