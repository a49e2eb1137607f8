//! Staff roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role of the staff member who performed a service.
///
/// Nail services are always handled by the nail technician; hair services
/// are split between the senior and junior stylist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Senior hair stylist.
    SeniorStylist,
    /// Junior hair stylist.
    JuniorStylist,
    /// Nail technician.
    NailTech,
}

impl StaffRole {
    /// All roles in report order.
    pub const ALL: [StaffRole; 3] = [
        StaffRole::SeniorStylist,
        StaffRole::JuniorStylist,
        StaffRole::NailTech,
    ];

    /// Returns the label written into the Staff column of reports.
    ///
    /// ```
    /// use salon_sim::models::StaffRole;
    ///
    /// assert_eq!(StaffRole::NailTech.label(), "Nail Tech");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::SeniorStylist => "Senior Stylist",
            StaffRole::JuniorStylist => "Junior Stylist",
            StaffRole::NailTech => "Nail Tech",
        }
    }

    /// Returns the short key used to prefix per-role summary metrics.
    pub fn key(&self) -> &'static str {
        match self {
            StaffRole::SeniorStylist => "senior",
            StaffRole::JuniorStylist => "junior",
            StaffRole::NailTech => "nail_tech",
        }
    }

    /// Returns the short label used in per-role summary rows ("Senior Sales").
    pub fn short_label(&self) -> &'static str {
        match self {
            StaffRole::SeniorStylist => "Senior",
            StaffRole::JuniorStylist => "Junior",
            StaffRole::NailTech => "Nail Tech",
        }
    }

    /// Returns true for the nail technician.
    pub fn is_nail_tech(&self) -> bool {
        *self == StaffRole::NailTech
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_role_serialization() {
        assert_eq!(
            serde_json::to_string(&StaffRole::SeniorStylist).unwrap(),
            "\"senior_stylist\""
        );
        assert_eq!(
            serde_json::to_string(&StaffRole::JuniorStylist).unwrap(),
            "\"junior_stylist\""
        );
        assert_eq!(
            serde_json::to_string(&StaffRole::NailTech).unwrap(),
            "\"nail_tech\""
        );
    }

    #[test]
    fn test_is_nail_tech() {
        assert!(StaffRole::NailTech.is_nail_tech());
        assert!(!StaffRole::SeniorStylist.is_nail_tech());
        assert!(!StaffRole::JuniorStylist.is_nail_tech());
    }

    #[test]
    fn test_labels_match_report_columns() {
        let labels: Vec<&str> = StaffRole::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Senior Stylist", "Junior Stylist", "Nail Tech"]);
    }
}
