//! Rendering simulation results.
//!
//! [`build_workbook`] turns a [`SimulationReport`](crate::simulation::SimulationReport)
//! into four typed sheets. [`write_workbook_csv`] and [`write_report_json`]
//! put them on disk.

mod layout;
mod workbook;
mod writer;

pub use layout::{AMOUNT_HEADING, build_workbook, incentive_formula};
pub use workbook::{Cell, Sheet, Workbook};
pub use writer::{write_report_json, write_workbook_csv};
