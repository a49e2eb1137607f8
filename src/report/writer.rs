//! Writing reports to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{SimError, SimResult};
use crate::simulation::SimulationReport;

use super::workbook::Workbook;

/// Writes each sheet as `<dir>/<sheet name>.csv`, creating `dir` if needed.
///
/// Returns the written paths in sheet order.
pub fn write_workbook_csv<P: AsRef<Path>>(workbook: &Workbook, dir: P) -> SimResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;

    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let path = dir.join(format!("{}.csv", sheet.name));
        let mut writer = csv::WriterBuilder::new()
            .flexible(false)
            .from_path(&path)
            .map_err(|e| write_error(&path, e))?;

        for row in sheet.grid() {
            writer
                .write_record(row.iter().map(|cell| cell.render()))
                .map_err(|e| write_error(&path, e))?;
        }
        writer.flush().map_err(|e| write_error(&path, e))?;
        written.push(path);
    }

    info!(dir = %dir.display(), sheets = written.len(), "Workbook written");
    Ok(written)
}

/// Writes the full report as pretty-printed JSON.
pub fn write_report_json<P: AsRef<Path>>(report: &SimulationReport, path: P) -> SimResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report).map_err(|e| write_error(path, e))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    fs::write(path, json).map_err(|e| write_error(path, e))?;

    info!(path = %path.display(), report_id = %report.report_id, "Report written");
    Ok(())
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> SimError {
    SimError::ReportWrite {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{CompensationSettings, SimulationConfig};
    use crate::models::Policy;
    use crate::report::build_workbook;
    use crate::simulation::{SimulationParams, run_simulation};

    fn report(policy: Policy) -> SimulationReport {
        run_simulation(
            &Catalog::salon_default(),
            &CompensationSettings::default(),
            SimulationParams::from_config(&SimulationConfig::default(), policy),
        )
        .unwrap()
    }

    #[test]
    fn test_writes_one_csv_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let report = report(Policy::FlatSplit);
        let workbook = build_workbook(&report);

        let paths = write_workbook_csv(&workbook, dir.path().join("out")).unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["PriceList.csv", "Settings.csv", "Transactions.csv", "Summary.csv"]
        );

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&paths[2])
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), report.transactions.len() + 1);
        assert_eq!(&rows[0][0], "Date");
        assert_eq!(&rows[1][6], "=IF(E2=\"Nail Tech\",0,F2*Settings!$B$1)");
    }

    #[test]
    fn test_summary_rows_are_padded() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = build_workbook(&report(Policy::TieredIncentive));

        let paths = write_workbook_csv(&workbook, dir.path()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&paths[3])
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|r| r.len() == 6));
        assert_eq!(&rows[18][1], "=B2-B18");
    }

    #[test]
    fn test_unwritable_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let workbook = build_workbook(&report(Policy::FlatSplit));
        let result = write_workbook_csv(&workbook, blocker.join("out"));

        assert!(matches!(result, Err(SimError::ReportWrite { .. })));
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = report(Policy::TieredIncentive);

        write_report_json(&report, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: SimulationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }
}
