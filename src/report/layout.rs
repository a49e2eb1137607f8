//! Sheet layouts for each pay policy.
//!
//! Every policy gets the same four sheets: `PriceList`, `Settings`,
//! `Transactions` and `Summary`. Summary figures are written as live
//! formulas over the other sheets, each paired with the value the pay model
//! computed so the two can be checked against each other.

use rust_decimal::Decimal;

use crate::compensation::{IncentiveSchedule, split_transaction};
use crate::config::CompensationSettings;
use crate::models::{CompensationBreakdown, Policy, StaffRole, Transaction};
use crate::simulation::SimulationReport;

use super::workbook::{Cell, Sheet, Workbook};

/// Heading of the summary amount column.
pub const AMOUNT_HEADING: &str = "Amount (PHP)";

/// Lays out the full workbook for a finished run.
///
/// # Example
///
/// ```
/// use salon_sim::catalog::Catalog;
/// use salon_sim::config::{CompensationSettings, SimulationConfig};
/// use salon_sim::models::Policy;
/// use salon_sim::report::build_workbook;
/// use salon_sim::simulation::{run_simulation, SimulationParams};
///
/// let params = SimulationParams::from_config(&SimulationConfig::default(), Policy::FlatSplit);
/// let report = run_simulation(&Catalog::salon_default(), &CompensationSettings::default(), params).unwrap();
/// let workbook = build_workbook(&report);
///
/// let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["PriceList", "Settings", "Transactions", "Summary"]);
/// ```
pub fn build_workbook(report: &SimulationReport) -> Workbook {
    let policy = report.params.policy;
    let settings = &report.settings;
    let breakdown = &report.breakdown;

    let (settings_sheet, summary) = match policy {
        Policy::FlatSplit => (
            flat_split_settings(settings),
            flat_split_summary(settings, breakdown),
        ),
        Policy::TieredIncentive => (
            tiered_settings(settings),
            tiered_summary(settings, breakdown),
        ),
    };

    Workbook {
        sheets: vec![
            price_list(report),
            settings_sheet,
            transactions(policy, settings, &report.transactions),
            summary,
        ],
    }
}

fn price_list(report: &SimulationReport) -> Sheet {
    let mut sheet = Sheet::new("PriceList");
    sheet.push_row(vec![
        Cell::text("Category"),
        Cell::text("Service"),
        Cell::text("Price"),
    ]);
    for service in &report.price_list {
        sheet.push_row(vec![
            Cell::text(service.category.label()),
            Cell::text(service.name.clone()),
            Cell::Number(service.price),
        ]);
    }
    sheet
}

fn transactions(policy: Policy, settings: &CompensationSettings, rows: &[Transaction]) -> Sheet {
    let mut sheet = Sheet::new("Transactions");
    let mut header = vec![
        Cell::text("Date"),
        Cell::text("Day"),
        Cell::text("Service"),
        Cell::text("Category"),
        Cell::text("Staff"),
        Cell::text("Price"),
    ];
    match policy {
        Policy::FlatSplit => {
            header.push(Cell::text(format!(
                "Staff Share ({})",
                percent(settings.flat_split.staff_rate)
            )));
            header.push(Cell::text(format!(
                "Owner Share ({})",
                percent(settings.flat_split.owner_rate)
            )));
        }
        Policy::TieredIncentive => header.push(Cell::text(format!(
            "Commission ({})",
            percent(settings.tiered_incentive.commission_rate)
        ))),
    }
    sheet.push_row(header);

    let nail_tech = StaffRole::NailTech.label();
    for (i, tx) in rows.iter().enumerate() {
        // header occupies row 1
        let r = i + 2;
        let mut cells = vec![
            Cell::Date(tx.date),
            Cell::text(tx.weekday.clone()),
            Cell::text(tx.service.clone()),
            Cell::text(tx.category.label()),
            Cell::text(tx.staff.label()),
            Cell::Number(tx.price),
        ];
        match policy {
            Policy::FlatSplit => {
                let split = split_transaction(tx.staff, tx.price, &settings.flat_split);
                cells.push(Cell::formula(
                    format!("=IF(E{r}=\"{nail_tech}\",0,F{r}*Settings!$B$1)"),
                    split.staff_share,
                ));
                cells.push(Cell::formula(
                    format!("=IF(E{r}=\"{nail_tech}\",F{r},F{r}*Settings!$B$2)"),
                    split.owner_share,
                ));
            }
            Policy::TieredIncentive => {
                let rate = settings.tiered_incentive.commission_rate;
                cells.push(Cell::formula(
                    format!("=F{r}*{}", rate.normalize()),
                    tx.price * rate,
                ));
            }
        }
        sheet.push_row(cells);
    }
    sheet
}

fn flat_split_settings(settings: &CompensationSettings) -> Sheet {
    let mut sheet = Sheet::new("Settings");
    let rows = [
        (1, "Staff Share %", settings.flat_split.staff_rate),
        (2, "Owner Share %", settings.flat_split.owner_rate),
        (4, "Fixed Rent", settings.overhead.rent),
        (5, "Electricity", settings.overhead.electricity),
        (6, "Water", settings.overhead.water),
        (8, "Product Cost % of Sales", settings.product_cost_rate),
        (
            11,
            "Nail Tech Min Monthly Wage",
            settings.flat_split.nail_tech_min_wage,
        ),
    ];
    for (row, label, value) in rows {
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::Number(value));
    }
    sheet
}

fn tiered_settings(settings: &CompensationSettings) -> Sheet {
    let mut sheet = Sheet::new("Settings");
    let salaries = &settings.tiered_incentive.base_salaries;
    let rows = [
        (1, "Product Cost % of Sales", settings.product_cost_rate),
        (2, "Fixed Rent", settings.overhead.rent),
        (3, "Electricity", settings.overhead.electricity),
        (4, "Water", settings.overhead.water),
        (6, "Senior Base Salary", salaries.senior_stylist),
        (7, "Junior Base Salary", salaries.junior_stylist),
        (8, "Nail Tech Base Salary", salaries.nail_tech),
    ];
    for (row, label, value) in rows {
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::Number(value));
    }
    sheet
}

fn flat_split_summary(settings: &CompensationSettings, breakdown: &CompensationBreakdown) -> Sheet {
    let m = |key: &str| breakdown.metric(key).unwrap_or(Decimal::ZERO);
    let mut sheet = summary_sheet();

    let lines = [
        (2, "Total Sales", "=SUM(Transactions!F:F)", "total_sales"),
        (
            3,
            "Total Staff Salary (Commissions)",
            "=SUM(Transactions!G:G)",
            "total_staff_commission",
        ),
        (4, "Owner Gross Share", "=SUM(Transactions!H:H)", "owner_gross_share"),
        (5, "Product Cost", "=B2*Settings!$B$8", "product_cost"),
        (
            6,
            "Fixed Salon Expenses (Rent+Utilities)",
            "=Settings!$B$4+Settings!$B$5+Settings!$B$6",
            "fixed_expenses",
        ),
        (7, "Total Expenses", "=B14+B5+B6", "total_expenses"),
        (8, "Owner Net Income", "=B2-B7", "owner_net_income"),
        (
            11,
            "Nail Tech Min Monthly Wage (Setting)",
            "=Settings!$B$11",
            "nail_tech_min_wage",
        ),
        (12, "Nail Tech Commission (0%)", "0", "nail_tech_commission"),
        (13, "Nail Tech Actual Pay", "=MAX(B11,B12)", "nail_tech_actual_pay"),
        (
            14,
            "Adjusted Total Staff Salary",
            "=B3-B12+B13",
            "adjusted_total_staff_salary",
        ),
    ];
    for (row, label, expr, key) in lines {
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::formula(expr, m(key)));
    }

    sheet.set(17, 'A', Cell::text("Staff"));
    sheet.set(17, 'B', Cell::text("Total Sales"));
    sheet.set(
        17,
        'C',
        Cell::text(format!(
            "Commission ({})",
            percent(settings.flat_split.staff_rate)
        )),
    );
    for (offset, pay) in breakdown.staff.iter().enumerate() {
        let row = 18 + offset;
        let label = pay.role.label();
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::formula(sumif(label, 'F'), pay.sales));
        let commission = if pay.role.is_nail_tech() {
            "0".to_string()
        } else {
            format!("=B{row}*Settings!$B$1")
        };
        sheet.set(row, 'C', Cell::formula(commission, pay.commission));
    }
    sheet
}

fn tiered_summary(settings: &CompensationSettings, breakdown: &CompensationBreakdown) -> Sheet {
    let m = |key: &str| breakdown.metric(key).unwrap_or(Decimal::ZERO);
    let tiered = &settings.tiered_incentive;
    let commission_label = percent(tiered.commission_rate);
    let mut sheet = summary_sheet();

    let head = [
        (2, "Total Sales", "=SUM(Transactions!F:F)".to_string(), "total_sales"),
        (3, "Product Cost", "=B2*Settings!$B$1".to_string(), "product_cost"),
        (
            4,
            "Fixed Salon Expenses (Rent+Utilities)",
            "=Settings!$B$2+Settings!$B$3+Settings!$B$4".to_string(),
            "fixed_expenses",
        ),
    ];
    for (row, label, expr, key) in head {
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::formula(expr, m(key)));
    }

    // Rows 5-7 sales, 8-10 base salary, 11-13 incentive, 14-16 commission.
    for (offset, role) in StaffRole::ALL.iter().enumerate() {
        let key = role.key();
        let short = role.short_label();
        let sales_row = 5 + offset;
        let base_row = 8 + offset;
        let incentive_row = 11 + offset;
        let commission_row = 14 + offset;

        sheet.set(sales_row, 'A', Cell::text(format!("{short} Sales")));
        sheet.set(
            sales_row,
            'B',
            Cell::formula(sumif(role.label(), 'F'), m(&format!("{key}_sales"))),
        );

        sheet.set(base_row, 'A', Cell::text(format!("{short} Base Salary")));
        sheet.set(
            base_row,
            'B',
            Cell::formula(
                format!("=Settings!$B${}", 6 + offset),
                m(&format!("{key}_base_salary")),
            ),
        );

        sheet.set(incentive_row, 'A', Cell::text(format!("{short} Incentive")));
        sheet.set(
            incentive_row,
            'B',
            Cell::formula(
                incentive_formula(&format!("B{sales_row}"), tiered.incentive_for(*role)),
                m(&format!("{key}_incentive")),
            ),
        );

        sheet.set(
            commission_row,
            'A',
            Cell::text(format!("{short} Commission ({commission_label})")),
        );
        sheet.set(
            commission_row,
            'B',
            Cell::formula(sumif(role.label(), 'G'), m(&format!("{key}_commission"))),
        );
    }

    let tail = [
        (
            17,
            "Total Staff Pay (Base + Incentives + Commission)",
            "=B8+B9+B10+B11+B12+B13+B14+B15+B16",
            "total_staff_pay",
        ),
        (18, "Total Expenses", "=B3+B4+B17", "total_expenses"),
        (19, "Owner Net Income", "=B2-B18", "owner_net_income"),
    ];
    for (row, label, expr, key) in tail {
        sheet.set(row, 'A', Cell::text(label));
        sheet.set(row, 'B', Cell::formula(expr, m(key)));
    }

    for (column, heading) in [
        ('A', "Staff"),
        ('B', "Total Sales"),
        ('C', "Base Salary"),
        ('D', "Incentive"),
        ('E', "Commission"),
        ('F', "Total Pay"),
    ] {
        sheet.set(21, column, Cell::text(heading));
    }
    for (offset, pay) in breakdown.staff.iter().enumerate() {
        let row = 22 + offset;
        sheet.set(row, 'A', Cell::text(pay.role.label()));
        sheet.set(row, 'B', Cell::formula(format!("=B{}", 5 + offset), pay.sales));
        sheet.set(
            row,
            'C',
            Cell::formula(format!("=B{}", 8 + offset), pay.base_salary),
        );
        sheet.set(
            row,
            'D',
            Cell::formula(format!("=B{}", 11 + offset), pay.incentive),
        );
        sheet.set(
            row,
            'E',
            Cell::formula(format!("=B{}", 14 + offset), pay.commission),
        );
        sheet.set(
            row,
            'F',
            Cell::formula(format!("=C{row}+D{row}+E{row}"), pay.total_pay),
        );
    }
    sheet
}

fn summary_sheet() -> Sheet {
    let mut sheet = Sheet::new("Summary");
    sheet.set(1, 'A', Cell::text("Metric"));
    sheet.set(1, 'B', Cell::text(AMOUNT_HEADING));
    sheet
}

fn sumif(staff_label: &str, column: char) -> String {
    format!("=SUMIF(Transactions!E:E,\"{staff_label}\",Transactions!{column}:{column})")
}

/// Spreadsheet form of an incentive staircase applied to the sales in `cell`.
pub fn incentive_formula(cell: &str, schedule: &IncentiveSchedule) -> String {
    let threshold = schedule.threshold.normalize();
    format!(
        "=IF({cell}<{threshold},0,{}+{}*INT(({cell}-{threshold})/{}))",
        schedule.bonus_at_threshold.normalize(),
        schedule.step_bonus.normalize(),
        schedule.step_size.normalize()
    )
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
