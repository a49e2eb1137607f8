//! Sales aggregation by staff role.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{StaffRole, Transaction};

/// Per-role sales totals derived from a transaction sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Sum of every transaction price.
    pub total_sales: Decimal,
    /// Number of transactions aggregated.
    pub transaction_count: usize,
    /// Sales per role; every role is present, possibly with zero.
    pub sales_by_role: BTreeMap<StaffRole, Decimal>,
}

impl Aggregates {
    /// Sums transaction prices overall and per staff role.
    ///
    /// # Example
    ///
    /// ```
    /// use salon_sim::compensation::Aggregates;
    /// use salon_sim::models::StaffRole;
    /// use rust_decimal::Decimal;
    ///
    /// let aggregates = Aggregates::from_transactions(&[]);
    /// assert_eq!(aggregates.total_sales, Decimal::ZERO);
    /// assert_eq!(aggregates.sales_for(StaffRole::NailTech), Decimal::ZERO);
    /// ```
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut sales_by_role: BTreeMap<StaffRole, Decimal> =
            StaffRole::ALL.iter().map(|r| (*r, Decimal::ZERO)).collect();

        for tx in transactions {
            *sales_by_role.entry(tx.staff).or_insert(Decimal::ZERO) += tx.price;
        }

        Self {
            total_sales: transactions.iter().map(|tx| tx.price).sum(),
            transaction_count: transactions.len(),
            sales_by_role,
        }
    }

    /// Sales handled by one role.
    pub fn sales_for(&self, role: StaffRole) -> Decimal {
        self.sales_by_role
            .get(&role)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
