//! The transaction generator.
//!
//! For every day in the range the generator draws a transaction count,
//! then for every slot draws a visit type, a service and a staff member.
//! All randomness comes from one explicitly seeded [`StdRng`] owned by the
//! generator, so the same seed and configuration always produce the same
//! sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::CategoryMix;
use crate::error::{SimError, SimResult};
use crate::models::{CountRange, DateRange, Transaction};

use super::staff::Visit;
use super::weights::ServiceSampler;

/// Generates synthetic transactions from a catalog.
///
/// Construction validates everything the draws depend on and builds a
/// sampler for every visit type the mix can produce, so [`run`] does not
/// fail part-way through a month.
///
/// [`run`]: TransactionGenerator::run
#[derive(Debug)]
pub struct TransactionGenerator<'a> {
    mix: CategoryMix,
    rng: StdRng,
    hair: Option<ServiceSampler<'a>>,
    nail: Option<ServiceSampler<'a>>,
}

impl<'a> TransactionGenerator<'a> {
    /// Creates a generator over `catalog` seeded with `seed`.
    ///
    /// # Errors
    ///
    /// - [`InvalidProbability`] if the mix is not a valid distribution
    /// - [`EmptyCategory`] if hair or nail can be drawn but has no services.
    ///   Nail can be drawn whenever the hair probability is below 1.
    /// - [`InvalidPrice`] if a drawable service has a non-positive price
    ///
    /// [`InvalidProbability`]: crate::error::SimError::InvalidProbability
    /// [`EmptyCategory`]: crate::error::SimError::EmptyCategory
    /// [`InvalidPrice`]: crate::error::SimError::InvalidPrice
    pub fn new(catalog: &'a Catalog, mix: CategoryMix, seed: u64) -> SimResult<Self> {
        mix.validate()?;

        let sampler = |visit: Visit, drawable: bool| -> SimResult<Option<ServiceSampler<'a>>> {
            if drawable {
                let category = visit.category();
                ServiceSampler::new(category, catalog.get_services(category)).map(Some)
            } else {
                Ok(None)
            }
        };

        // Visit::draw only looks at the hair probability, so reachability
        // follows from it rather than from the nail share.
        let hair = sampler(Visit::Hair, mix.hair > 0.0)?;
        let nail = sampler(Visit::Nail, mix.hair < 1.0)?;

        Ok(Self {
            mix,
            rng: StdRng::seed_from_u64(seed),
            hair,
            nail,
        })
    }

    /// Generates the transactions for every day in `dates`.
    ///
    /// The result is sorted by date; within a day transactions keep the
    /// order in which they were drawn.
    ///
    /// # Example
    ///
    /// ```
    /// use salon_sim::catalog::Catalog;
    /// use salon_sim::config::CategoryMix;
    /// use salon_sim::generation::TransactionGenerator;
    /// use salon_sim::models::{CountRange, DateRange};
    /// use chrono::NaiveDate;
    ///
    /// let catalog = Catalog::salon_default();
    /// let mut generator = TransactionGenerator::new(&catalog, CategoryMix::default(), 42).unwrap();
    /// let dates = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
    /// ).unwrap();
    ///
    /// let transactions = generator.run(dates, CountRange::new(5, 15).unwrap()).unwrap();
    /// assert!(transactions.len() >= 35 && transactions.len() <= 105);
    /// ```
    pub fn run(&mut self, dates: DateRange, counts: CountRange) -> SimResult<Vec<Transaction>> {
        dates.validate()?;
        counts.validate()?;

        let mut transactions = Vec::with_capacity(dates.len_days() as usize * counts.min as usize);

        for date in dates.days() {
            let count = self.rng.gen_range(counts.min..=counts.max);
            let weekday = date.format("%a").to_string();
            debug!(date = %date, count, "Drawing day");

            for _ in 0..count {
                let visit = Visit::draw(&mut self.rng, self.mix.hair);
                let sampler = match visit {
                    Visit::Hair => self.hair.as_ref(),
                    Visit::Nail => self.nail.as_ref(),
                };
                let sampler = sampler.ok_or_else(|| SimError::EmptyCategory {
                    category: visit.category().label().to_string(),
                })?;
                let service = sampler.sample(&mut self.rng);
                let staff = visit.assign_staff(&mut self.rng, self.mix.senior_stylist);

                transactions.push(Transaction {
                    date,
                    weekday: weekday.clone(),
                    service: service.name.clone(),
                    category: service.category,
                    staff,
                    price: service.price,
                });
            }
        }

        transactions.sort_by_key(|tx| tx.date);

        info!(
            start = %dates.start,
            end = %dates.end,
            days = dates.len_days(),
            transactions = transactions.len(),
            "Generated transactions"
        );

        Ok(transactions)
    }
}

/// Runs one generation with a fresh generator.
///
/// Convenience for callers that do not need to keep the generator around.
pub fn generate_transactions(
    catalog: &Catalog,
    mix: CategoryMix,
    dates: DateRange,
    counts: CountRange,
    seed: u64,
) -> SimResult<Vec<Transaction>> {
    // Validate ranges before touching the catalog so errors come out in setup order.
    dates.validate()?;
    counts.validate()?;
    TransactionGenerator::new(catalog, mix, seed)?.run(dates, counts)
}
