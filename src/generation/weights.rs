//! Price-weighted service sampling.
//!
//! Cheaper services are sold more often: within a category the chance of
//! drawing service `i` is `(1 / price_i) / sum(1 / price_j)`.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SimError, SimResult};
use crate::models::{Category, ServiceDefinition};

/// Returns the normalized inverse-price weights for a list of services.
///
/// # Errors
///
/// - [`SimError::EmptyCategory`] if `services` is empty
/// - [`SimError::InvalidPrice`] if any price is zero or negative
///
/// # Example
///
/// ```
/// use salon_sim::generation::inverse_price_weights;
/// use salon_sim::models::{Category, ServiceDefinition};
/// use rust_decimal::Decimal;
///
/// let services = vec![
///     ServiceDefinition::new("Blowdry", Category::Hair, Decimal::from(100)),
///     ServiceDefinition::new("Color", Category::Hair, Decimal::from(300)),
/// ];
/// let weights = inverse_price_weights(Category::Hair, &services).unwrap();
/// assert!((weights[0] - 0.75).abs() < 1e-12);
/// assert!((weights[1] - 0.25).abs() < 1e-12);
/// ```
pub fn inverse_price_weights(
    category: Category,
    services: &[ServiceDefinition],
) -> SimResult<Vec<f64>> {
    if services.is_empty() {
        return Err(SimError::EmptyCategory {
            category: category.label().to_string(),
        });
    }

    let inverse: Vec<f64> = services
        .iter()
        .map(|service| {
            let price = positive_price(service)?;
            Ok(1.0 / price)
        })
        .collect::<SimResult<_>>()?;

    let total: f64 = inverse.iter().sum();
    Ok(inverse.into_iter().map(|w| w / total).collect())
}

fn positive_price(service: &ServiceDefinition) -> SimResult<f64> {
    let invalid = || SimError::InvalidPrice {
        service: service.name.clone(),
        price: service.price,
    };

    if service.price <= Decimal::ZERO {
        return Err(invalid());
    }
    service.price.to_f64().filter(|p| *p > 0.0).ok_or_else(invalid)
}

/// Draws services from one category with inverse-price weights.
#[derive(Debug, Clone)]
pub struct ServiceSampler<'a> {
    services: &'a [ServiceDefinition],
    index: WeightedIndex<f64>,
}

impl<'a> ServiceSampler<'a> {
    /// Builds a sampler, failing fast on an empty category or a bad price.
    pub fn new(category: Category, services: &'a [ServiceDefinition]) -> SimResult<Self> {
        let weights = inverse_price_weights(category, services)?;
        let index = WeightedIndex::new(&weights).map_err(|e| SimError::InvalidProbability {
            name: format!("{} service weights", category.label()),
            message: e.to_string(),
        })?;
        Ok(Self { services, index })
    }

    /// Draws one service.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a ServiceDefinition {
        &self.services[self.index.sample(rng)]
    }

    /// Draws the index of one service.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service(name: &str, price: i64) -> ServiceDefinition {
        ServiceDefinition::new(name, Category::Hair, Decimal::from(price))
    }

    #[test]
    fn test_weights_sum_to_one() {
        let services = vec![service("a", 99), service("b", 149), service("c", 3199)];
        let weights = inverse_price_weights(Category::Hair, &services).unwrap();
        let total: f64 = weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cheaper_service_has_higher_weight() {
        let services = vec![service("Haircut", 149), service("Color", 699)];
        let weights = inverse_price_weights(Category::Hair, &services).unwrap();
        assert!(weights[0] > weights[1]);
        assert!((weights[0] / weights[1] - 699.0 / 149.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_prices_give_equal_weights() {
        let services = vec![service("a", 1499), service("b", 1499)];
        let weights = inverse_price_weights(Category::Hair, &services).unwrap();
        assert_eq!(weights[0], weights[1]);
    }

    #[test]
    fn test_empty_category_fails_fast() {
        match inverse_price_weights(Category::Nail, &[]) {
            Err(SimError::EmptyCategory { category }) => assert_eq!(category, "Nail"),
            other => panic!("Expected EmptyCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_price_fails_fast() {
        let services = vec![service("a", 100), service("free", 0)];
        match ServiceSampler::new(Category::Hair, &services) {
            Err(SimError::InvalidPrice { service, .. }) => assert_eq!(service, "free"),
            other => panic!("Expected InvalidPrice, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_sampling_converges_to_inverse_price_frequencies() {
        let services = vec![service("a", 100), service("b", 200), service("c", 400)];
        let sampler = ServiceSampler::new(Category::Hair, &services).unwrap();
        let expected = inverse_price_weights(Category::Hair, &services).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let draws = 200_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            counts[sampler.sample_index(&mut rng)] += 1;
        }

        for (count, p) in counts.iter().zip(expected.iter()) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - p).abs() < 0.01,
                "observed {} expected {}",
                observed,
                p
            );
        }
    }

    #[test]
    fn test_single_service_is_always_drawn() {
        let services = vec![service("only", 250)];
        let sampler = ServiceSampler::new(Category::Hair, &services).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng).name, "only");
        }
    }
}
