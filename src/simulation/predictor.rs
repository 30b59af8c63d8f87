//! Ball outcome prediction
//!
//! Each delivery combines the batter's and bowler's ratings with the field's
//! base weights into one unnormalized score per category:
//!
//! | category           | skill factor                    |
//! |--------------------|---------------------------------|
//! | six, four          | `batting`                       |
//! | two                | `batting - bowling`             |
//! | out, lbw, catch    | `(1 - batting) * (1 - bowling)` |
//! | run_out            | `1 - batting`                   |
//!
//! Scores are normalized by their sum and one category is drawn. A zero or
//! non-finite sum is a [`SimError::DegenerateDistribution`]; `predict` falls
//! back to a uniform draw in that case.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::core::config::NegativeWeightPolicy;
use crate::core::error::{Result, SimError};
use crate::field::FieldModel;
use crate::simulation::outcome::OutcomeCategory;

const N: usize = OutcomeCategory::COUNT;

fn skill_factor(category: OutcomeCategory, batting: f64, bowling: f64) -> f64 {
    match category {
        OutcomeCategory::Six | OutcomeCategory::Four => batting,
        OutcomeCategory::Two => batting - bowling,
        OutcomeCategory::Out | OutcomeCategory::Lbw | OutcomeCategory::Catch => {
            (1.0 - batting) * (1.0 - bowling)
        }
        OutcomeCategory::RunOut => 1.0 - batting,
    }
}

#[derive(Debug, Clone)]
enum Sampler {
    Weighted(WeightedIndex<f64>),
    /// Bisection over the running sum; tolerates negative entries
    Cumulative([f64; N]),
}

/// Normalized probabilities over [`OutcomeCategory::ALL`]
#[derive(Debug, Clone)]
pub struct OutcomeDistribution {
    probabilities: [f64; N],
    sampler: Sampler,
}

impl OutcomeDistribution {
    /// Normalize raw scores under the given policy
    pub fn from_scores(scores: [f64; N], policy: NegativeWeightPolicy) -> Result<Self> {
        let scores = match policy {
            NegativeWeightPolicy::Clamp => scores.map(|score| score.max(0.0)),
            NegativeWeightPolicy::Cumulative => scores,
        };

        let total: f64 = scores.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return Err(SimError::DegenerateDistribution { total });
        }
        let probabilities = scores.map(|score| score / total);

        let sampler = match policy {
            NegativeWeightPolicy::Clamp => WeightedIndex::new(probabilities)
                .map(Sampler::Weighted)
                .map_err(|_| SimError::DegenerateDistribution { total })?,
            NegativeWeightPolicy::Cumulative => {
                let mut running = 0.0;
                Sampler::Cumulative(probabilities.map(|p| {
                    running += p;
                    running
                }))
            }
        };

        Ok(Self {
            probabilities,
            sampler,
        })
    }

    /// Equal chance for every category
    pub fn uniform() -> Self {
        let probabilities = [1.0 / N as f64; N];
        let sampler = match WeightedIndex::new([1.0; N]) {
            Ok(index) => Sampler::Weighted(index),
            Err(_) => Sampler::Cumulative(std::array::from_fn(|i| (i + 1) as f64 / N as f64)),
        };
        Self {
            probabilities,
            sampler,
        }
    }

    pub fn probability(&self, category: OutcomeCategory) -> f64 {
        self.probabilities[category.index()]
    }

    pub fn probabilities(&self) -> &[f64; N] {
        &self.probabilities
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OutcomeCategory {
        let index = match &self.sampler {
            Sampler::Weighted(index) => index.sample(rng),
            Sampler::Cumulative(cumulative) => {
                let x = rng.gen::<f64>() * cumulative[N - 1];
                bisect_right(cumulative, x, N - 1)
            }
        };
        OutcomeCategory::ALL[index]
    }
}

/// First position in `a[..hi]` whose value exceeds `x`, by plain binary
/// search. On a non-monotonic list this still terminates, but the pick is
/// whatever the search lands on.
fn bisect_right(a: &[f64], x: f64, hi: usize) -> usize {
    let (mut lo, mut hi) = (0, hi);
    while lo < hi {
        let mid = (lo + hi) / 2;
        if x < a[mid] {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Draws ball outcomes from batter and bowler ratings on a given field
pub struct OutcomePredictor<'a, F: FieldModel + ?Sized> {
    field: &'a F,
    policy: NegativeWeightPolicy,
}

impl<'a, F: FieldModel + ?Sized> OutcomePredictor<'a, F> {
    pub fn new(field: &'a F, policy: NegativeWeightPolicy) -> Self {
        Self { field, policy }
    }

    pub fn policy(&self) -> NegativeWeightPolicy {
        self.policy
    }

    /// Unnormalized per-category scores, in [`OutcomeCategory::ALL`] order
    pub fn raw_scores(&self, batting: f64, bowling: f64) -> [f64; N] {
        OutcomeCategory::ALL
            .map(|category| self.field.probability_weight(category) * skill_factor(category, batting, bowling))
    }

    pub fn distribution(&self, batting: f64, bowling: f64) -> Result<OutcomeDistribution> {
        OutcomeDistribution::from_scores(self.raw_scores(batting, bowling), self.policy)
    }

    /// Draw one outcome for a delivery
    pub fn predict<R: Rng + ?Sized>(&self, batting: f64, bowling: f64, rng: &mut R) -> OutcomeCategory {
        let distribution = match self.distribution(batting, bowling) {
            Ok(distribution) => distribution,
            Err(err) => {
                tracing::warn!(%err, batting, bowling, "using uniform outcome distribution");
                OutcomeDistribution::uniform()
            }
        };
        distribution.sample(rng)
    }
}
