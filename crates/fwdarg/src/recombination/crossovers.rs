use crate::Position;
use crate::config::GenomeRange;
use crate::errors::ConfigError;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

/// Crossover sampler for a uniform genetic map.
///
/// The number of crossovers per meiosis is Poisson distributed with the
/// given mean and positions are uniform over the genome. Samples are sorted
/// and can be fed straight to
/// [`AncestryRecombination::recombine`](super::AncestryRecombination::recombine).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPoissonCrossovers", into = "RawPoissonCrossovers")]
pub struct PoissonCrossovers {
    mean: f64,
    genome: GenomeRange,
    terminate: bool,
    poisson: Option<Poisson<f64>>,
}

#[derive(Serialize, Deserialize)]
struct RawPoissonCrossovers {
    mean: f64,
    #[serde(default)]
    genome: GenomeRange,
    #[serde(default)]
    terminate: bool,
}

impl TryFrom<RawPoissonCrossovers> for PoissonCrossovers {
    type Error = ConfigError;

    fn try_from(raw: RawPoissonCrossovers) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.mean, raw.genome)?.terminated(raw.terminate))
    }
}

impl From<PoissonCrossovers> for RawPoissonCrossovers {
    fn from(value: PoissonCrossovers) -> Self {
        Self {
            mean: value.mean,
            genome: value.genome,
            terminate: value.terminate,
        }
    }
}

impl PoissonCrossovers {
    /// Create a sampler with `mean` expected crossovers per meiosis.
    ///
    /// # Errors
    /// Returns an error if `mean` is negative or not finite.
    pub fn new(mean: f64, genome: GenomeRange) -> Result<Self, ConfigError> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(ConfigError::InvalidCrossoverMean(mean));
        }
        // Poisson requires a strictly positive rate; zero means no crossovers.
        let poisson = if mean > 0.0 {
            Some(Poisson::new(mean).map_err(|_| ConfigError::InvalidCrossoverMean(mean))?)
        } else {
            None
        };
        Ok(Self {
            mean,
            genome,
            terminate: false,
            poisson,
        })
    }

    /// Append `f64::MAX` to every non-empty sample, the end-of-chromosome
    /// marker many gamete recombination routines expect.
    pub fn terminated(mut self, terminate: bool) -> Self {
        self.terminate = terminate;
        self
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn genome(&self) -> GenomeRange {
        self.genome
    }

    /// Fill `breakpoints` with a new sample, reusing its allocation.
    pub fn sample_into<R: Rng + ?Sized>(&self, rng: &mut R, breakpoints: &mut Vec<Position>) {
        breakpoints.clear();
        let Some(poisson) = &self.poisson else {
            return;
        };

        let n = poisson.sample(rng) as usize;
        let (start, stop) = (self.genome.start(), self.genome.stop());
        breakpoints.extend((0..n).map(|_| rng.random_range(start..stop)));
        breakpoints.sort_by(f64::total_cmp);

        if self.terminate && !breakpoints.is_empty() {
            breakpoints.push(f64::MAX);
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Position> {
        let mut breakpoints = Vec::new();
        self.sample_into(rng, &mut breakpoints);
        breakpoints
    }
}
