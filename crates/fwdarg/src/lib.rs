//! # fwdarg
//!
//! Ancestry-recording recombination for forward-time population genetic
//! simulation. For every mating event the crossover positions are split
//! into the genomic intervals inherited from each parental chromosome,
//! those intervals are recorded as ancestry edges, and the mutation-level
//! recombination is delegated to the population's own recombination
//! routine.
//!
//! Modules:
//! - `recombination`: breakpoint partitioning, the per-event coordinator and
//!   a Poisson crossover sampler.
//! - `ancestry`: edges, nodes, the edge sink abstraction and the tracker
//!   that accumulates them between simplifications.
//! - `population`: the gamete/mutation tables and recycling bin lent to the
//!   recombination routine.
//! - `config`: serialisable configuration.

pub mod ancestry;
pub mod config;
pub mod errors;
pub mod population;
pub mod prelude;
pub mod recombination;

/// A genomic position. Genomes use the half-open unit interval `[0, 1)`
/// unless configured otherwise.
pub type Position = f64;

pub use ancestry::{AncestrySink, AncestryTracker, Edge, EdgeBuffer, Interval, NodeId, ParentPair};
pub use config::{AncestryConfig, GenomeRange};
pub use population::{GameteId, Population, RecyclingBin};
pub use recombination::{AncestryRecombination, GameteRecombiner, partition_breakpoints};
