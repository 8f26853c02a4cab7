//! Recombination with ancestry recording.
//!
//! - [`partition_breakpoints`] splits a genome into the intervals inherited
//!   from each parental chromosome.
//! - [`AncestryRecombination`] runs one mating event: it records the
//!   ancestry edges and hands the breakpoints to a [`GameteRecombiner`].
//! - [`PoissonCrossovers`] samples breakpoints for the uniform genetic map.

mod coordinator;
mod crossovers;
mod partition;

pub use coordinator::{AncestryRecombination, GameteRecombiner, MatingEvent};
pub use crossovers::PoissonCrossovers;
pub use partition::partition_breakpoints;
