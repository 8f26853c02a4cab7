use super::partition_breakpoints;
use crate::Position;
use crate::ancestry::{AncestrySink, Edge, NodeId, ParentPair};
use crate::config::{AncestryConfig, GenomeRange};
use crate::population::{GameteId, GameteTables, Population, RecyclingBin};
use tracing::trace;

/// Mutation-level recombination of two gametes.
///
/// Implementations splice the mutation lists of `gamete1` and `gamete2` at
/// `breakpoints` (sorted, duplicate free, possibly terminated by a position
/// beyond the genome) and store the result in the gamete table, reusing a
/// slot from `recycling_bin` when one is free.
pub trait GameteRecombiner {
    type Error;

    fn recombine_gametes(
        &mut self,
        breakpoints: &[Position],
        tables: GameteTables<'_>,
        gamete1: GameteId,
        gamete2: GameteId,
        recycling_bin: &mut RecyclingBin,
    ) -> Result<GameteId, Self::Error>;
}

/// The participants of one mating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatingEvent {
    /// Gamete of the chromosome the offspring starts copying from.
    pub gamete1: GameteId,
    pub gamete2: GameteId,
    /// Ancestry nodes of the two parental chromosomes, in the same order.
    pub parents: ParentPair,
    pub offspring: NodeId,
}

/// Recombines gametes while recording which parental chromosome each part
/// of the offspring came from.
#[derive(Debug, Clone)]
pub struct AncestryRecombination<R> {
    genome: GenomeRange,
    recombiner: R,
}

impl<R: GameteRecombiner> AncestryRecombination<R> {
    pub fn new(genome: GenomeRange, recombiner: R) -> Self {
        Self { genome, recombiner }
    }

    pub fn from_config(config: &AncestryConfig, recombiner: R) -> Self {
        Self::new(config.genome(), recombiner)
    }

    pub fn genome(&self) -> GenomeRange {
        self.genome
    }

    pub fn recombiner(&self) -> &R {
        &self.recombiner
    }

    pub fn recombiner_mut(&mut self) -> &mut R {
        &mut self.recombiner
    }

    pub fn into_recombiner(self) -> R {
        self.recombiner
    }

    /// Run one recombination event and return the offspring's gamete.
    ///
    /// Adjacent duplicate breakpoints are removed in place first. Without a
    /// crossover inside the genome a single edge spanning the genome is
    /// recorded for the first parent and `event.gamete1` is returned as is;
    /// the recombiner and the recycling bin are not touched.
    ///
    /// Otherwise the edges of the first parent are recorded, then those of
    /// the second, each in increasing left position, and the deduplicated
    /// breakpoints are passed to the recombiner.
    ///
    /// # Errors
    /// Whatever the recombiner returns. Edges for the event have already
    /// been recorded at that point.
    pub fn recombine<S: AncestrySink + ?Sized>(
        &mut self,
        population: &mut Population,
        ancestry: &mut S,
        recycling_bin: &mut RecyclingBin,
        event: MatingEvent,
        breakpoints: &mut Vec<Position>,
    ) -> Result<GameteId, R::Error> {
        breakpoints.dedup();

        let (start, stop) = (self.genome.start(), self.genome.stop());
        let parents = event.parents;

        match breakpoints.first() {
            Some(&first) if first < stop => {}
            _ => {
                ancestry.record_edge(Edge::new(start, stop, parents.first, event.offspring));
                trace!(offspring = %event.offspring, "No crossover, gamete passed through");
                return Ok(event.gamete1);
            }
        }

        let (from_first, from_second) = partition_breakpoints(breakpoints, start, stop);
        ancestry.add_edges(&from_first, parents.first, event.offspring);
        ancestry.add_edges(&from_second, parents.second, event.offspring);
        trace!(
            offspring = %event.offspring,
            breakpoints = breakpoints.len(),
            edges = from_first.len() + from_second.len(),
            "Recorded recombination edges"
        );

        self.recombiner.recombine_gametes(
            breakpoints,
            population.tables_mut(),
            event.gamete1,
            event.gamete2,
            recycling_bin,
        )
    }
}
