//! Mating spread over rayon workers, each with a private edge buffer.

use fwdarg::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::convert::Infallible;

struct PassThrough;

impl GameteRecombiner for PassThrough {
    type Error = Infallible;

    fn recombine_gametes(
        &mut self,
        _breakpoints: &[Position],
        _tables: GameteTables<'_>,
        gamete1: GameteId,
        _gamete2: GameteId,
        _recycling_bin: &mut RecyclingBin,
    ) -> Result<GameteId, Self::Error> {
        Ok(gamete1)
    }
}

fn mate_chunk(seed: u64, children: std::ops::Range<i32>, n_parents: i32) -> EdgeBuffer {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let sampler = PoissonCrossovers::new(2.0, GenomeRange::UNIT).unwrap();
    let mut population = Population::monomorphic(n_parents as u32);
    let mut bin = RecyclingBin::new();
    let mut recombination = AncestryRecombination::new(GenomeRange::UNIT, PassThrough);
    let mut buffer = EdgeBuffer::new();
    let mut breakpoints = Vec::new();

    for child in children {
        sampler.sample_into(&mut rng, &mut breakpoints);
        let event = MatingEvent {
            gamete1: 0,
            gamete2: 0,
            parents: ParentPair::new(rng.random_range(0..n_parents), rng.random_range(0..n_parents)),
            offspring: NodeId::new(child),
        };
        recombination
            .recombine(&mut population, &mut buffer, &mut bin, event, &mut breakpoints)
            .unwrap();
    }
    buffer
}

#[test]
fn test_worker_buffers_merge_in_order() {
    let n_parents = 50;
    let per_worker = 25;
    let workers = 4;

    let mut tracker = AncestryTracker::default();
    for id in 0..n_parents + workers * per_worker {
        tracker.record_node(Node::new(id, 0.0, 0)).unwrap();
    }

    let buffers: Vec<EdgeBuffer> = (0..workers)
        .into_par_iter()
        .map(|w| {
            let first = n_parents + w * per_worker;
            mate_chunk(w as u64, first..first + per_worker, n_parents)
        })
        .collect();

    let expected: usize = buffers.iter().map(EdgeBuffer::len).sum();
    for buffer in buffers {
        tracker.absorb(buffer);
    }

    let children: Vec<NodeId> = (n_parents..n_parents + workers * per_worker)
        .map(NodeId::new)
        .collect();
    assert_eq!(tracker.finish_generation(children).unwrap(), expected);

    // Children appear in non-decreasing order because workers own
    // consecutive id ranges and are absorbed in worker order.
    assert!(tracker.edges().windows(2).all(|w| w[0].child <= w[1].child));
}
