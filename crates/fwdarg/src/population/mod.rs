//! Population tables lent to the gamete recombination routine.
//!
//! The recombination coordinator never reads or writes these tables itself;
//! it only borrows them on behalf of a
//! [`GameteRecombiner`](crate::recombination::GameteRecombiner).

mod recycling;

pub use recycling::RecyclingBin;

use crate::Position;
use serde::{Deserialize, Serialize};

/// Handle into the gamete table.
pub type GameteId = usize;

/// Index into the mutation table.
pub type MutationKey = u32;

/// A mutation as stored in the population's mutation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub position: Position,
    pub effect_size: f64,
    pub neutral: bool,
}

/// One gamete-table slot: the mutations carried and how many chromosomes in
/// the population currently point at it. A slot with `count == 0` is free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gamete {
    pub count: u32,
    pub neutral: Vec<MutationKey>,
    pub selected: Vec<MutationKey>,
}

impl Gamete {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Whether the slot may be reused.
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.count == 0
    }
}

/// Mutable view of the tables a recombination routine works on.
///
/// `neutral` and `selected` are scratch buffers reused across calls.
#[derive(Debug)]
pub struct GameteTables<'a> {
    pub gametes: &'a mut Vec<Gamete>,
    pub mutations: &'a [Mutation],
    pub neutral: &'a mut Vec<MutationKey>,
    pub selected: &'a mut Vec<MutationKey>,
}

/// The gamete and mutation tables of one population.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    gametes: Vec<Gamete>,
    mutations: Vec<Mutation>,
    #[serde(skip)]
    neutral: Vec<MutationKey>,
    #[serde(skip)]
    selected: Vec<MutationKey>,
}

impl Population {
    pub fn new(gametes: Vec<Gamete>, mutations: Vec<Mutation>) -> Self {
        Self {
            gametes,
            mutations,
            neutral: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// A mutation-free population of `n_chromosomes` copies of one gamete.
    pub fn monomorphic(n_chromosomes: u32) -> Self {
        Self::new(vec![Gamete::new(n_chromosomes)], Vec::new())
    }

    pub fn gametes(&self) -> &[Gamete] {
        &self.gametes
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Borrow every table at once for a recombination routine.
    pub fn tables_mut(&mut self) -> GameteTables<'_> {
        GameteTables {
            gametes: &mut self.gametes,
            mutations: &self.mutations,
            neutral: &mut self.neutral,
            selected: &mut self.selected,
        }
    }

    /// A recycling bin holding every currently extinct gamete slot.
    pub fn recycling_bin(&self) -> RecyclingBin {
        RecyclingBin::from_gametes(&self.gametes)
    }
}
