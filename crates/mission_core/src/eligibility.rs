use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::{Pet, PetClass, PetId};

/// Pet ids grouped by star rank, then class.
///
/// Ranks iterate in ascending order; ids within a (rank, class) group keep
/// the order the pets were listed in.
#[derive(Debug, Clone, Default)]
pub struct EligibilityIndex {
    by_star: BTreeMap<u32, AHashMap<PetClass, Vec<PetId>>>,
}

impl EligibilityIndex {
    pub fn from_pets(pets: &[Pet]) -> Self {
        let mut index = Self::default();
        for pet in pets {
            index.insert(pet.star, pet.class.clone(), pet.id.clone());
        }
        index
    }

    pub fn insert(&mut self, star: u32, class: PetClass, id: PetId) {
        self.by_star
            .entry(star)
            .or_default()
            .entry(class)
            .or_default()
            .push(id);
    }

    /// Ids of `class` at every rank `>= min_star`, lowest rank first.
    ///
    /// The iterator borrows only the index, so `class` may be a temporary.
    pub fn pets_for(
        &self,
        class: &PetClass,
        min_star: u32,
    ) -> impl Iterator<Item = &PetId> + '_ {
        let class = class.clone();
        self.by_star
            .range(min_star..)
            .filter_map(move |(_, classes)| classes.get(&class))
            .flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.by_star.is_empty()
    }
}

/// Every owned pet id in listing order, duplicates included.
pub fn owned_pet_ids(pets: &[Pet]) -> Vec<PetId> {
    pets.iter().map(|pet| pet.id.clone()).collect()
}
