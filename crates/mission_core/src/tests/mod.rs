use super::*;
use crate::test_fixtures::{base_pets, joined_mission, open_mission, pet, slot, triple};


// --- Shared test helpers ------------------------------------------------

fn ids(raw: &[&str]) -> Vec<PetId> {
    raw.iter().map(|s| PetId::from(*s)).collect()
}

/// Available pool for `pets` given `missions`, as the cycle driver sees it.
fn pool_for(pets: &[Pet], missions: &[Mission]) -> Vec<PetId> {
    available_pets(&owned_pet_ids(pets), &used_pet_ids(missions))
}
