//! Shared test fixtures for `mission_core` and downstream crates.
//!
//! Builders for pets and missions with terse string arguments, plus a
//! small inventory that covers the common matching scenarios.

use crate::{Mission, MissionId, Pet, PetClass, PetId, SlotRequirement, MISSION_SLOTS};

pub fn pet(id: &str, class: &str, star: u32) -> Pet {
    Pet {
        id: PetId::from(id),
        class: PetClass::from(class),
        star,
    }
}

/// `Some((class, min_star))` for a requirement, `None` for an empty slot.
pub fn slot(class: &str, min_star: u32) -> Option<SlotRequirement> {
    Some(SlotRequirement {
        class: PetClass::from(class),
        min_star,
    })
}

pub fn open_mission(id: &str, slots: [Option<SlotRequirement>; MISSION_SLOTS]) -> Mission {
    Mission {
        id: MissionId::from(id),
        slots,
        joined_pets: vec![],
        can_complete: false,
    }
}

pub fn joined_mission(id: &str, pets: &[&str]) -> Mission {
    Mission {
        id: MissionId::from(id),
        slots: [slot("fire", 1), slot("fire", 1), slot("fire", 1)],
        joined_pets: pets.iter().map(|p| PetId::from(*p)).collect(),
        can_complete: false,
    }
}

/// A mission needing three pets of `class` at `min_star` or better.
pub fn triple(id: &str, class: &str, min_star: u32) -> Mission {
    open_mission(
        id,
        [
            slot(class, min_star),
            slot(class, min_star),
            slot(class, min_star),
        ],
    )
}

/// Six fire pets (stars 1–3) and three water pets (star 2).
pub fn base_pets() -> Vec<Pet> {
    vec![
        pet("fire_a", "fire", 1),
        pet("fire_b", "fire", 1),
        pet("fire_c", "fire", 2),
        pet("fire_d", "fire", 2),
        pet("fire_e", "fire", 3),
        pet("fire_f", "fire", 3),
        pet("water_a", "water", 2),
        pet("water_b", "water", 2),
        pet("water_c", "water", 2),
    ]
}
