use ahash::AHashMap;

use crate::{Mission, PetId};

/// Pet ids committed to joined missions, in mission order.
pub fn used_pet_ids(missions: &[Mission]) -> Vec<PetId> {
    missions
        .iter()
        .flat_map(|mission| mission.joined_pets.iter().cloned())
        .collect()
}

/// Multiset difference `all_owned − used`, keeping the order of `all_owned`.
///
/// Each occurrence in `used` cancels exactly one occurrence in `all_owned`,
/// so a duplicated pet that is busy once stays available once.
pub fn available_pets(all_owned: &[PetId], used: &[PetId]) -> Vec<PetId> {
    let mut used_counts: AHashMap<&PetId, usize> = AHashMap::new();
    for id in used {
        *used_counts.entry(id).or_insert(0) += 1;
    }

    let mut available = Vec::with_capacity(all_owned.len().saturating_sub(used.len()));
    for id in all_owned {
        match used_counts.get_mut(id) {
            Some(remaining) if *remaining > 0 => *remaining -= 1,
            _ => available.push(id.clone()),
        }
    }
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<PetId> {
        raw.iter().map(|s| PetId::from(*s)).collect()
    }

    #[test]
    fn removes_only_one_copy_per_use() {
        let owned = ids(&["a", "b", "a", "c", "a"]);
        let used = ids(&["a"]);
        assert_eq!(available_pets(&owned, &used), ids(&["b", "a", "c", "a"]));
    }

    #[test]
    fn everything_used_leaves_empty_pool() {
        let owned = ids(&["a", "b", "b"]);
        let used = ids(&["b", "a", "b"]);
        assert!(available_pets(&owned, &used).is_empty());
    }

    #[test]
    fn unknown_used_ids_are_ignored() {
        let owned = ids(&["a", "b"]);
        let used = ids(&["z"]);
        assert_eq!(available_pets(&owned, &used), owned);
    }

    #[test]
    fn used_ids_follow_mission_order() {
        let mut first = crate::test_fixtures::open_mission("m1", [None, None, None]);
        first.joined_pets = ids(&["x", "y"]);
        let second = crate::test_fixtures::open_mission("m2", [None, None, None]);
        let mut third = crate::test_fixtures::open_mission("m3", [None, None, None]);
        third.joined_pets = ids(&["x"]);

        assert_eq!(
            used_pet_ids(&[first, second, third]),
            ids(&["x", "y", "x"])
        );
    }
}
