use mission_core::{EligibilityIndex, PetClass, PetId};

fn pid(id: &str) -> PetId {
    PetId(id.to_string())
}

fn fire() -> PetClass {
    PetClass("fire".to_string())
}

fn star3_star5_index() -> EligibilityIndex {
    let mut index = EligibilityIndex::default();
    index.insert(3, fire(), pid("p1"));
    index.insert(3, fire(), pid("p2"));
    index.insert(5, fire(), pid("p3"));
    index
}

#[test]
fn test_min_star_three_returns_every_rank() {
    let index = star3_star5_index();
    let found: Vec<&PetId> = index.pets_for(&fire(), 3).collect();
    assert_eq!(found, vec![&pid("p1"), &pid("p2"), &pid("p3")]);
}

#[test]
fn test_min_star_four_skips_lower_rank() {
    let index = star3_star5_index();
    let found: Vec<&PetId> = index.pets_for(&fire(), 4).collect();
    assert_eq!(found, vec![&pid("p3")]);
}

#[test]
fn test_min_star_above_all_ranks_is_empty() {
    let index = star3_star5_index();
    assert_eq!(index.pets_for(&fire(), 6).count(), 0);
}

#[test]
fn test_missing_class_is_empty() {
    let index = star3_star5_index();
    let water = PetClass("water".to_string());
    assert_eq!(index.pets_for(&water, 1).count(), 0);
}
