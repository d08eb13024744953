use ahash::AHashSet;

use crate::pool::{available_pets, used_pet_ids};
use crate::{Assignment, EligibilityIndex, Mission, PetId, MISSION_SLOTS};

/// Returns the first fully staffable open mission, scanning from the end of
/// the list towards the front.
///
/// Slots are filled in order; each takes the first eligible pet that is in
/// `available` and not already picked for an earlier slot of the same
/// mission. A mission only matches when all three slots end up holding a
/// pet, so missions declaring fewer than three requirements never match.
///
/// On a match the chosen pets are appended to `reserved`. A caller matching
/// again against the same snapshot subtracts `reserved` from the pool, as
/// [`plan_pass`] does; a caller that re-fetches state between matches may
/// discard it.
pub fn find_satisfiable(
    missions: &[Mission],
    available: &[PetId],
    reserved: &mut Vec<PetId>,
    index: &EligibilityIndex,
) -> Option<Assignment> {
    let in_pool: AHashSet<&PetId> = available.iter().collect();

    for mission in missions.iter().rev() {
        if !mission.is_open() {
            continue;
        }
        if let Some(pets) = fill_slots(mission, &in_pool, index) {
            reserved.extend(pets.iter().cloned());
            return Some(Assignment {
                mission_id: mission.id.clone(),
                pets,
            });
        }
    }
    None
}

fn fill_slots(
    mission: &Mission,
    in_pool: &AHashSet<&PetId>,
    index: &EligibilityIndex,
) -> Option<[PetId; MISSION_SLOTS]> {
    let mut picks: [Option<&PetId>; MISSION_SLOTS] = [None; MISSION_SLOTS];

    for (pos, slot) in mission.slots.iter().enumerate() {
        let Some(requirement) = slot else {
            continue;
        };
        let pick = index
            .pets_for(&requirement.class, requirement.min_star)
            .find(|&id| in_pool.contains(&id) && !picks[..pos].contains(&Some(id)));
        picks[pos] = pick;
    }

    match picks {
        [Some(first), Some(second), Some(third)] => {
            Some([first.clone(), second.clone(), third.clone()])
        }
        _ => None,
    }
}

/// Runs the matcher to exhaustion against a single snapshot.
///
/// Pets already on joined missions and pets reserved by earlier matches of
/// this pass are both withheld from the pool. A matched mission stops being
/// open before the next attempt.
pub fn plan_pass(
    missions: &[Mission],
    all_owned: &[PetId],
    index: &EligibilityIndex,
) -> Vec<Assignment> {
    let busy = used_pet_ids(missions);
    let mut missions = missions.to_vec();
    let mut reserved: Vec<PetId> = Vec::new();
    let mut plan = Vec::new();

    loop {
        let committed: Vec<PetId> = busy.iter().chain(&reserved).cloned().collect();
        let available = available_pets(all_owned, &committed);
        let Some(assignment) = find_satisfiable(&missions, &available, &mut reserved, index)
        else {
            break;
        };
        if let Some(mission) = missions
            .iter_mut()
            .rev()
            .find(|m| m.is_open() && m.id == assignment.mission_id)
        {
            mission.joined_pets = assignment.pets.to_vec();
        }
        plan.push(assignment);
    }

    plan
}
