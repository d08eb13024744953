use mission_core::{
    available_pets, find_satisfiable, owned_pet_ids, used_pet_ids, EligibilityIndex,
};
use tracing::{info, warn};

use crate::{ApiError, GameApi};

/// Joins missions one at a time until the matcher finds nothing to staff.
///
/// Every iteration re-fetches pets and missions, so each join is computed
/// against the state the server reports after the previous join. Stops
/// early, without error, once `max_joins` joins have been submitted.
/// Returns the number of joins.
pub async fn run_mission_cycle<A: GameApi>(api: &A, max_joins: usize) -> Result<usize, ApiError> {
    let mut joined = 0;

    while joined < max_joins {
        let pets = api.fetch_pet_list().await?;
        let missions = api.fetch_mission_list().await?;

        let available = available_pets(&owned_pet_ids(&pets), &used_pet_ids(&missions));
        info!(available = available.len(), "available pets");

        let index = EligibilityIndex::from_pets(&pets);
        // State is re-fetched before the next match, so reservations are not kept.
        let Some(assignment) = find_satisfiable(&missions, &available, &mut Vec::new(), &index)
        else {
            warn!("cannot join another mission with the current available pets");
            return Ok(joined);
        };

        info!(
            mission_id = %assignment.mission_id,
            pets = ?assignment.pets,
            "entering mission"
        );
        api.join_mission(&assignment).await?;
        joined += 1;
    }

    warn!(max_joins, "join limit reached, leaving remaining missions for the next pass");
    Ok(joined)
}
