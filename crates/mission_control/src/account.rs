use std::ops::AddAssign;

use mission_core::{has_daily_quests, MissionId, SeasonTier};
use tracing::{debug, error, info, warn};

use crate::{run_mission_cycle, ApiError, GameApi, Pacer, RoutineConfig};

/// What one account routine accomplished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountReport {
    pub bonuses_claimed: usize,
    pub pets_hatched: usize,
    pub missions_claimed: usize,
    pub missions_joined: usize,
    pub quests_checked_in: usize,
    pub achievements_claimed: usize,
    pub season_rewards_claimed: usize,
}

impl AddAssign<&AccountReport> for AccountReport {
    fn add_assign(&mut self, other: &AccountReport) {
        self.bonuses_claimed += other.bonuses_claimed;
        self.pets_hatched += other.pets_hatched;
        self.missions_claimed += other.missions_claimed;
        self.missions_joined += other.missions_joined;
        self.quests_checked_in += other.quests_checked_in;
        self.achievements_claimed += other.achievements_claimed;
        self.season_rewards_claimed += other.season_rewards_claimed;
    }
}

/// Runs the full routine for one account:
/// 1. Claim the gatcha bonus (god power before dna).
/// 2. Hatch pets while power lasts.
/// 3. Claim completed missions.
/// 4. Join every staffable mission.
/// 5. Daily quests, achievements, season pass rewards.
///
/// Errors in steps 1–2 are returned. An error in steps 3–4 is logged and
/// ends the routine; an error in step 5 is logged.
pub async fn run_account<A: GameApi, P: Pacer>(
    api: &A,
    pacer: &P,
    config: &RoutineConfig,
) -> Result<AccountReport, ApiError> {
    let mut report = AccountReport::default();

    info!("fetching gatcha bonus");
    report.bonuses_claimed = claim_gatcha_bonus(api).await?;
    report.pets_hatched = hatch_pets(api, pacer, config).await?;

    if let Err(err) = run_missions(api, pacer, config, &mut report).await {
        error!("error handling missions: {err}");
        return Ok(report);
    }

    info!("checking for available quests");
    if let Err(err) = collect_rewards(api, pacer, config, &mut report).await {
        error!("error checking user rewards: {err}");
    }

    Ok(report)
}

async fn claim_gatcha_bonus<A: GameApi>(api: &A) -> Result<usize, ApiError> {
    let bonus = api.fetch_gatcha_bonus().await?;
    match bonus.claimable() {
        Some(kind) => {
            info!(step = bonus.current_step, "claiming {kind} bonus");
            api.claim_gatcha_bonus(kind).await?;
            Ok(1)
        }
        None => {
            warn!("no bonus from gatcha to claim");
            Ok(0)
        }
    }
}

async fn hatch_pets<A: GameApi, P: Pacer>(
    api: &A,
    pacer: &P,
    config: &RoutineConfig,
) -> Result<usize, ApiError> {
    let user = api.fetch_user_info().await?;
    debug!(
        username = %user.username,
        token = user.token,
        power = user.power,
        "user info"
    );

    let mut power = user.power;
    let mut hatched = 0;
    while power >= 1 {
        info!(power, "power is enough to hatch a new pet");
        power = api.get_new_pet().await?;
        hatched += 1;
        pacer.pause(config.step_delay()).await;
    }
    Ok(hatched)
}

async fn run_missions<A: GameApi, P: Pacer>(
    api: &A,
    pacer: &P,
    config: &RoutineConfig,
    report: &mut AccountReport,
) -> Result<(), ApiError> {
    let missions = api.fetch_mission_list().await?;

    info!("checking for completed missions");
    pacer.pause(config.step_delay()).await;
    let completed: Vec<&MissionId> = missions
        .iter()
        .filter(|mission| mission.can_complete)
        .map(|mission| &mission.id)
        .collect();
    if completed.is_empty() {
        warn!("no completed missions found");
    }
    for mission_id in completed {
        info!(%mission_id, "claiming mission");
        api.claim_mission(mission_id).await?;
        report.missions_claimed += 1;
        pacer.pause(config.step_delay()).await;
    }

    info!("checking for available missions to enter");
    report.missions_joined = run_mission_cycle(api, config.max_joins_per_cycle).await?;
    pacer.pause(config.step_delay()).await;
    Ok(())
}

async fn collect_rewards<A: GameApi, P: Pacer>(
    api: &A,
    pacer: &P,
    config: &RoutineConfig,
    report: &mut AccountReport,
) -> Result<(), ApiError> {
    let quests = api.fetch_quest_list().await?;
    if has_daily_quests(&quests) {
        info!(count = quests.len(), "found daily quests");
        api.join_clan().await?;
        for quest in &quests {
            info!(%quest, "doing daily quest");
            api.check_in(quest).await?;
            report.quests_checked_in += 1;
        }
        pacer.pause(config.quest_settle()).await;
    } else {
        warn!("no quests to do");
    }

    info!("checking for completed achievements");
    pacer.pause(config.step_delay()).await;
    let achievements = api.fetch_all_achievements().await?;
    if achievements.is_empty() {
        warn!("no completed achievements found");
    } else {
        info!(count = achievements.len(), "found completed achievements");
        pacer.pause(config.step_delay()).await;
        for achievement in &achievements {
            info!(%achievement, "claiming achievement");
            api.claim_achievement(achievement).await?;
            report.achievements_claimed += 1;
            pacer.pause(config.step_delay()).await;
        }
    }

    info!("checking for available season pass");
    report.season_rewards_claimed = claim_season_rewards(api).await?;
    pacer.pause(config.step_delay()).await;
    Ok(())
}

async fn claim_season_rewards<A: GameApi>(api: &A) -> Result<usize, ApiError> {
    let Some(passes) = api.fetch_season_pass().await? else {
        warn!("season pass not found");
        return Ok(0);
    };

    let mut claimed = 0;
    for pass in &passes {
        info!(
            season_id = %pass.season_id,
            current_step = pass.current_step,
            title = %pass.title,
            "checking season pass"
        );
        for reward in pass.claimable_rewards() {
            info!(
                season_id = %pass.season_id,
                step = reward.step,
                "claiming reward: {} {}",
                reward.amount,
                reward.name
            );
            api.claim_season_pass(&pass.season_id, SeasonTier::Free, reward.step)
                .await?;
            claimed += 1;
        }
    }
    Ok(claimed)
}
