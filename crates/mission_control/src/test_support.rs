//! Scripted collaborators for exercising the routine without a network.
//!
//! `FakeApi` answers from an in-memory `FakeState` and records every call
//! into a shared `CallLog` as `"<label>:<method>"`. `RecordingPacer`
//! returns immediately and remembers the requested durations.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use mission_core::{
    AchievementId, Assignment, BonusKind, GatchaBonus, Mission, MissionId, Pet, QuestId,
    SeasonId, SeasonPass, SeasonTier, UserInfo,
};
use parking_lot::{Mutex, MutexGuard};

use crate::{Account, ApiError, Connector, GameApi, Pacer};

pub type CallLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone)]
pub struct FakeState {
    pub user: UserInfo,
    /// Power reported by successive `get_new_pet` calls; 0 once exhausted.
    pub power_feed: VecDeque<u64>,
    pub pets: Vec<Pet>,
    pub missions: Vec<Mission>,
    pub bonus: GatchaBonus,
    pub quests: Vec<QuestId>,
    pub achievements: Vec<AchievementId>,
    pub season_passes: Option<Vec<SeasonPass>>,
    /// Method name that answers HTTP 503 instead of succeeding.
    pub fail_on: Option<&'static str>,
    pub claimed_bonuses: Vec<BonusKind>,
    pub claimed_season_steps: Vec<(SeasonId, u64)>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            user: UserInfo {
                username: "tester".to_string(),
                token: 0.0,
                power: 0,
            },
            power_feed: VecDeque::new(),
            pets: vec![],
            missions: vec![],
            bonus: GatchaBonus {
                current_step: 0,
                is_claimed_god_power: false,
                is_claimed_dna: false,
                step_bonus_god_power: 10,
                step_bonus_dna: 5,
            },
            quests: vec![],
            achievements: vec![],
            season_passes: None,
            fail_on: None,
            claimed_bonuses: vec![],
            claimed_season_steps: vec![],
        }
    }
}

pub struct FakeApi {
    label: String,
    state: Mutex<FakeState>,
    log: CallLog,
}

impl FakeApi {
    pub fn new(label: &str, state: FakeState, log: CallLog) -> Self {
        Self {
            label: label.to_string(),
            state: Mutex::new(state),
            log,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock()
    }

    fn call(&self, method: &'static str) -> Result<MutexGuard<'_, FakeState>, ApiError> {
        self.log.lock().push(format!("{}:{method}", self.label));
        let state = self.state.lock();
        if state.fail_on == Some(method) {
            return Err(ApiError::Status {
                endpoint: method.to_string(),
                status: 503,
            });
        }
        Ok(state)
    }
}

impl GameApi for FakeApi {
    async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        Ok(self.call("fetch_user_info")?.user.clone())
    }

    async fn fetch_pet_list(&self) -> Result<Vec<Pet>, ApiError> {
        Ok(self.call("fetch_pet_list")?.pets.clone())
    }

    async fn fetch_mission_list(&self) -> Result<Vec<Mission>, ApiError> {
        Ok(self.call("fetch_mission_list")?.missions.clone())
    }

    async fn join_mission(&self, assignment: &Assignment) -> Result<(), ApiError> {
        let mut state = self.call("join_mission")?;
        if let Some(mission) = state
            .missions
            .iter_mut()
            .find(|m| m.id == assignment.mission_id)
        {
            mission.joined_pets = assignment.pets.to_vec();
        }
        Ok(())
    }

    async fn claim_mission(&self, mission_id: &MissionId) -> Result<(), ApiError> {
        let mut state = self.call("claim_mission")?;
        if let Some(mission) = state.missions.iter_mut().find(|m| &m.id == mission_id) {
            mission.joined_pets.clear();
            mission.can_complete = false;
        }
        Ok(())
    }

    async fn get_new_pet(&self) -> Result<u64, ApiError> {
        let mut state = self.call("get_new_pet")?;
        let power = state.power_feed.pop_front().unwrap_or(0);
        state.user.power = power;
        Ok(power)
    }

    async fn fetch_gatcha_bonus(&self) -> Result<GatchaBonus, ApiError> {
        Ok(self.call("fetch_gatcha_bonus")?.bonus.clone())
    }

    async fn claim_gatcha_bonus(&self, kind: BonusKind) -> Result<(), ApiError> {
        self.call("claim_gatcha_bonus")?.claimed_bonuses.push(kind);
        Ok(())
    }

    async fn fetch_quest_list(&self) -> Result<Vec<QuestId>, ApiError> {
        Ok(self.call("fetch_quest_list")?.quests.clone())
    }

    async fn check_in(&self, _quest: &QuestId) -> Result<(), ApiError> {
        self.call("check_in").map(drop)
    }

    async fn join_clan(&self) -> Result<(), ApiError> {
        self.call("join_clan").map(drop)
    }

    async fn fetch_all_achievements(&self) -> Result<Vec<AchievementId>, ApiError> {
        Ok(self.call("fetch_all_achievements")?.achievements.clone())
    }

    async fn claim_achievement(&self, _achievement: &AchievementId) -> Result<(), ApiError> {
        self.call("claim_achievement").map(drop)
    }

    async fn fetch_season_pass(&self) -> Result<Option<Vec<SeasonPass>>, ApiError> {
        Ok(self.call("fetch_season_pass")?.season_passes.clone())
    }

    async fn claim_season_pass(
        &self,
        season: &SeasonId,
        _tier: SeasonTier,
        step: u64,
    ) -> Result<(), ApiError> {
        self.call("claim_season_pass")?
            .claimed_season_steps
            .push((season.clone(), step));
        Ok(())
    }
}

/// Hands out a `FakeApi` per account, keyed by the account's init data.
pub struct FakeConnector {
    pub log: CallLog,
    pub states: HashMap<String, FakeState>,
}

impl FakeConnector {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            states: HashMap::new(),
        }
    }
}

impl Connector for FakeConnector {
    type Api = FakeApi;

    fn connect(&mut self, account: &Account) -> Result<FakeApi, ApiError> {
        let state = self
            .states
            .get(&account.init_data)
            .cloned()
            .unwrap_or_default();
        Ok(FakeApi::new(&account.init_data, state, self.log.clone()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().clone()
    }
}

impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().push(duration);
    }
}
