use std::future::Future;

use mission_core::{
    AchievementId, Assignment, BonusKind, GatchaBonus, Mission, MissionId, Pet, QuestId,
    SeasonId, SeasonPass, SeasonTier, UserInfo,
};

use crate::ApiError;

/// Remote game service as seen by one account session.
///
/// Reads return fresh snapshots; nothing is cached between calls.
pub trait GameApi {
    fn fetch_user_info(&self) -> impl Future<Output = Result<UserInfo, ApiError>> + Send;

    /// Every owned pet, one entry per copy.
    fn fetch_pet_list(&self) -> impl Future<Output = Result<Vec<Pet>, ApiError>> + Send;

    fn fetch_mission_list(&self) -> impl Future<Output = Result<Vec<Mission>, ApiError>> + Send;

    fn join_mission(
        &self,
        assignment: &Assignment,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn claim_mission(&self, mission: &MissionId)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Hatches one pet and returns the power left afterwards.
    fn get_new_pet(&self) -> impl Future<Output = Result<u64, ApiError>> + Send;

    fn fetch_gatcha_bonus(&self) -> impl Future<Output = Result<GatchaBonus, ApiError>> + Send;

    fn claim_gatcha_bonus(&self, kind: BonusKind)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    fn fetch_quest_list(&self) -> impl Future<Output = Result<Vec<QuestId>, ApiError>> + Send;

    fn check_in(&self, quest: &QuestId) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn join_clan(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn fetch_all_achievements(
        &self,
    ) -> impl Future<Output = Result<Vec<AchievementId>, ApiError>> + Send;

    fn claim_achievement(
        &self,
        achievement: &AchievementId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `None` when the account has no season pass.
    fn fetch_season_pass(
        &self,
    ) -> impl Future<Output = Result<Option<Vec<SeasonPass>>, ApiError>> + Send;

    fn claim_season_pass(
        &self,
        season: &SeasonId,
        tier: SeasonTier,
        step: u64,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
