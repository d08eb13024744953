//! JSON schema of the game service.
//!
//! Every response wraps its payload in `{ "result": ... }`. Field names are
//! owned by the server; ids may arrive as strings or numbers and are kept
//! as strings.

use mission_core::{
    AchievementId, Assignment, GatchaBonus, Mission, MissionId, Pet, PetClass, PetId, QuestId,
    SeasonId, SeasonPass, SeasonReward, SlotRequirement, UserInfo,
};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: Option<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(RawId::into_string)
}

fn opt_id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_string))
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireUserInfo {
    #[serde(default)]
    telegram_username: Option<String>,
    #[serde(default)]
    token: Option<f64>,
    #[serde(default)]
    god_power: Option<u64>,
}

impl From<WireUserInfo> for UserInfo {
    fn from(wire: WireUserInfo) -> Self {
        UserInfo {
            username: wire
                .telegram_username
                .unwrap_or_else(|| "Unknown".to_string()),
            token: wire.token.unwrap_or(0.0),
            power: wire.god_power.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePet {
    #[serde(deserialize_with = "id_string")]
    pet_id: String,
    #[serde(deserialize_with = "id_string")]
    class: String,
    star: u32,
}

impl From<WirePet> for Pet {
    fn from(wire: WirePet) -> Self {
        Pet {
            id: PetId(wire.pet_id),
            class: PetClass(wire.class),
            star: wire.star,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireJoinedPet {
    #[serde(deserialize_with = "id_string")]
    pet_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMission {
    #[serde(deserialize_with = "id_string")]
    mission_id: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pet_1_class: Option<String>,
    #[serde(default)]
    pet_1_star: Option<u32>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pet_2_class: Option<String>,
    #[serde(default)]
    pet_2_star: Option<u32>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pet_3_class: Option<String>,
    #[serde(default)]
    pet_3_star: Option<u32>,
    #[serde(default)]
    pet_joined: Option<Vec<WireJoinedPet>>,
    #[serde(default)]
    can_completed: bool,
}

/// A slot without a class declares no requirement. A class without a star
/// accepts that class at any rank.
fn requirement(class: Option<String>, star: Option<u32>) -> Option<SlotRequirement> {
    Some(SlotRequirement {
        class: PetClass(class?),
        min_star: star.unwrap_or(0),
    })
}

impl From<WireMission> for Mission {
    fn from(wire: WireMission) -> Self {
        Mission {
            id: MissionId(wire.mission_id),
            slots: [
                requirement(wire.pet_1_class, wire.pet_1_star),
                requirement(wire.pet_2_class, wire.pet_2_star),
                requirement(wire.pet_3_class, wire.pet_3_star),
            ],
            joined_pets: wire
                .pet_joined
                .unwrap_or_default()
                .into_iter()
                .map(|pet| PetId(pet.pet_id))
                .collect(),
            can_complete: wire.can_completed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireNewPet {
    #[serde(default)]
    pub god_power: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireGatchaBonus {
    current_step: u64,
    is_claimed_god_power: bool,
    is_claimed_dna: bool,
    step_bonus_god_power: u64,
    step_bonus_dna: u64,
}

impl From<WireGatchaBonus> for GatchaBonus {
    fn from(wire: WireGatchaBonus) -> Self {
        GatchaBonus {
            current_step: wire.current_step,
            is_claimed_god_power: wire.is_claimed_god_power,
            is_claimed_dna: wire.is_claimed_dna,
            step_bonus_god_power: wire.step_bonus_god_power,
            step_bonus_dna: wire.step_bonus_dna,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuest {
    #[serde(deserialize_with = "id_string")]
    quest_id: String,
}

impl From<WireQuest> for QuestId {
    fn from(wire: WireQuest) -> Self {
        QuestId(wire.quest_id)
    }
}

fn yes() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAchievement {
    #[serde(deserialize_with = "id_string")]
    achievement_id: String,
    #[serde(default = "yes")]
    is_completed: bool,
    #[serde(default)]
    is_claimed: bool,
}

/// Ids of achievements that are done but not yet claimed.
pub(crate) fn claimable_achievements(entries: Vec<WireAchievement>) -> Vec<AchievementId> {
    entries
        .into_iter()
        .filter(|entry| entry.is_completed && !entry.is_claimed)
        .map(|entry| AchievementId(entry.achievement_id))
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSeasonReward {
    step: u64,
    #[serde(default)]
    is_claimed: bool,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    name: String,
}

fn zero_id() -> String {
    "0".to_string()
}

fn unknown_title() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSeasonPass {
    #[serde(default = "zero_id", deserialize_with = "id_string")]
    season_id: String,
    #[serde(default)]
    current_step: u64,
    #[serde(default = "unknown_title")]
    title: String,
    #[serde(default)]
    free_rewards: Vec<WireSeasonReward>,
}

impl From<WireSeasonPass> for SeasonPass {
    fn from(wire: WireSeasonPass) -> Self {
        SeasonPass {
            season_id: SeasonId(wire.season_id),
            current_step: wire.current_step,
            title: wire.title,
            free_rewards: wire
                .free_rewards
                .into_iter()
                .map(|reward| SeasonReward {
                    step: reward.step,
                    is_claimed: reward.is_claimed,
                    amount: reward.amount,
                    name: reward.name,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct JoinMissionBody<'a> {
    mission_id: &'a str,
    pet_1_id: &'a str,
    pet_2_id: &'a str,
    pet_3_id: &'a str,
}

impl<'a> From<&'a Assignment> for JoinMissionBody<'a> {
    fn from(assignment: &'a Assignment) -> Self {
        let [first, second, third] = &assignment.pets;
        JoinMissionBody {
            mission_id: &assignment.mission_id.0,
            pet_1_id: &first.0,
            pet_2_id: &second.0,
            pet_3_id: &third.0,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MissionBody<'a> {
    pub mission_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct BonusBody {
    pub reward_no: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestBody<'a> {
    pub quest_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClanBody<'a> {
    pub clan_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AchievementBody<'a> {
    pub achievement_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SeasonClaimBody<'a> {
    pub season_id: &'a str,
    #[serde(rename = "type")]
    pub tier: &'a str,
    pub step: u64,
}
