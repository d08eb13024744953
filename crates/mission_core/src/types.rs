//! Type definitions for `mission_core`.
//!
//! Snapshots of remote game state: pets, missions, rewards, and the ID
//! newtypes that tie them together.

use serde::{Deserialize, Serialize};

/// Every mission exposes exactly three slot positions.
pub const MISSION_SLOTS: usize = 3;

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(PetId);
string_id!(PetClass);
string_id!(MissionId);
string_id!(QuestId);
string_id!(AchievementId);
string_id!(SeasonId);

// ---------------------------------------------------------------------------
// Pets and missions
// ---------------------------------------------------------------------------

/// One owned pet. The same `id` may appear several times in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub class: PetClass,
    pub star: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequirement {
    pub class: PetClass,
    pub min_star: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    /// `None` means the slot declares no requirement.
    pub slots: [Option<SlotRequirement>; MISSION_SLOTS],
    #[serde(default)]
    pub joined_pets: Vec<PetId>,
    #[serde(default)]
    pub can_complete: bool,
}

impl Mission {
    /// A mission is open until pets have been committed to it.
    pub fn is_open(&self) -> bool {
        self.joined_pets.is_empty()
    }
}

/// Pets chosen for a mission, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub mission_id: MissionId,
    pub pets: [PetId; MISSION_SLOTS],
}

// ---------------------------------------------------------------------------
// Account state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub token: f64,
    pub power: u64,
}

/// Reward kinds of the gatcha bonus track. The wire code is the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    GodPower = 1,
    Dna = 2,
}

impl BonusKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for BonusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BonusKind::GodPower => f.write_str("god power"),
            BonusKind::Dna => f.write_str("dna"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GatchaBonus {
    pub current_step: u64,
    pub is_claimed_god_power: bool,
    pub is_claimed_dna: bool,
    pub step_bonus_god_power: u64,
    pub step_bonus_dna: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReward {
    pub step: u64,
    pub is_claimed: bool,
    pub amount: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPass {
    pub season_id: SeasonId,
    pub current_step: u64,
    pub title: String,
    pub free_rewards: Vec<SeasonReward>,
}

/// Season pass reward track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonTier {
    Free,
}

impl SeasonTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonTier::Free => "free",
        }
    }
}
