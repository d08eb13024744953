use serde::{Deserialize, Serialize};

/// Where the game service lives and how to reach each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Clan joined before daily quest check-ins.
    pub clan_id: String,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout_secs: 30,
            clan_id: String::new(),
            endpoints: Endpoints::default(),
        }
    }
}

/// Request paths, relative to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub user_info: String,
    pub pet_list: String,
    pub mission_list: String,
    pub join_mission: String,
    pub claim_mission: String,
    pub new_pet: String,
    pub gatcha_bonus: String,
    pub claim_gatcha_bonus: String,
    pub quest_list: String,
    pub check_in: String,
    pub join_clan: String,
    pub achievements: String,
    pub claim_achievement: String,
    pub season_pass: String,
    pub claim_season_pass: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            user_info: "/user/info".to_string(),
            pet_list: "/pet/list".to_string(),
            mission_list: "/mission/list".to_string(),
            join_mission: "/mission/enter".to_string(),
            claim_mission: "/mission/claim".to_string(),
            new_pet: "/pet/dna/gacha".to_string(),
            gatcha_bonus: "/pet/dna/gacha/bonus".to_string(),
            claim_gatcha_bonus: "/pet/dna/gacha/bonus/claim".to_string(),
            quest_list: "/quest/list".to_string(),
            check_in: "/quest/check".to_string(),
            join_clan: "/clan/join".to_string(),
            achievements: "/achievement/list".to_string(),
            claim_achievement: "/achievement/claim".to_string(),
            season_pass: "/season-pass/list".to_string(),
            claim_season_pass: "/season-pass/claim".to_string(),
        }
    }
}
