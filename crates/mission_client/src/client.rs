use std::time::Duration;

use mission_control::{ApiError, GameApi};
use mission_core::{
    AchievementId, Assignment, BonusKind, GatchaBonus, Mission, MissionId, Pet, QuestId,
    SeasonId, SeasonPass, SeasonTier, UserInfo,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Proxy, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::wire::{
    claimable_achievements, AchievementBody, BonusBody, ClanBody, Envelope, JoinMissionBody,
    MissionBody, QuestBody, SeasonClaimBody, WireAchievement, WireGatchaBonus, WireMission,
    WireNewPet, WirePet, WireQuest, WireSeasonPass, WireUserInfo,
};
use crate::ClientConfig;

const INIT_DATA_HEADER: &str = "tg-init-data";

/// One account's session against the game service.
pub struct GameClient {
    http: Client,
    config: ClientConfig,
}

impl GameClient {
    /// Builds a session sending `init_data` on every request, optionally
    /// through `proxy`. Without a proxy the connection is direct, ignoring
    /// proxy environment variables.
    pub fn new(
        config: &ClientConfig,
        init_data: &str,
        proxy: Option<&str>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let init_value =
            HeaderValue::from_str(init_data).map_err(|err| transport("session", err))?;
        headers.insert(INIT_DATA_HEADER, init_value);

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs));
        builder = match proxy {
            Some(url) => builder.proxy(Proxy::all(url).map_err(|err| transport("proxy", err))?),
            None => builder.no_proxy(),
        };
        let http = builder.build().map_err(|err| transport("session", err))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let body = self.execute(path, self.http.get(self.url(path))).await?;
        decode(path, &body)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        self.execute(path, self.http.post(self.url(path)).json(body)).await
    }

    async fn execute(&self, path: &str, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|err| transport(path, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await.map_err(|err| transport(path, err))?;
        debug!(endpoint = path, bytes = body.len(), "response received");
        Ok(body)
    }
}

fn transport(endpoint: &str, err: impl std::error::Error + Send + Sync + 'static) -> ApiError {
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        source: Box::new(err),
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<Option<T>, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.result)
        .map_err(|err| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
}

fn convert_all<W, T: From<W>>(items: Option<Vec<W>>) -> Vec<T> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(T::from)
        .collect()
}

impl GameApi for GameClient {
    async fn fetch_user_info(&self) -> Result<UserInfo, ApiError> {
        let wire: Option<WireUserInfo> = self.get(&self.config.endpoints.user_info).await?;
        Ok(wire.unwrap_or_default().into())
    }

    async fn fetch_pet_list(&self) -> Result<Vec<Pet>, ApiError> {
        let wire: Option<Vec<WirePet>> = self.get(&self.config.endpoints.pet_list).await?;
        Ok(convert_all(wire))
    }

    async fn fetch_mission_list(&self) -> Result<Vec<Mission>, ApiError> {
        let wire: Option<Vec<WireMission>> =
            self.get(&self.config.endpoints.mission_list).await?;
        Ok(convert_all(wire))
    }

    async fn join_mission(&self, assignment: &Assignment) -> Result<(), ApiError> {
        let body = JoinMissionBody::from(assignment);
        self.post(&self.config.endpoints.join_mission, &body)
            .await
            .map(drop)
    }

    async fn claim_mission(&self, mission: &MissionId) -> Result<(), ApiError> {
        let body = MissionBody {
            mission_id: &mission.0,
        };
        self.post(&self.config.endpoints.claim_mission, &body)
            .await
            .map(drop)
    }

    async fn get_new_pet(&self) -> Result<u64, ApiError> {
        let path = &self.config.endpoints.new_pet;
        let body = self.post(path, &serde_json::json!({})).await?;
        let wire: Option<WireNewPet> = decode(path, &body)?;
        Ok(wire.and_then(|pet| pet.god_power).unwrap_or(0))
    }

    async fn fetch_gatcha_bonus(&self) -> Result<GatchaBonus, ApiError> {
        let wire: Option<WireGatchaBonus> =
            self.get(&self.config.endpoints.gatcha_bonus).await?;
        Ok(wire.unwrap_or_default().into())
    }

    async fn claim_gatcha_bonus(&self, kind: BonusKind) -> Result<(), ApiError> {
        let body = BonusBody {
            reward_no: kind.code(),
        };
        self.post(&self.config.endpoints.claim_gatcha_bonus, &body)
            .await
            .map(drop)
    }

    async fn fetch_quest_list(&self) -> Result<Vec<QuestId>, ApiError> {
        let wire: Option<Vec<WireQuest>> = self.get(&self.config.endpoints.quest_list).await?;
        Ok(convert_all(wire))
    }

    async fn check_in(&self, quest: &QuestId) -> Result<(), ApiError> {
        let body = QuestBody { quest_id: &quest.0 };
        self.post(&self.config.endpoints.check_in, &body)
            .await
            .map(drop)
    }

    async fn join_clan(&self) -> Result<(), ApiError> {
        let body = ClanBody {
            clan_id: &self.config.clan_id,
        };
        self.post(&self.config.endpoints.join_clan, &body)
            .await
            .map(drop)
    }

    async fn fetch_all_achievements(&self) -> Result<Vec<AchievementId>, ApiError> {
        let wire: Option<Vec<WireAchievement>> =
            self.get(&self.config.endpoints.achievements).await?;
        Ok(claimable_achievements(wire.unwrap_or_default()))
    }

    async fn claim_achievement(&self, achievement: &AchievementId) -> Result<(), ApiError> {
        let body = AchievementBody {
            achievement_id: &achievement.0,
        };
        self.post(&self.config.endpoints.claim_achievement, &body)
            .await
            .map(drop)
    }

    async fn fetch_season_pass(&self) -> Result<Option<Vec<SeasonPass>>, ApiError> {
        let wire: Option<Vec<WireSeasonPass>> =
            self.get(&self.config.endpoints.season_pass).await?;
        Ok(wire.map(|passes| passes.into_iter().map(SeasonPass::from).collect()))
    }

    async fn claim_season_pass(
        &self,
        season: &SeasonId,
        tier: SeasonTier,
        step: u64,
    ) -> Result<(), ApiError> {
        let body = SeasonClaimBody {
            season_id: &season.0,
            tier: tier.as_str(),
            step,
        };
        self.post(&self.config.endpoints.claim_season_pass, &body)
            .await
            .map(drop)
    }
}
