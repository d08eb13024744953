use crate::{BonusKind, GatchaBonus, QuestId, SeasonPass, SeasonReward};

impl GatchaBonus {
    /// The single bonus to claim this pass. God power is checked first and
    /// wins whenever both are claimable.
    pub fn claimable(&self) -> Option<BonusKind> {
        if self.current_step >= self.step_bonus_god_power && !self.is_claimed_god_power {
            Some(BonusKind::GodPower)
        } else if self.current_step >= self.step_bonus_dna && !self.is_claimed_dna {
            Some(BonusKind::Dna)
        } else {
            None
        }
    }
}

impl SeasonPass {
    /// Free-track rewards already reached and not yet claimed.
    pub fn claimable_rewards(&self) -> impl Iterator<Item = &SeasonReward> {
        self.free_rewards
            .iter()
            .filter(|reward| reward.step <= self.current_step && !reward.is_claimed)
    }
}

/// Daily quests are only worth running when more than one quest is listed.
pub fn has_daily_quests(quests: &[QuestId]) -> bool {
    quests.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeasonId;

    fn bonus(step: u64, god: (u64, bool), dna: (u64, bool)) -> GatchaBonus {
        GatchaBonus {
            current_step: step,
            step_bonus_god_power: god.0,
            is_claimed_god_power: god.1,
            step_bonus_dna: dna.0,
            is_claimed_dna: dna.1,
        }
    }

    #[test]
    fn god_power_wins_when_both_are_claimable() {
        let b = bonus(10, (10, false), (5, false));
        assert_eq!(b.claimable(), Some(BonusKind::GodPower));
    }

    #[test]
    fn dna_claimed_when_god_power_already_taken() {
        let b = bonus(10, (10, true), (5, false));
        assert_eq!(b.claimable(), Some(BonusKind::Dna));
    }

    #[test]
    fn dna_claimed_when_god_power_not_reached() {
        let b = bonus(6, (10, false), (5, false));
        assert_eq!(b.claimable(), Some(BonusKind::Dna));
    }

    #[test]
    fn nothing_claimable_below_thresholds() {
        let b = bonus(2, (10, false), (5, false));
        assert_eq!(b.claimable(), None);
        let b = bonus(20, (10, true), (5, true));
        assert_eq!(b.claimable(), None);
    }

    #[test]
    fn bonus_codes_match_wire_values() {
        assert_eq!(BonusKind::GodPower.code(), 1);
        assert_eq!(BonusKind::Dna.code(), 2);
    }

    #[test]
    fn season_rewards_filter_by_step_and_claim_state() {
        let reward = |step, is_claimed| SeasonReward {
            step,
            is_claimed,
            amount: 10.0,
            name: "gem".to_string(),
        };
        let pass = SeasonPass {
            season_id: SeasonId::from("s1"),
            current_step: 3,
            title: "Spring".to_string(),
            free_rewards: vec![reward(1, true), reward(2, false), reward(3, false), reward(4, false)],
        };
        let steps: Vec<u64> = pass.claimable_rewards().map(|r| r.step).collect();
        assert_eq!(steps, vec![2, 3]);
    }

    #[test]
    fn single_quest_is_not_enough() {
        assert!(!has_daily_quests(&[]));
        assert!(!has_daily_quests(&[QuestId::from("q1")]));
        assert!(has_daily_quests(&[QuestId::from("q1"), QuestId::from("q2")]));
    }
}
