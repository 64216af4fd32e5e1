//! Rewards that can be bought with points.
use serde::{Deserialize, Serialize};

use crate::points::PointsStore;

const DEFAULT_REWARDS_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/rewards.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cost: u64,
    pub image_url: String,
}

/// Whether a balance covers a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affordability {
    Claimable,
    Short { shortfall: u64 },
}

impl Affordability {
    #[must_use]
    pub const fn is_claimable(self) -> bool {
        matches!(self, Self::Claimable)
    }
}

impl Reward {
    #[must_use]
    pub const fn affordability(&self, balance: u64) -> Affordability {
        if balance >= self.cost {
            Affordability::Claimable
        } else {
            Affordability::Short {
                shortfall: self.cost - balance,
            }
        }
    }

    #[must_use]
    pub const fn can_claim(&self, balance: u64) -> bool {
        balance >= self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("no reward with id {0}")]
    UnknownReward(String),
    #[error("{shortfall} points short of {reward_id}")]
    InsufficientBalance { reward_id: String, shortfall: u64 },
}

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub reward_id: String,
    pub title: String,
    pub cost: u64,
    pub balance_before: u64,
    pub balance_after: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardsCatalog {
    pub rewards: Vec<Reward>,
}

impl RewardsCatalog {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a rewards catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_REWARDS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    /// Every reward in catalog order alongside whether `balance` covers it.
    #[must_use]
    pub fn with_affordability(&self, balance: u64) -> Vec<(&Reward, Affordability)> {
        self.rewards
            .iter()
            .map(|reward| (reward, reward.affordability(balance)))
            .collect()
    }

    /// Deduct a reward's cost from the store. Rewards may be claimed again
    /// as long as the balance allows.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::UnknownReward`] for an unknown id and
    /// [`ClaimError::InsufficientBalance`] when the current balance does not
    /// cover the cost; the balance is untouched in both cases.
    pub fn claim(&self, store: &PointsStore, reward_id: &str) -> Result<ClaimReceipt, ClaimError> {
        let reward = self
            .find(reward_id)
            .ok_or_else(|| ClaimError::UnknownReward(reward_id.to_string()))?;
        let balance_before = store.read();
        if let Affordability::Short { shortfall } = reward.affordability(balance_before) {
            return Err(ClaimError::InsufficientBalance {
                reward_id: reward.id.clone(),
                shortfall,
            });
        }
        let delta = i64::try_from(reward.cost).unwrap_or(i64::MAX);
        let balance_after = store.add(-delta);
        log::info!("claimed reward {} for {} points", reward.id, reward.cost);
        Ok(ClaimReceipt {
            reward_id: reward.id.clone(),
            title: reward.title.clone(),
            cost: reward.cost,
            balance_before,
            balance_after,
        })
    }
}
