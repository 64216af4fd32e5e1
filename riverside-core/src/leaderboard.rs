//! Escape-room hall of fame.
use serde::{Deserialize, Serialize};

const DEFAULT_LEADERBOARD_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/leaderboard.json");

/// Podium medal for the three fastest teams. The points are a badge only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank.
    #[must_use]
    pub const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Gold => 100,
            Self::Silver => 75,
            Self::Bronze => 50,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<String>,
    /// Completion time as `mm:ss`.
    pub time: String,
    pub room: String,
}

impl LeaderboardEntry {
    /// Completion time in seconds, if `time` is a valid `mm:ss`.
    #[must_use]
    pub fn completion_seconds(&self) -> Option<u32> {
        let (minutes, seconds) = self.time.split_once(':')?;
        let minutes: u32 = minutes.trim().parse().ok()?;
        let seconds: u32 = seconds.trim().parse().ok()?;
        (seconds < 60).then_some(minutes * 60 + seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
    pub medal: Option<Medal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a leaderboard.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_LEADERBOARD_DATA).unwrap_or_default()
    }

    /// Entries ordered by completion time, fastest first. Unparseable times
    /// sort last; ties keep file order.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        let mut sorted: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.completion_seconds().unwrap_or(u32::MAX));
        sorted
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| RankedEntry {
                rank: idx + 1,
                entry,
                medal: Medal::for_rank(idx + 1),
            })
            .collect()
    }
}
