//! Points-to-tier calculators.
//!
//! Two independent schemes live here: the three-level badge
//! ladder used by each badge track, and the five-tier volunteer rank over
//! total points. They share no thresholds and must not be merged.

use std::fmt;

/// Level of a single badge track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BadgeLevel {
    Bronze,
    Silver,
    Gold,
}

impl fmt::Display for BadgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BadgeLevel::Bronze => "Bronze",
            BadgeLevel::Silver => "Silver",
            BadgeLevel::Gold => "Gold",
        })
    }
}

/// Minimum points for silver and gold; bronze starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLevels {
    pub silver: u32,
    pub gold: u32,
}

impl Default for BadgeLevels {
    fn default() -> Self {
        Self {
            silver: 100,
            gold: 250,
        }
    }
}

impl BadgeLevels {
    /// Lower bounds are inclusive.
    pub fn level_from_points(&self, points: u32) -> BadgeLevel {
        if points >= self.gold {
            BadgeLevel::Gold
        } else if points >= self.silver {
            BadgeLevel::Silver
        } else {
            BadgeLevel::Bronze
        }
    }

    /// Percent through the current level, 0..=100. Gold is always 100.
    pub fn progress_within_level(&self, points: u32) -> u8 {
        match self.level_from_points(points) {
            BadgeLevel::Gold => 100,
            BadgeLevel::Silver => percent(points - self.silver, self.gold - self.silver),
            BadgeLevel::Bronze => percent(points, self.silver),
        }
    }

    pub fn points_to_next_level(&self, points: u32) -> u32 {
        match self.level_from_points(points) {
            BadgeLevel::Gold => 0,
            BadgeLevel::Silver => self.gold - points,
            BadgeLevel::Bronze => self.silver - points,
        }
    }
}

pub fn level_from_points(points: u32) -> BadgeLevel {
    BadgeLevels::default().level_from_points(points)
}

pub fn progress_within_level(points: u32) -> u8 {
    BadgeLevels::default().progress_within_level(points)
}

pub fn points_to_next_level(points: u32) -> u32 {
    BadgeLevels::default().points_to_next_level(points)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTrack {
    Specialist,
    Firefighter,
    Anchor,
    Inclusionist,
}

impl BadgeTrack {
    pub const ALL: [BadgeTrack; 4] = [
        BadgeTrack::Specialist,
        BadgeTrack::Firefighter,
        BadgeTrack::Anchor,
        BadgeTrack::Inclusionist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BadgeTrack::Specialist => "Specialist",
            BadgeTrack::Firefighter => "Firefighter",
            BadgeTrack::Anchor => "Anchor",
            BadgeTrack::Inclusionist => "Inclusionist",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BadgeTrack::Specialist => "Deep expertise in specific volunteer areas",
            BadgeTrack::Firefighter => "Quick response to urgent volunteer needs",
            BadgeTrack::Anchor => "Consistent and reliable volunteer presence",
            BadgeTrack::Inclusionist => "Champion of accessible and inclusive volunteering",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|track| track.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A track's standing derived from its accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackBadge {
    pub track: BadgeTrack,
    pub level: BadgeLevel,
    pub current_points: u32,
    pub points_to_next_level: u32,
    pub progress: u8,
}

impl TrackBadge {
    pub fn from_points(track: BadgeTrack, points: u32, levels: &BadgeLevels) -> Self {
        Self {
            track,
            level: levels.level_from_points(points),
            current_points: points,
            points_to_next_level: levels.points_to_next_level(points),
            progress: levels.progress_within_level(points),
        }
    }
}

/// Aggregate volunteer rank over total points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VolunteerRank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl VolunteerRank {
    pub const ORDER: [VolunteerRank; 5] = [
        VolunteerRank::Bronze,
        VolunteerRank::Silver,
        VolunteerRank::Gold,
        VolunteerRank::Platinum,
        VolunteerRank::Diamond,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for VolunteerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VolunteerRank::Bronze => "Bronze",
            VolunteerRank::Silver => "Silver",
            VolunteerRank::Gold => "Gold",
            VolunteerRank::Platinum => "Platinum",
            VolunteerRank::Diamond => "Diamond",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankScaleError {
    /// The bronze minimum must be zero so every point total has a rank.
    NonZeroFloor,
    /// Minimums must strictly increase from bronze to diamond.
    NotAscending,
}

impl fmt::Display for RankScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankScaleError::NonZeroFloor => write!(f, "bronze rank must start at 0 points"),
            RankScaleError::NotAscending => write!(f, "rank minimums must strictly increase"),
        }
    }
}

impl std::error::Error for RankScaleError {}

/// Minimum total points for each rank, in [`VolunteerRank::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankScale {
    minimums: [u32; 5],
}

impl Default for RankScale {
    fn default() -> Self {
        Self {
            minimums: [0, 500, 1500, 3000, 6000],
        }
    }
}

impl RankScale {
    pub fn new(minimums: [u32; 5]) -> Result<Self, RankScaleError> {
        if minimums[0] != 0 {
            return Err(RankScaleError::NonZeroFloor);
        }
        if minimums.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(RankScaleError::NotAscending);
        }
        Ok(Self { minimums })
    }

    pub fn minimum(&self, rank: VolunteerRank) -> u32 {
        self.minimums[rank.index()]
    }

    pub fn rank_from_points(&self, points: u32) -> VolunteerRank {
        VolunteerRank::ORDER
            .into_iter()
            .rev()
            .find(|rank| points >= self.minimum(*rank))
            .unwrap_or(VolunteerRank::Bronze)
    }

    /// Percent through the current rank, 0..=100. Diamond is always 100.
    pub fn rank_progress(&self, points: u32) -> u8 {
        let rank = self.rank_from_points(points);
        match self.next_minimum(rank) {
            None => 100,
            Some(next) => {
                let floor = self.minimum(rank);
                percent(points - floor, next - floor)
            }
        }
    }

    pub fn points_to_next_rank(&self, points: u32) -> u32 {
        let rank = self.rank_from_points(points);
        self.next_minimum(rank)
            .map_or(0, |next| next.saturating_sub(points))
    }

    fn next_minimum(&self, rank: VolunteerRank) -> Option<u32> {
        self.minimums.get(rank.index() + 1).copied()
    }
}

/// `round(part / whole * 100)`, clamped to 0..=100.
fn percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 100;
    }
    let value = (f64::from(part) / f64::from(whole) * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}
