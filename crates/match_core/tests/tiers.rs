use match_core::tiers::{
    level_from_points, points_to_next_level, progress_within_level, BadgeLevel, BadgeLevels,
    BadgeTrack, RankScale, RankScaleError, TrackBadge, VolunteerRank,
};

#[test]
fn badge_level_boundaries_are_inclusive() {
    assert_eq!(level_from_points(0), BadgeLevel::Bronze);
    assert_eq!(level_from_points(99), BadgeLevel::Bronze);
    assert_eq!(level_from_points(100), BadgeLevel::Silver);
    assert_eq!(level_from_points(249), BadgeLevel::Silver);
    assert_eq!(level_from_points(250), BadgeLevel::Gold);
    assert_eq!(level_from_points(10_000), BadgeLevel::Gold);
}

#[test]
fn badge_progress_reference_points() {
    assert_eq!(progress_within_level(0), 0);
    assert_eq!(progress_within_level(50), 50);
    assert_eq!(progress_within_level(100), 0);
    assert_eq!(progress_within_level(175), 50);
    assert_eq!(progress_within_level(200), 67);
    assert_eq!(progress_within_level(250), 100);
    assert_eq!(progress_within_level(300), 100);
}

#[test]
fn badge_level_is_monotonic_and_progress_bounded() {
    let mut previous = BadgeLevel::Bronze;
    for points in 0..=1_000 {
        let level = level_from_points(points);
        assert!(level >= previous, "level dropped at {points}");
        assert!(progress_within_level(points) <= 100);
        previous = level;
    }
}

#[test]
fn points_to_next_level_counts_down() {
    assert_eq!(points_to_next_level(0), 100);
    assert_eq!(points_to_next_level(99), 1);
    assert_eq!(points_to_next_level(175), 75);
    assert_eq!(points_to_next_level(250), 0);
    assert_eq!(points_to_next_level(280), 0);
}

#[test]
fn custom_badge_thresholds() {
    let levels = BadgeLevels {
        silver: 10,
        gold: 20,
    };
    assert_eq!(levels.level_from_points(15), BadgeLevel::Silver);
    assert_eq!(levels.progress_within_level(15), 50);
    assert_eq!(levels.points_to_next_level(15), 5);
}

#[test]
fn track_badge_combines_track_and_level() {
    let badge = TrackBadge::from_points(BadgeTrack::Firefighter, 280, &BadgeLevels::default());
    assert_eq!(badge.level, BadgeLevel::Gold);
    assert_eq!(badge.points_to_next_level, 0);
    assert_eq!(badge.progress, 100);
    assert_eq!(BadgeTrack::parse("anchor"), Some(BadgeTrack::Anchor));
    assert_eq!(BadgeTrack::parse("plumber"), None);
}

#[test]
fn rank_scale_is_five_tiers_with_own_thresholds() {
    let scale = RankScale::default();
    assert_eq!(scale.rank_from_points(0), VolunteerRank::Bronze);
    // 250 points is gold as a badge level but still bronze as a rank.
    assert_eq!(scale.rank_from_points(250), VolunteerRank::Bronze);
    assert_eq!(scale.rank_from_points(500), VolunteerRank::Silver);
    assert_eq!(scale.rank_from_points(1500), VolunteerRank::Gold);
    assert_eq!(scale.rank_from_points(3000), VolunteerRank::Platinum);
    assert_eq!(scale.rank_from_points(6000), VolunteerRank::Diamond);

    assert_eq!(scale.rank_progress(250), 50);
    assert_eq!(scale.rank_progress(1000), 50);
    assert_eq!(scale.rank_progress(9000), 100);
    assert_eq!(scale.points_to_next_rank(1000), 500);
    assert_eq!(scale.points_to_next_rank(7000), 0);
}

#[test]
fn rank_scale_is_configurable_and_validated() {
    let scale = RankScale::new([0, 10, 20, 30, 40]).unwrap();
    assert_eq!(scale.rank_from_points(35), VolunteerRank::Platinum);
    assert_eq!(scale.rank_progress(35), 50);

    assert_eq!(
        RankScale::new([5, 10, 20, 30, 40]),
        Err(RankScaleError::NonZeroFloor)
    );
    assert_eq!(
        RankScale::new([0, 10, 10, 30, 40]),
        Err(RankScaleError::NotAscending)
    );
}

#[test]
fn rank_is_monotonic_and_progress_bounded() {
    let scale = RankScale::default();
    let mut previous = VolunteerRank::Bronze;
    for points in (0..=8_000).step_by(7) {
        let rank = scale.rank_from_points(points);
        assert!(rank >= previous);
        assert!(scale.rank_progress(points) <= 100);
        previous = rank;
    }
}
