use chrono::{DateTime, Utc};
use match_core::geo::{distance_km, Coordinate, HeatmapPoint, HeatmapStats};
use match_core::tiers::{RankScale, TrackBadge};
use match_core::{format_distance, format_shift_time, AppViewModel, CardView, SwipeDirection};

/// Text for the whole card screen.
pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![header(view)];

    if view.loading {
        lines.push("Loading volunteer opportunities...".to_string());
    }
    if let Some(err) = &view.fetch_error {
        lines.push(format!("Could not load jobs: {err}"));
    }
    if let Some(err) = &view.submission_error {
        lines.push(format!("Your last decision was not saved: {err}"));
    } else if let Some(status) = &view.last_status {
        lines.push(format!("Saved: {status}"));
    }

    if view.is_empty_state() {
        lines.push(String::new());
        lines.push("All caught up!".to_string());
        lines.push("No more opportunities nearby. Type `refresh` to look again.".to_string());
        return lines;
    }

    if let Some(card) = &view.active_card {
        lines.push(String::new());
        lines.extend(card_lines(card, now));
    }
    if let Some(preview) = &view.preview_card {
        lines.push(format!("Up next: {}", preview.job.title));
    }
    if view.active_card.is_some() {
        lines.push(format!("{} remaining", view.remaining));
    }
    lines
}

fn header(view: &AppViewModel) -> String {
    if view.document_classes.is_empty() {
        "== Volunteer Match ==".to_string()
    } else {
        format!("== Volunteer Match == [{}]", view.document_classes.join(" "))
    }
}

fn card_lines(card: &CardView, now: DateTime<Utc>) -> Vec<String> {
    let job = &card.job;
    let urgent = if job.is_urgent { "[URGENT] " } else { "" };
    let mut lines = vec![
        format!("{urgent}{}  (match {:.0})", job.title, job.score),
        format!(
            "{} | {}",
            format_distance(job),
            format_shift_time(job.shift_start, now)
        ),
    ];
    if !job.short_description.is_empty() {
        lines.push(job.short_description.clone());
    }
    if !job.skill_tags.is_empty() {
        let tags: Vec<&str> = job.skill_tags.iter().map(String::as_str).collect();
        lines.push(format!("Skills: {}", tags.join(", ")));
    }
    if !job.poster_username.is_empty() {
        lines.push(format!("Posted by @{}", job.poster_username));
    }

    let transform = card.transform;
    if transform.dragging || transform.exiting {
        let stamp = match transform.pending_direction {
            Some(SwipeDirection::Right) => " INTERESTED",
            Some(SwipeDirection::Left) => " PASS",
            None => "",
        };
        lines.push(format!(
            "<offset {:+.0}, {:+.0} | tilt {:+.1} deg>{stamp}",
            transform.offset_x, transform.offset_y, transform.rotation_degrees
        ));
    }
    lines
}

pub fn rank_lines(points: u32, scale: &RankScale) -> Vec<String> {
    let rank = scale.rank_from_points(points);
    let mut lines = vec![format!(
        "{points} points: {rank} rank ({}% through)",
        scale.rank_progress(points)
    )];
    match scale.points_to_next_rank(points) {
        0 => lines.push("Top rank reached".to_string()),
        needed => lines.push(format!("{needed} points to the next rank")),
    }
    lines
}

pub fn badge_lines(badge: &TrackBadge) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} badge: {} ({} points, {}% through)",
            badge.track.name(),
            badge.level,
            badge.current_points,
            badge.progress
        ),
        badge.track.description().to_string(),
    ];
    if badge.points_to_next_level > 0 {
        lines.push(format!(
            "{} points to the next level",
            badge.points_to_next_level
        ));
    }
    lines
}

pub fn nearby_lines(center: Coordinate, points: &[&HeatmapPoint]) -> Vec<String> {
    let stats = HeatmapStats::from_points(points.iter().copied());
    let mut lines = vec![format!(
        "{} opportunities from {} organizations, {} volunteers needed",
        stats.total_opportunities, stats.total_organizations, stats.total_volunteers_needed
    )];
    for point in points {
        lines.push(format!(
            "  {:<32} {:<18} {:>4.1} km  needs {}",
            point.title,
            point.category,
            distance_km(center, point.position),
            point.volunteers_needed
        ));
    }
    lines
}
