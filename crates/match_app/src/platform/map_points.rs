use match_core::geo::{Coordinate, HeatmapPoint};

/// Center of the demo activity map (East Lansing, MI).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(42.7370, -84.4839);

const POINTS: &[(&str, f64, f64, f64, &str, &str, u32)] = &[
    ("p1", 42.7370, -84.4839, 0.9, "Food Bank of South Michigan", "Food Bank", 15),
    ("p2", 42.7385, -84.4855, 0.85, "East Lansing Public Library", "Education", 8),
    ("p3", 42.7360, -84.4870, 0.8, "Community Kitchen", "Food Bank", 12),
    ("p4", 42.7395, -84.4825, 0.75, "Youth Mentoring Center", "Education", 20),
    ("p5", 42.7350, -84.4890, 0.88, "Habitat for Humanity", "Housing", 25),
    ("p6", 42.7230, -84.4810, 0.95, "MSU Service Learning", "Education", 30),
    ("p7", 42.7250, -84.4780, 0.82, "STEM Outreach Program", "Education", 15),
    ("p8", 42.7210, -84.4850, 0.78, "Campus Food Pantry", "Food Bank", 10),
    ("p9", 42.7270, -84.4750, 0.7, "Research Volunteer Program", "Research", 8),
    ("p10", 42.7280, -84.5520, 0.65, "City Rescue Mission", "Homeless Services", 18),
    ("p11", 42.7300, -84.5480, 0.6, "Free Legal Clinic", "Legal Aid", 5),
    ("p12", 42.7260, -84.5500, 0.55, "Downtown Health Center", "Healthcare", 12),
    ("p13", 42.7450, -84.5420, 0.5, "Arts Council", "Arts", 8),
    ("p14", 42.7470, -84.5400, 0.45, "Youth Theater", "Arts", 10),
    ("p15", 42.7180, -84.4200, 0.35, "Senior Center", "Senior Care", 6),
    ("p16", 42.7200, -84.4150, 0.3, "Meridian Library", "Library", 4),
    ("p17", 42.7480, -84.4000, 0.25, "Lake Lansing Park", "Environment", 8),
    ("p18", 42.7500, -84.3950, 0.2, "Animal Rescue", "Animal Shelter", 5),
];

/// Built-in activity map markers used by the `nearby` command.
pub fn activity_points() -> Vec<HeatmapPoint> {
    POINTS
        .iter()
        .map(
            |&(id, lat, lng, intensity, title, category, volunteers_needed)| HeatmapPoint {
                id: id.to_string(),
                position: Coordinate::new(lat, lng),
                intensity,
                title: title.to_string(),
                category: category.to_string(),
                volunteers_needed,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use match_core::geo::within_radius;

    use super::*;

    #[test]
    fn all_markers_present() {
        let points = activity_points();
        assert_eq!(points.len(), 18);
        let volunteers: u32 = points.iter().map(|point| point.volunteers_needed).sum();
        assert_eq!(volunteers, 219);
    }

    #[test]
    fn default_center_includes_campus_markers() {
        let points = activity_points();
        let ids: Vec<&str> = within_radius(DEFAULT_CENTER, &points, None)
            .into_iter()
            .map(|point| point.id.as_str())
            .collect();
        assert!(ids.contains(&"p9"));
        assert!(ids.contains(&"p1"));
        assert!(!ids.contains(&"p18"));
    }
}
