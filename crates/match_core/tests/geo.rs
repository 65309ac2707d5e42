use match_core::geo::{
    distance_km, haversine_distance_km, within_radius, Coordinate, HeatmapPoint, HeatmapStats,
};

const CAMPUS: Coordinate = Coordinate::new(42.7370, -84.4839);

fn point(id: &str, lat: f64, lng: f64, volunteers: u32) -> HeatmapPoint {
    HeatmapPoint {
        id: id.to_string(),
        position: Coordinate::new(lat, lng),
        intensity: 0.5,
        title: format!("Site {id}"),
        category: "Community".to_string(),
        volunteers_needed: volunteers,
    }
}

#[test]
fn same_point_is_zero() {
    assert_eq!(haversine_distance_km(42.7370, -84.4839, 42.7370, -84.4839), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let pairs = [
        (CAMPUS, Coordinate::new(42.7325, -84.5555)),
        (Coordinate::new(51.5074, -0.1278), Coordinate::new(48.8566, 2.3522)),
        (Coordinate::new(-33.8688, 151.2093), Coordinate::new(35.6762, 139.6503)),
    ];
    for (a, b) in pairs {
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }
}

#[test]
fn london_to_paris_is_about_344_km() {
    let d = haversine_distance_km(51.5074, -0.1278, 48.8566, 2.3522);
    assert!((d - 343.5).abs() < 1.0, "got {d}");
}

#[test]
fn radius_filter_defaults_to_five_km() {
    let points = vec![
        point("near", 42.7360, -84.4800, 4),
        point("town", 42.7325, -84.5555, 6),
        point("far", 42.9634, -85.6681, 10),
    ];

    let nearby = within_radius(CAMPUS, &points, None);
    let ids: Vec<&str> = nearby.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["near"]);

    let wider = within_radius(CAMPUS, &points, Some(10.0));
    assert_eq!(wider.len(), 2);

    let stats = HeatmapStats::from_points(wider.iter().copied());
    assert_eq!(stats.total_opportunities, 2);
    assert_eq!(stats.total_organizations, 2);
    assert_eq!(stats.total_volunteers_needed, 10);
    assert_eq!(stats.cities_covered, 1);
}

#[test]
fn organizations_round_up() {
    let points: Vec<HeatmapPoint> = (0..5).map(|i| point(&i.to_string(), 0.0, 0.0, 1)).collect();
    assert_eq!(HeatmapStats::from_points(&points).total_organizations, 3);
    assert_eq!(HeatmapStats::from_points(&points[..1]).total_organizations, 1);
    assert_eq!(HeatmapStats::from_points(&points[..0]).total_organizations, 0);
}

#[test]
fn non_positive_radius_uses_default() {
    let points = vec![
        point("near", 42.7360, -84.4800, 4),
        point("town", 42.7325, -84.5555, 6),
    ];
    for radius in [Some(0.0), Some(-2.0)] {
        let ids: Vec<&str> = within_radius(CAMPUS, &points, radius)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["near"]);
    }
}

#[test]
fn volunteer_total_saturates() {
    let points = vec![point("a", 0.0, 0.0, u32::MAX), point("b", 0.0, 0.0, 7)];
    assert_eq!(HeatmapStats::from_points(&points).total_volunteers_needed, u32::MAX);
}
