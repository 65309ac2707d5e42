//! Great-circle distance and radius filtering.

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Radius applied by [`within_radius`] when the caller gives none.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance_km(a.lat, a.lng, b.lat, b.lng)
}

/// Items no farther than `radius_km` (inclusive) from `center`, in input order.
/// A missing, zero or negative radius means [`DEFAULT_NEARBY_RADIUS_KM`].
pub fn within_radius<'a, T: Located>(
    center: Coordinate,
    items: &'a [T],
    radius_km: Option<f64>,
) -> Vec<&'a T> {
    let radius = radius_km
        .filter(|km| *km > 0.0)
        .unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    items
        .iter()
        .filter(|item| distance_km(center, item.coordinate()) <= radius)
        .collect()
}

/// A volunteer opportunity marker on the activity map.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPoint {
    pub id: String,
    pub position: Coordinate,
    /// 0..=1
    pub intensity: f64,
    pub title: String,
    pub category: String,
    pub volunteers_needed: u32,
}

impl Located for HeatmapPoint {
    fn coordinate(&self) -> Coordinate {
        self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeatmapStats {
    pub total_opportunities: usize,
    pub total_organizations: usize,
    pub total_volunteers_needed: u32,
    pub cities_covered: usize,
}

impl HeatmapStats {
    /// Totals for a radius-filtered set of points, which always covers one city.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a HeatmapPoint>) -> Self {
        let (count, volunteers) = points
            .into_iter()
            .fold((0usize, 0u32), |(count, sum), point| {
                (count + 1, sum.saturating_add(point.volunteers_needed))
            });
        Self {
            total_opportunities: count,
            total_organizations: (count * 3).div_ceil(5),
            total_volunteers_needed: volunteers,
            cities_covered: 1,
        }
    }
}
