//! Wind bearing to compass octant.
//!
//! The table leaves small gaps between neighbouring ranges (22.5..22.6 and
//! so on) and does not cover 337.5..360. Anything that falls through lands
//! on the north fallback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

struct BearingRange {
    point: CompassPoint,
    begin: f64,
    end: f64,
}

const BEARING_TABLE: [BearingRange; 8] = [
    BearingRange { point: CompassPoint::N, begin: -22.5, end: 22.5 },
    BearingRange { point: CompassPoint::NE, begin: 22.6, end: 67.4 },
    BearingRange { point: CompassPoint::E, begin: 67.5, end: 112.5 },
    BearingRange { point: CompassPoint::SE, begin: 112.6, end: 157.4 },
    BearingRange { point: CompassPoint::S, begin: 157.5, end: 202.5 },
    BearingRange { point: CompassPoint::SW, begin: 202.6, end: 247.4 },
    BearingRange { point: CompassPoint::W, begin: 247.5, end: 292.5 },
    BearingRange { point: CompassPoint::NW, begin: 292.6, end: 337.4 },
];

/// First range containing `degrees` (both ends inclusive), else north.
#[must_use]
pub fn compass_point(degrees: f64) -> CompassPoint {
    BEARING_TABLE
        .iter()
        .find(|range| degrees >= range.begin && degrees <= range.end)
        .map_or(CompassPoint::N, |range| range.point)
}

#[must_use]
pub fn wind_direction(degrees: f64) -> &'static str {
    compass_point(degrees).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_covers_both_sides_of_zero() {
        for degrees in [-22.5, 0.0, 22.5] {
            assert_eq!(wind_direction(degrees), "N", "degrees={degrees}");
        }
    }

    #[test]
    fn octant_centres() {
        let expected = [
            (45.0, "NE"),
            (90.0, "E"),
            (135.0, "SE"),
            (180.0, "S"),
            (225.0, "SW"),
            (270.0, "W"),
            (315.0, "NW"),
        ];
        for (degrees, label) in expected {
            assert_eq!(wind_direction(degrees), label, "degrees={degrees}");
        }
    }

    #[test]
    fn inclusive_range_edges() {
        assert_eq!(compass_point(22.6), CompassPoint::NE);
        assert_eq!(compass_point(67.4), CompassPoint::NE);
        assert_eq!(compass_point(67.5), CompassPoint::E);
        assert_eq!(compass_point(337.4), CompassPoint::NW);
    }

    #[test]
    fn gaps_fall_back_to_north() {
        assert_eq!(compass_point(22.55), CompassPoint::N);
        assert_eq!(compass_point(67.45), CompassPoint::N);
        assert_eq!(compass_point(247.45), CompassPoint::N);
        assert_eq!(compass_point(337.5), CompassPoint::N);
        assert_eq!(compass_point(359.9), CompassPoint::N);
    }

    #[test]
    fn out_of_range_values_fall_back_to_north() {
        assert_eq!(compass_point(-90.0), CompassPoint::N);
        assert_eq!(compass_point(405.0), CompassPoint::N);
        assert_eq!(compass_point(f64::NAN), CompassPoint::N);
    }
}
