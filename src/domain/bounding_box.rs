//! Axis-aligned geographic bounding box used to filter locations.
//!
//! The box lives in plain latitude/longitude space: no geodesic correction
//! and no antimeridian wraparound. Every edge is inclusive.

/// Query parameter names, in the order the combined `bounding_box` form lists them.
pub const SW_LAT: &str = "sw_lat";
pub const SW_LON: &str = "sw_lon";
pub const NE_LAT: &str = "ne_lat";
pub const NE_LON: &str = "ne_lon";

/// Reasons a caller-supplied bounding box is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundingBoxError {
    #[error("expected 4 comma-separated coordinates, found {found}")]
    WrongArity { found: usize },

    #[error("missing coordinates: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("both bounding_box and individual corner parameters were supplied")]
    Ambiguous,

    #[error("{parameter} is not a finite number: '{value}'")]
    NotNumeric {
        parameter: &'static str,
        value: String,
    },

    #[error("southwest corner lies north or east of the northeast corner ({axis})")]
    Inverted { axis: &'static str },
}

/// Rectangle defined by its southwest and northeast corners.
///
/// Construct with [`BoundingBox::new`] or [`BoundingBox::parse`]; both guarantee
/// finite coordinates and `sw <= ne` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    sw_lat: f64,
    sw_lon: f64,
    ne_lat: f64,
    ne_lon: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its corner coordinates.
    ///
    /// A degenerate box (`sw == ne` on an axis) is accepted and matches points
    /// lying exactly on that line.
    ///
    /// # Errors
    ///
    /// - [`BoundingBoxError::NotNumeric`] if a coordinate is NaN or infinite
    /// - [`BoundingBoxError::Inverted`] if `sw_lat > ne_lat` or `sw_lon > ne_lon`
    pub fn new(sw_lat: f64, sw_lon: f64, ne_lat: f64, ne_lon: f64) -> Result<Self, BoundingBoxError> {
        for (parameter, value) in [
            (SW_LAT, sw_lat),
            (SW_LON, sw_lon),
            (NE_LAT, ne_lat),
            (NE_LON, ne_lon),
        ] {
            if !value.is_finite() {
                return Err(BoundingBoxError::NotNumeric {
                    parameter,
                    value: value.to_string(),
                });
            }
        }

        if sw_lat > ne_lat {
            return Err(BoundingBoxError::Inverted { axis: "latitude" });
        }
        if sw_lon > ne_lon {
            return Err(BoundingBoxError::Inverted { axis: "longitude" });
        }

        Ok(Self {
            sw_lat,
            sw_lon,
            ne_lat,
            ne_lon,
        })
    }

    /// Parses the combined `sw_lat,sw_lon,ne_lat,ne_lon` form.
    ///
    /// Whitespace around each value is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingBoxError::WrongArity`] unless there are exactly four
    /// values, plus any error from [`parse_coordinate`] or [`BoundingBox::new`].
    pub fn parse(raw: &str) -> Result<Self, BoundingBoxError> {
        let parts: Vec<&str> = raw.split(',').collect();
        let [sw_lat, sw_lon, ne_lat, ne_lon] = parts.as_slice() else {
            return Err(BoundingBoxError::WrongArity { found: parts.len() });
        };

        Self::new(
            parse_coordinate(SW_LAT, sw_lat)?,
            parse_coordinate(SW_LON, sw_lon)?,
            parse_coordinate(NE_LAT, ne_lat)?,
            parse_coordinate(NE_LON, ne_lon)?,
        )
    }

    /// Builds a box from the four individually supplied corner parameters.
    ///
    /// Returns `Ok(None)` when none of them is present: an absent box means
    /// "no filter" and is distinct from a malformed one.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingBoxError::Incomplete`] when only some are present.
    pub fn from_corners(
        sw_lat: Option<&str>,
        sw_lon: Option<&str>,
        ne_lat: Option<&str>,
        ne_lon: Option<&str>,
    ) -> Result<Option<Self>, BoundingBoxError> {
        let named = [(SW_LAT, sw_lat), (SW_LON, sw_lon), (NE_LAT, ne_lat), (NE_LON, ne_lon)];

        let missing: Vec<&'static str> = named
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        match (missing.len(), sw_lat, sw_lon, ne_lat, ne_lon) {
            (4, ..) => Ok(None),
            (0, Some(sw_lat), Some(sw_lon), Some(ne_lat), Some(ne_lon)) => Self::new(
                parse_coordinate(SW_LAT, sw_lat)?,
                parse_coordinate(SW_LON, sw_lon)?,
                parse_coordinate(NE_LAT, ne_lat)?,
                parse_coordinate(NE_LON, ne_lon)?,
            )
            .map(Some),
            _ => Err(BoundingBoxError::Incomplete { missing }),
        }
    }

    pub fn sw_lat(&self) -> f64 {
        self.sw_lat
    }

    pub fn sw_lon(&self) -> f64 {
        self.sw_lon
    }

    pub fn ne_lat(&self) -> f64 {
        self.ne_lat
    }

    pub fn ne_lon(&self) -> f64 {
        self.ne_lon
    }

    /// Returns true if the point lies inside the box or on its boundary.
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        (self.sw_lat..=self.ne_lat).contains(&latitude)
            && (self.sw_lon..=self.ne_lon).contains(&longitude)
    }
}

/// Parses one coordinate, rejecting anything that is not a finite `f64`.
///
/// # Errors
///
/// Returns [`BoundingBoxError::NotNumeric`] naming `parameter`.
pub fn parse_coordinate(parameter: &'static str, raw: &str) -> Result<f64, BoundingBoxError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| BoundingBoxError::NotNumeric {
            parameter,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_europe() -> BoundingBox {
        BoundingBox::new(46.5, 12.0, 49.0, 17.0).unwrap()
    }

    #[test]
    fn test_contains_inner_points() {
        let bbox = central_europe();

        assert!(bbox.contains(13.0550, 47.8095)); // Salzburg
        assert!(bbox.contains(16.3738, 48.2082)); // Vienna
    }

    #[test]
    fn test_excludes_points_outside() {
        let bbox = central_europe();

        assert!(!bbox.contains(13.4050, 52.5200)); // Berlin, too far north
        assert!(!bbox.contains(2.3522, 48.8566)); // Paris, too far west
        assert!(!bbox.contains(14.0, 46.0));
        assert!(!bbox.contains(17.5, 48.0));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let bbox = central_europe();

        assert!(bbox.contains(12.0, 46.5));
        assert!(bbox.contains(17.0, 49.0));
        assert!(bbox.contains(12.0, 49.0));
        assert!(bbox.contains(17.0, 46.5));
        assert!(bbox.contains(14.5, 46.5));
        assert!(bbox.contains(17.0, 47.0));
    }

    #[test]
    fn test_just_outside_boundary() {
        let bbox = central_europe();

        assert!(!bbox.contains(11.999_999, 47.0));
        assert!(!bbox.contains(14.0, 49.000_001));
    }

    #[test]
    fn test_degenerate_box_matches_single_point() {
        let bbox = BoundingBox::new(48.0, 16.0, 48.0, 16.0).unwrap();

        assert!(bbox.contains(16.0, 48.0));
        assert!(!bbox.contains(16.0, 48.1));
    }

    #[test]
    fn test_inverted_box_is_rejected() {
        assert_eq!(
            BoundingBox::new(49.0, 12.0, 46.5, 17.0),
            Err(BoundingBoxError::Inverted { axis: "latitude" })
        );
        assert_eq!(
            BoundingBox::new(46.5, 17.0, 49.0, 12.0),
            Err(BoundingBoxError::Inverted { axis: "longitude" })
        );
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let result = BoundingBox::new(f64::NAN, 12.0, 49.0, 17.0);
        assert!(matches!(
            result,
            Err(BoundingBoxError::NotNumeric { parameter: "sw_lat", .. })
        ));

        assert!(BoundingBox::new(46.5, 12.0, f64::INFINITY, 17.0).is_err());
    }

    #[test]
    fn test_parse_combined_form() {
        let bbox = BoundingBox::parse("46.5, 12.0,49.0 ,17.0").unwrap();

        assert_eq!(bbox, central_europe());
        assert_eq!(bbox.sw_lat(), 46.5);
        assert_eq!(bbox.ne_lon(), 17.0);
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            BoundingBox::parse("46.5,12.0,49.0"),
            Err(BoundingBoxError::WrongArity { found: 3 })
        );
        assert_eq!(
            BoundingBox::parse("46.5,12.0,49.0,17.0,1.0"),
            Err(BoundingBoxError::WrongArity { found: 5 })
        );
        assert_eq!(
            BoundingBox::parse(""),
            Err(BoundingBoxError::WrongArity { found: 1 })
        );
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            BoundingBox::parse("46.5,abc,49.0,17.0"),
            Err(BoundingBoxError::NotNumeric {
                parameter: "sw_lon",
                value: "abc".to_string(),
            })
        );
        assert!(BoundingBox::parse("46.5,12.0,NaN,17.0").is_err());
        assert!(BoundingBox::parse("46.5,12.0,49.0,").is_err());
    }

    #[test]
    fn test_from_corners_absent_is_no_filter() {
        assert_eq!(BoundingBox::from_corners(None, None, None, None), Ok(None));
    }

    #[test]
    fn test_from_corners_complete() {
        let bbox = BoundingBox::from_corners(Some("46.5"), Some("12.0"), Some("49.0"), Some("17.0"))
            .unwrap()
            .unwrap();

        assert_eq!(bbox, central_europe());
    }

    #[test]
    fn test_from_corners_partial_names_missing() {
        let result = BoundingBox::from_corners(Some("46.5"), Some("12.0"), Some("49.0"), None);

        assert_eq!(
            result,
            Err(BoundingBoxError::Incomplete {
                missing: vec!["ne_lon"]
            })
        );

        let result = BoundingBox::from_corners(None, Some("12.0"), None, None);
        assert_eq!(
            result,
            Err(BoundingBoxError::Incomplete {
                missing: vec!["sw_lat", "ne_lat", "ne_lon"]
            })
        );
    }

    #[test]
    fn test_from_corners_non_numeric() {
        let result = BoundingBox::from_corners(Some("46.5"), Some("12.0"), Some("north"), Some("17.0"));

        assert!(matches!(
            result,
            Err(BoundingBoxError::NotNumeric { parameter: "ne_lat", .. })
        ));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(SW_LAT, " -33.87 "), Ok(-33.87));
        assert!(parse_coordinate(SW_LAT, "inf").is_err());
        assert!(parse_coordinate(SW_LAT, "").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoundingBoxError::Incomplete {
                missing: vec!["sw_lat", "ne_lon"]
            }
            .to_string(),
            "missing coordinates: sw_lat, ne_lon"
        );
    }
}
