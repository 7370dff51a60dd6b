//! Geolocation providers.

use super::{Coordinate, LocationError, Side};

/// Supplies the human player's position, once.
pub trait Locator {
    fn locate(&self) -> Result<Coordinate, LocationError>;

    /// The side for the current position.
    fn side(&self) -> Result<Side, LocationError> {
        self.locate().map(Coordinate::side)
    }
}

/// A fixed position, for emulators and testing.
#[derive(Debug, Clone, Copy)]
pub struct MockLocation(pub Coordinate);

impl Locator for MockLocation {
    fn locate(&self) -> Result<Coordinate, LocationError> {
        let Coordinate { lat, lng } = self.0;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::Unavailable(format!("latitude {lat} out of range")));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(LocationError::Unavailable(format!("longitude {lng} out of range")));
        }
        Ok(self.0)
    }
}

/// A provider with no location services at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl Locator for NoLocation {
    fn locate(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Disabled)
    }
}

/// Picks a provider based on whether a mock coordinate was supplied.
pub fn locator(mock: Option<Coordinate>) -> Box<dyn Locator> {
    match mock {
        Some(coord) => Box::new(MockLocation(coord)),
        None => Box::new(NoLocation),
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn mock_location_resolves_side() {
        assert_eq!(MockLocation(Coordinate::new(35.0, 32.8)).side(), Ok(Side::East));
        assert_eq!(MockLocation(Coordinate::new(30.0, 32.8)).side(), Ok(Side::West));
    }

    #[test]
    fn mock_location_must_be_on_the_globe() {
        assert_matches!(
            MockLocation(Coordinate::new(91.0, 0.0)).locate(),
            Err(LocationError::Unavailable(_))
        );
        assert_matches!(
            MockLocation(Coordinate::new(35.0, -180.5)).side(),
            Err(LocationError::Unavailable(_))
        );
        assert_matches!(
            MockLocation(Coordinate::new(f64::NAN, 0.0)).locate(),
            Err(LocationError::Unavailable(_))
        );
        assert_eq!(MockLocation(Coordinate::new(-90.0, 180.0)).side(), Ok(Side::West));
    }

    #[test]
    fn no_location_fails() {
        assert_matches!(locator(None).side(), Err(LocationError::Disabled));
    }
}
