//! Geographic sides.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The latitude dividing East from West. Coordinates on the line belong to the East.
pub const REFERENCE_LATITUDE: f64 = 34.817549168324334;

/// One of the two geographic halves a player fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    East,
    West,
}
impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::East => "East",
            Side::West => "West",
        })
    }
}
impl TryFrom<char> for Side {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'E' | 'e' => Side::East,
            'W' | 'w' => Side::West,
            _ => return Err(()),
        })
    }
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "east" => Ok(Side::East),
            "west" => Ok(Side::West),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Side::try_from(c),
                    _ => Err(()),
                }
            }
        }
    }
}

impl Side {
    /// Both sides.
    pub fn all_sides() -> &'static [Side; 2] {
        static SIDES: [Side; 2] = [Side::East, Side::West];
        &SIDES
    }

    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    /// The display colour for the side.
    pub fn color(self) -> ansi_term::Colour {
        match self {
            Side::East => ansi_term::Colour::Blue,
            Side::West => ansi_term::Colour::Red,
        }
    }
}

/// A geographic coordinate, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new [`Coordinate`].
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The side this coordinate falls on.
    pub fn side(self) -> Side {
        determine_side(self)
    }
}

/// Assigns a side based on latitude relative to [`REFERENCE_LATITUDE`].
pub fn determine_side(coord: Coordinate) -> Side {
    side_for_latitude(coord.lat)
}

/// Assigns a side based on latitude alone.
pub fn side_for_latitude(lat: f64) -> Side {
    if lat >= REFERENCE_LATITUDE {
        Side::East
    } else {
        Side::West
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn side_from_latitude() {
        assert_eq!(determine_side(Coordinate::new(35.0, 32.0)), Side::East);
        assert_eq!(determine_side(Coordinate::new(30.0, 32.0)), Side::West);
    }

    #[test]
    fn reference_latitude_is_east() {
        let coord = Coordinate::new(34.817549168324334, 0.0);
        assert_eq!(coord.side(), Side::East);
        assert_eq!(side_for_latitude(34.8175), Side::West);
    }

    #[test]
    fn parse() {
        assert_eq!("East".parse::<Side>(), Ok(Side::East));
        assert_eq!("w".parse::<Side>(), Ok(Side::West));
        assert_eq!("north".parse::<Side>(), Err(()));
    }

    #[test]
    fn opposite() {
        for &side in Side::all_sides() {
            assert_ne!(side, side.opposite());
            assert_eq!(side, side.opposite().opposite());
        }
    }
}
