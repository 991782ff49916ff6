//! Static body data: identifiers, sizes, orbits and satellites.

use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

pub const BODY_COUNT: usize = 9;

/// Stable identifier for every body in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    pub const ALL: [BodyId; BODY_COUNT] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Arena slot for this body.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BodyId::Sun => "sun",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
        }
    }

    pub fn def(self) -> &'static BodyDef {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BodyId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow!("unknown body id: {:?}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SatelliteKind {
    /// Sphere circling the parent at `local_radius`.
    Moon { radius: f32, local_radius: f32 },
    /// Flat annulus centred on the parent, tilted about the X axis.
    Rings {
        inner_radius: f32,
        outer_radius: f32,
        tilt_deg: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteDef {
    pub name: &'static str,
    pub kind: SatelliteKind,
    /// sRGB
    pub color: [f32; 3],
    /// Asset path relative to the asset root
    pub texture: Option<&'static str>,
}

/// Immutable base attributes of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub id: BodyId,
    pub name: &'static str,
    /// Render units
    pub radius: f32,
    /// Orbital radius in render units; zero for the sun
    pub distance: f32,
    /// Default speed multiplier (mean orbital velocity in km/s / 10)
    pub base_speed: f32,
    /// sRGB
    pub color: [f32; 3],
    pub satellites: &'static [SatelliteDef],
}

impl BodyDef {
    pub fn texture_path(&self) -> String {
        format!("textures/{}.jpg", self.id)
    }

    pub fn is_orbiting(&self) -> bool {
        self.distance > 0.0
    }
}

const EARTH_SATELLITES: [SatelliteDef; 1] = [SatelliteDef {
    name: "Moon",
    kind: SatelliteKind::Moon {
        radius: 0.27,
        local_radius: 2.0,
    },
    color: [0.78, 0.78, 0.76],
    texture: Some("textures/moon.jpg"),
}];

const SATURN_SATELLITES: [SatelliteDef; 1] = [SatelliteDef {
    name: "Saturn rings",
    kind: SatelliteKind::Rings {
        inner_radius: 2.8,
        outer_radius: 4.6,
        tilt_deg: 26.7,
    },
    color: [0.85, 0.78, 0.62],
    texture: None,
}];

const URANUS_SATELLITES: [SatelliteDef; 1] = [SatelliteDef {
    name: "Uranus rings",
    kind: SatelliteKind::Rings {
        inner_radius: 2.0,
        outer_radius: 2.6,
        tilt_deg: 97.8,
    },
    color: [0.62, 0.78, 0.82],
    texture: None,
}];

pub static CATALOG: [BodyDef; BODY_COUNT] = [
    BodyDef {
        id: BodyId::Sun,
        name: "Sun",
        radius: 5.0,
        distance: 0.0,
        base_speed: 1.0,
        color: [1.0, 0.82, 0.35],
        satellites: &[],
    },
    BodyDef {
        id: BodyId::Mercury,
        name: "Mercury",
        radius: 0.4,
        distance: 9.0,
        base_speed: 4.74,
        color: [0.62, 0.6, 0.58],
        satellites: &[],
    },
    BodyDef {
        id: BodyId::Venus,
        name: "Venus",
        radius: 0.9,
        distance: 12.5,
        base_speed: 3.5,
        color: [0.9, 0.76, 0.5],
        satellites: &[],
    },
    BodyDef {
        id: BodyId::Earth,
        name: "Earth",
        radius: 1.0,
        distance: 16.0,
        base_speed: 2.98,
        color: [0.25, 0.48, 0.86],
        satellites: &EARTH_SATELLITES,
    },
    BodyDef {
        id: BodyId::Mars,
        name: "Mars",
        radius: 0.55,
        distance: 20.0,
        base_speed: 2.41,
        color: [0.8, 0.36, 0.22],
        satellites: &[],
    },
    BodyDef {
        id: BodyId::Jupiter,
        name: "Jupiter",
        radius: 2.6,
        distance: 28.0,
        base_speed: 1.31,
        color: [0.82, 0.68, 0.52],
        satellites: &[],
    },
    BodyDef {
        id: BodyId::Saturn,
        name: "Saturn",
        radius: 2.2,
        distance: 37.0,
        base_speed: 0.97,
        color: [0.9, 0.8, 0.58],
        satellites: &SATURN_SATELLITES,
    },
    BodyDef {
        id: BodyId::Uranus,
        name: "Uranus",
        radius: 1.6,
        distance: 46.0,
        base_speed: 0.68,
        color: [0.58, 0.82, 0.88],
        satellites: &URANUS_SATELLITES,
    },
    BodyDef {
        id: BodyId::Neptune,
        name: "Neptune",
        radius: 1.5,
        distance: 54.0,
        base_speed: 0.54,
        color: [0.3, 0.42, 0.9],
        satellites: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_slots_match_ids() {
        for id in BodyId::ALL {
            assert_eq!(id.def().id, id, "catalog slot {} holds wrong body", id.index());
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for id in BodyId::ALL {
            assert_eq!(id.as_str().parse::<BodyId>().unwrap(), id);
        }
        assert_eq!("  Mars ".parse::<BodyId>().unwrap(), BodyId::Mars);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("pluto".parse::<BodyId>().is_err());
        assert!("".parse::<BodyId>().is_err());
    }

    #[test]
    fn test_base_speeds_within_slider_range() {
        for def in &CATALOG {
            assert!(
                (0.1..=10.0).contains(&def.base_speed),
                "{} base speed {} out of range",
                def.name,
                def.base_speed
            );
        }
    }

    #[test]
    fn test_orbits_do_not_overlap() {
        let planets: Vec<_> = CATALOG.iter().filter(|d| d.is_orbiting()).collect();
        assert_eq!(planets.len(), 8);
        for pair in planets.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
        assert!(!BodyId::Sun.def().is_orbiting());
    }

    #[test]
    fn test_earth_matches_reference_values() {
        let earth = BodyId::Earth.def();
        assert_eq!(earth.distance, 16.0);
        assert_eq!(earth.base_speed, 2.98);
        assert_eq!(earth.texture_path(), "textures/earth.jpg");
    }
}
