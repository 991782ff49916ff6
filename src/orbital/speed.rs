//! Per-body speed overrides set from the UI

use bevy::prelude::*;

use crate::bodies::{BODY_COUNT, BodyId};

pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 10.0;
pub const SPEED_STEP: f32 = 0.1;

/// Current speed multiplier for every body, indexed by [`BodyId::index`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpeedOverrides {
    values: [f32; BODY_COUNT],
}

impl Default for SpeedOverrides {
    fn default() -> Self {
        Self {
            values: BodyId::ALL.map(|id| id.def().base_speed),
        }
    }
}

impl SpeedOverrides {
    pub fn get(&self, id: BodyId) -> f32 {
        self.values[id.index()]
    }

    /// Store a clamped override and return the stored value.
    ///
    /// NaN leaves the current override in place.
    pub fn set_speed(&mut self, id: BodyId, value: f32) -> f32 {
        let slot = &mut self.values[id.index()];
        if value.is_nan() {
            debug!("Ignoring NaN speed for {}", id);
            return *slot;
        }
        *slot = value.clamp(MIN_SPEED, MAX_SPEED);
        *slot
    }

    /// Restore every body's base speed in one step.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self, id: BodyId) -> bool {
        self.get(id).to_bits() == id.def().base_speed.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_base_speeds() {
        let speeds = SpeedOverrides::default();
        for id in BodyId::ALL {
            assert_eq!(speeds.get(id), id.def().base_speed);
        }
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut speeds = SpeedOverrides::default();
        let mars = "mars".parse::<BodyId>().unwrap();
        assert_eq!(speeds.set_speed(mars, 15.0), 10.0);
        assert_eq!(speeds.get(mars), 10.0);
        assert_eq!(speeds.set_speed(mars, 0.0), 0.1);
        assert_eq!(speeds.set_speed(mars, -4.0), 0.1);
        assert_eq!(speeds.set_speed(mars, f32::INFINITY), 10.0);
        assert_eq!(speeds.set_speed(mars, f32::NEG_INFINITY), 0.1);
        assert_eq!(speeds.set_speed(mars, 3.3), 3.3);
    }

    #[test]
    fn test_nan_keeps_previous() {
        let mut speeds = SpeedOverrides::default();
        speeds.set_speed(BodyId::Venus, 6.0);
        assert_eq!(speeds.set_speed(BodyId::Venus, f32::NAN), 6.0);
        assert_eq!(speeds.get(BodyId::Venus), 6.0);
    }

    #[test]
    fn test_overrides_are_independent() {
        let mut speeds = SpeedOverrides::default();
        speeds.set_speed(BodyId::Jupiter, 9.0);
        for id in BodyId::ALL {
            if id != BodyId::Jupiter {
                assert!(speeds.is_default(id), "{} changed", id);
            }
        }
        assert_eq!(BodyId::Jupiter.def().base_speed, 1.31);
    }

    #[test]
    fn test_reset_is_bit_exact() {
        let mut speeds = SpeedOverrides::default();
        for (i, id) in BodyId::ALL.into_iter().enumerate() {
            speeds.set_speed(id, 0.1 + i as f32 * 1.1);
        }
        speeds.reset_all();
        for id in BodyId::ALL {
            assert_eq!(speeds.get(id).to_bits(), id.def().base_speed.to_bits());
        }
    }
}
