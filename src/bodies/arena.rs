//! Arena of per-body simulation records indexed by [`BodyId`].

use bevy::prelude::*;

use crate::bodies::catalog::{BodyDef, BodyId, CATALOG};
use crate::orbital::{
    MotionConstants, OrbitState, SatelliteState, SpeedOverrides, advance, advance_satellite,
    satellite_offset, speed_ratio,
};

// Spreads the starting phases so planets don't begin in a line.
const GOLDEN_ANGLE_RAD: f64 = 2.399_963_229_728_653;

/// Mutable state of one body and the satellites it owns.
#[derive(Debug, Clone)]
pub struct BodyRecord {
    pub def: &'static BodyDef,
    pub orbit: OrbitState,
    pub satellites: Vec<SatelliteState>,
}

impl BodyRecord {
    fn new(def: &'static BodyDef, initial_angle: f64) -> Self {
        let orbit = OrbitState::at_angle(def.distance, initial_angle);
        let satellites = def
            .satellites
            .iter()
            .map(|sat| SatelliteState {
                phase: 0.0,
                position: orbit.position + satellite_offset(sat, 0.0),
            })
            .collect();
        Self {
            def,
            orbit,
            satellites,
        }
    }

    pub fn render_position(&self) -> Vec3 {
        self.orbit.position.as_vec3()
    }
}

/// All bodies in the scene
#[derive(Resource, Debug, Clone)]
pub struct SolarSystem {
    records: Vec<BodyRecord>,
}

impl Default for SolarSystem {
    fn default() -> Self {
        let records = CATALOG
            .iter()
            .enumerate()
            .map(|(i, def)| BodyRecord::new(def, i as f64 * GOLDEN_ANGLE_RAD))
            .collect();
        Self { records }
    }
}

impl SolarSystem {
    pub fn get(&self, id: BodyId) -> &BodyRecord {
        &self.records[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyRecord> {
        self.records.iter()
    }

    /// Bounding spheres at the current frame positions.
    pub fn bounding_spheres(&self) -> impl Iterator<Item = (BodyId, Vec3, f32)> + '_ {
        self.records
            .iter()
            .map(|r| (r.def.id, r.render_position(), r.def.radius))
    }

    /// Advance every body and satellite by one tick.
    pub fn tick(&mut self, delta_secs: f32, speeds: &SpeedOverrides, k: &MotionConstants) {
        if delta_secs == 0.0 {
            return;
        }
        for record in &mut self.records {
            let speed = speeds.get(record.def.id);
            record.orbit = advance(record.def, &record.orbit, delta_secs, speed, k);

            let ratio = speed_ratio(record.def, speed);
            let parent = record.orbit.position;
            for (sat_def, sat_state) in record.def.satellites.iter().zip(&mut record.satellites) {
                *sat_state = advance_satellite(sat_def, sat_state, parent, delta_secs, ratio, k);
            }
        }
    }
}
