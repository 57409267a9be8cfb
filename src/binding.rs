/*
 * Parameter Binding Module
 *
 * Each UI control writes exactly one simulator field. The raw slider value is
 * passed through the control's transform first, so that sliders can show
 * friendly numbers while the simulator keeps squared distances and fractions.
 *
 * | control id             | transform | field                    |
 * |------------------------|-----------|--------------------------|
 * | boidNum                | x3        | target_population        |
 * | separationDistance     | ^2        | separation_distance      |
 * | separationFactor       | /100      | separation_factor        |
 * | cohesionDistance       | (x5)^2    | cohesion_distance        |
 * | cohesionFactor         | /100      | cohesion_factor          |
 * | alignmentFactor        | /100      | alignment_factor         |
 * | speedLimit             | x5        | speed_limit              |
 * | speedConvergenceFactor | /100      | speed_convergence_factor |
 */

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::ParamError;
use crate::physics::FlockSimulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    BoidNum,
    SeparationDistance,
    SeparationFactor,
    CohesionDistance,
    CohesionFactor,
    AlignmentFactor,
    SpeedLimit,
    SpeedConvergenceFactor,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::BoidNum,
        Control::SeparationDistance,
        Control::SeparationFactor,
        Control::CohesionDistance,
        Control::CohesionFactor,
        Control::AlignmentFactor,
        Control::SpeedLimit,
        Control::SpeedConvergenceFactor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Control::BoidNum => "boidNum",
            Control::SeparationDistance => "separationDistance",
            Control::SeparationFactor => "separationFactor",
            Control::CohesionDistance => "cohesionDistance",
            Control::CohesionFactor => "cohesionFactor",
            Control::AlignmentFactor => "alignmentFactor",
            Control::SpeedLimit => "speedLimit",
            Control::SpeedConvergenceFactor => "speedConvergenceFactor",
        }
    }

    pub fn transform(self, raw: f32) -> f32 {
        match self {
            Control::BoidNum => raw * 3.0,
            Control::SeparationDistance => raw.powi(2),
            Control::CohesionDistance => (raw * 5.0).powi(2),
            Control::SpeedLimit => raw * 5.0,
            Control::SeparationFactor
            | Control::CohesionFactor
            | Control::AlignmentFactor
            | Control::SpeedConvergenceFactor => raw / 100.0,
        }
    }

    // Transform the raw value and write it into the simulator.
    // A population change resizes the flock immediately.
    pub fn apply(self, simulator: &mut FlockSimulator, raw: f32) {
        let value = self.transform(raw);
        match self {
            Control::BoidNum => {
                let target = value.round().max(0.0) as usize;
                simulator.resize_population(target);
            }
            Control::SeparationDistance => simulator.params.separation_distance = value,
            Control::SeparationFactor => simulator.params.separation_factor = value,
            Control::CohesionDistance => simulator.params.cohesion_distance = value,
            Control::CohesionFactor => simulator.params.cohesion_factor = value,
            Control::AlignmentFactor => simulator.params.alignment_factor = value,
            Control::SpeedLimit => simulator.params.speed_limit = value,
            Control::SpeedConvergenceFactor => simulator.params.speed_convergence_factor = value,
        }
        debug!("Value changed - {} = {}", self.id(), value);
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Control {
    type Err = ParamError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .iter()
            .copied()
            .find(|control| control.id() == id)
            .ok_or_else(|| ParamError::UnknownControl(id.to_string()))
    }
}

// Apply a raw value addressed by control id
pub fn apply_by_id(simulator: &mut FlockSimulator, id: &str, raw: f32) -> Result<(), ParamError> {
    let control: Control = id.parse().map_err(|err| {
        warn!("{}", err);
        err
    })?;
    control.apply(simulator, raw);
    Ok(())
}
