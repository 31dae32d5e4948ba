use serde::{Deserialize, Serialize};

/// Signed change to a plant's resources, applied in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDelta {
    pub water: i32,
    pub energy: i32,
    pub growth: u32,
}

impl ResourceDelta {
    pub const NONE: ResourceDelta = ResourceDelta {
        water: 0,
        energy: 0,
        growth: 0,
    };

    pub const fn new(water: i32, energy: i32, growth: u32) -> Self {
        Self {
            water,
            energy,
            growth,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub water: i32,
    pub energy: i32,
    pub growth_stage: u32,
}

impl Plant {
    pub fn new(water: i32, energy: i32, growth_stage: u32) -> Self {
        Self {
            water,
            energy,
            growth_stage,
        }
    }

    pub fn apply(&mut self, delta: ResourceDelta) {
        self.water = self.water.saturating_add(delta.water);
        self.energy = self.energy.saturating_add(delta.energy);
        self.growth_stage = self.growth_stage.saturating_add(delta.growth);
    }

    /// Both resources must stay strictly above `min`.
    pub fn is_alive(&self, min: i32) -> bool {
        self.water > min && self.energy > min
    }
}
