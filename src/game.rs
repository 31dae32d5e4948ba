use log::debug;
use thiserror::Error;

use crate::{
    action::{Action, PlayerInput},
    plant::{Plant, ResourceDelta},
    rules::Rules,
    weather::{Weather, WeatherSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game already finished ({0:?})")]
    Finished(GameState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Grew {
        cost: ResourceDelta,
        growth_stage: u32,
    },
    Waited {
        cost: ResourceDelta,
    },
    Bloomed,
    TooEarly {
        remaining: u32,
        penalty: ResourceDelta,
    },
    Invalid {
        penalty: ResourceDelta,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherReport {
    pub weather: Weather,
    pub effect: ResourceDelta,
}

/// Everything that happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub day: u32,
    pub input: PlayerInput,
    pub outcome: ActionOutcome,
    /// Absent on the turn the plant blooms.
    pub weather: Option<WeatherReport>,
    pub plant: Plant,
    pub state: GameState,
}

pub struct Game<W> {
    rules: Rules,
    plant: Plant,
    day: u32,
    state: GameState,
    weather: W,
}

impl<W: WeatherSource> Game<W> {
    pub fn new(rules: Rules, weather: W) -> Self {
        let plant = rules.starting_plant();
        Self::with_plant(rules, plant, weather)
    }

    pub fn with_plant(rules: Rules, plant: Plant, weather: W) -> Self {
        Self {
            rules,
            plant,
            day: 1,
            state: GameState::Playing,
            weather,
        }
    }

    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn parse_input(&self, line: &str) -> PlayerInput {
        PlayerInput::parse(line, self.rules.case_sensitive)
    }

    pub fn play_turn(&mut self, line: &str) -> Result<TurnReport, GameError> {
        let input = self.parse_input(line);
        self.play_input(input)
    }

    pub fn play_input(&mut self, input: PlayerInput) -> Result<TurnReport, GameError> {
        if self.state.is_over() {
            return Err(GameError::Finished(self.state));
        }
        let day = self.day;

        let outcome = self.apply_input(&input);
        if outcome == ActionOutcome::Bloomed {
            self.state = GameState::Won;
            debug!("day {day}: bloomed at growth {}", self.plant.growth_stage);
            return Ok(self.report(day, input, outcome, None));
        }

        let weather = self.weather.next_weather();
        let effect = self.rules.weather.effect(weather);
        self.plant.apply(effect);
        debug!(
            "day {day}: {:?} then {weather}, plant now {:?}",
            input, self.plant
        );

        if self.plant.is_alive(self.rules.min_resource) {
            self.day += 1;
        } else {
            self.state = GameState::Lost;
        }
        Ok(self.report(day, input, outcome, Some(WeatherReport { weather, effect })))
    }

    fn apply_input(&mut self, input: &PlayerInput) -> ActionOutcome {
        let action = match input.action() {
            Some(action) => action,
            None => {
                let penalty = self.rules.invalid_penalty;
                self.plant.apply(penalty);
                return ActionOutcome::Invalid { penalty };
            }
        };

        let threshold = self.rules.bloom_threshold;
        if action == Action::Bloom && self.plant.growth_stage >= threshold {
            return ActionOutcome::Bloomed;
        }

        let remaining = threshold.saturating_sub(self.plant.growth_stage);
        let cost = self.rules.action_cost(action);
        self.plant.apply(cost);
        match action {
            Action::Grow => ActionOutcome::Grew {
                cost,
                growth_stage: self.plant.growth_stage,
            },
            Action::Wait => ActionOutcome::Waited { cost },
            Action::Bloom => ActionOutcome::TooEarly {
                remaining,
                penalty: cost,
            },
        }
    }

    fn report(
        &self,
        day: u32,
        input: PlayerInput,
        outcome: ActionOutcome,
        weather: Option<WeatherReport>,
    ) -> TurnReport {
        TurnReport {
            day,
            input,
            outcome,
            weather,
            plant: self.plant,
            state: self.state,
        }
    }
}
