//! Player-facing text.

use crate::{
    action::PlayerInput,
    game::{ActionOutcome, GameState, TurnReport, WeatherReport},
    plant::{Plant, ResourceDelta},
    weather::Weather,
};

pub const BANNER: &str =
    "Welcome to Seedling! Tend your plant until it is ready to bloom, and keep it watered and fed.";

pub const PROMPT: &str = "Would you like to 'grow', 'wait' for tomorrow, or 'bloom'? ";

pub const INPUT_CLOSED: &str = "You walk away from the garden. Come back soon.";

pub fn status(day: u32, plant: &Plant) -> String {
    format!(
        "Day {day}. Your plant has {} water, {} energy and is at growth stage {}.",
        plant.water, plant.energy, plant.growth_stage
    )
}

/// Lines describing a finished turn, in the order they happened.
pub fn turn(report: &TurnReport) -> Vec<String> {
    let mut lines = vec![choice(&report.input), outcome(&report.outcome, report.day)];
    if let Some(weather) = &report.weather {
        lines.push(weather_line(weather));
    }
    if report.state == GameState::Lost {
        lines.push("Your plant withered away. :( Try again another time.".to_string());
    }
    lines
}

fn choice(input: &PlayerInput) -> String {
    match input {
        PlayerInput::Action(action) => format!("You decided to {action}."),
        PlayerInput::Unrecognized(word) if word.is_empty() => "You said nothing.".to_string(),
        PlayerInput::Unrecognized(word) => format!("You decided to {word}."),
    }
}

fn outcome(outcome: &ActionOutcome, day: u32) -> String {
    match outcome {
        ActionOutcome::Grew { cost, growth_stage } => format!(
            "Growing took {}. Your plant is now at growth stage {growth_stage}.",
            describe(cost)
        ),
        ActionOutcome::Waited { cost } => format!("Waiting took {}.", describe(cost)),
        ActionOutcome::Bloomed => format!(
            "Congratulations! After {day} days your plant bloomed into a beautiful flower."
        ),
        ActionOutcome::TooEarly { remaining, penalty } => format!(
            "Still too early to bloom, grow {remaining} more time{}. Trying took {}.",
            if *remaining == 1 { "" } else { "s" },
            describe(penalty)
        ),
        ActionOutcome::Invalid { penalty } => format!(
            "That is not something a plant can do. The day passes and takes {}.",
            describe(penalty)
        ),
    }
}

fn weather_line(report: &WeatherReport) -> String {
    let flavour = match report.weather {
        Weather::Sunny => "The sun was out",
        Weather::Rainy => "It rained",
        Weather::Cloudy => "Clouds covered the sky",
    };
    if report.effect.is_none() {
        format!("The weather today was {}. {flavour}, nothing changed.", report.weather)
    } else {
        format!(
            "The weather today was {}. {flavour}: {}.",
            report.weather,
            describe_gain(&report.effect)
        )
    }
}

fn describe(delta: &ResourceDelta) -> String {
    let mut parts = Vec::new();
    if delta.water != 0 {
        parts.push(format!("{} water", delta.water.unsigned_abs()));
    }
    if delta.energy != 0 {
        parts.push(format!("{} energy", delta.energy.unsigned_abs()));
    }
    if parts.is_empty() {
        "nothing".to_string()
    } else {
        parts.join(" and ")
    }
}

fn describe_gain(delta: &ResourceDelta) -> String {
    let mut parts = Vec::new();
    if delta.water != 0 {
        parts.push(format!("{:+} water", delta.water));
    }
    if delta.energy != 0 {
        parts.push(format!("{:+} energy", delta.energy));
    }
    if delta.growth != 0 {
        parts.push(format!("+{} growth", delta.growth));
    }
    parts.join(", ")
}
