use seedling::{
    action::{Action, PlayerInput},
    game::{ActionOutcome, GameError},
    plant::Plant,
    weather::{FixedWeather, ScriptedWeather, Weather},
    Game, GameState, Preset, Rules,
};

fn calm(rules: Rules, plant: Plant) -> Game<FixedWeather> {
    Game::with_plant(rules, plant, FixedWeather(Weather::Cloudy))
}

#[test]
fn ten_grows_then_bloom_wins_on_day_eleven() {
    let mut game = Game::new(Rules::default(), FixedWeather(Weather::Cloudy));
    assert_eq!(*game.plant(), Plant::new(50, 50, 0));

    for day in 1..=10 {
        let report = game.play_turn("grow").unwrap();
        assert_eq!(report.day, day);
        assert_eq!(report.state, GameState::Playing);
    }
    assert_eq!(*game.plant(), Plant::new(30, 40, 10));

    let report = game.play_turn("bloom").unwrap();
    assert_eq!(report.outcome, ActionOutcome::Bloomed);
    assert_eq!(report.day, 11);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(
        game.play_turn("grow"),
        Err(GameError::Finished(GameState::Won))
    );
}

#[test]
fn last_drop_of_water_loses_immediately() {
    let mut game = calm(Rules::default(), Plant::new(1, 50, 0));
    let report = game.play_turn("wait").unwrap();
    assert_eq!(report.plant, Plant::new(0, 50, 0));
    assert_eq!(report.state, GameState::Lost);
    assert_eq!(game.state(), GameState::Lost);
}

#[test]
fn bloom_succeeds_only_at_threshold() {
    let rules = Rules::default();
    for growth in 0..rules.bloom_threshold {
        let mut game = calm(rules.clone(), Plant::new(20, 20, growth));
        let report = game.play_input(PlayerInput::Action(Action::Bloom)).unwrap();
        assert!(matches!(report.outcome, ActionOutcome::TooEarly { .. }));
        assert_eq!(report.state, GameState::Playing);
    }
    for growth in rules.bloom_threshold..rules.bloom_threshold + 3 {
        let mut game = calm(rules.clone(), Plant::new(20, 20, growth));
        let report = game.play_turn("Flower").unwrap();
        assert_eq!(report.state, GameState::Won);
    }
}

#[test]
fn garbage_input_only_costs_energy() {
    let mut game = calm(Rules::default(), Plant::new(7, 7, 4));
    for (turn, word) in ["", "help", "grows", "bloom now"].into_iter().enumerate() {
        let report = game.play_turn(word).unwrap();
        assert!(matches!(report.outcome, ActionOutcome::Invalid { .. }));
        assert_eq!(report.plant.water, 7);
        assert_eq!(report.plant.growth_stage, 4);
        assert_eq!(report.plant.energy, 6 - turn as i32);
    }
}

#[test]
fn loss_is_checked_after_weather() {
    // Sunny weather restores the energy grow just spent.
    let mut game = Game::with_plant(
        Rules::default(),
        Plant::new(10, 1, 0),
        ScriptedWeather::new([Weather::Sunny, Weather::Cloudy]).unwrap(),
    );
    let report = game.play_turn("grow").unwrap();
    assert_eq!(report.plant, Plant::new(8, 2, 1));
    assert_eq!(report.state, GameState::Playing);

    let report = game.play_turn("grow").unwrap();
    assert_eq!(report.plant, Plant::new(6, 1, 2));
    let report = game.play_turn("grow").unwrap();
    assert_eq!(report.plant, Plant::new(4, 2, 3));
    let report = game.play_turn("grow").unwrap();
    assert_eq!(report.plant, Plant::new(2, 1, 4));
    assert_eq!(report.state, GameState::Playing);
    let report = game.play_turn("wait").unwrap();
    assert_eq!(report.plant, Plant::new(1, 3, 4));
    let report = game.play_turn("wait").unwrap();
    assert_eq!(report.plant, Plant::new(0, 3, 4));
    assert_eq!(report.state, GameState::Lost);
}

#[test]
fn seedling_preset_is_case_sensitive_and_survives_at_zero() {
    let mut game = calm(Preset::Seedling.rules(), Plant::new(2, 1, 1));
    let report = game.play_turn("Grow").unwrap();
    assert!(matches!(report.outcome, ActionOutcome::Invalid { .. }));
    assert_eq!(report.plant, Plant::new(2, 0, 1));
    assert_eq!(report.state, GameState::Playing);

    let report = game.play_turn("wait").unwrap();
    assert_eq!(report.plant, Plant::new(1, 0, 1));
    let report = game.play_turn("wait").unwrap();
    assert_eq!(report.plant, Plant::new(0, 0, 1));
    assert_eq!(report.state, GameState::Playing);
    let report = game.play_turn("grow").unwrap();
    assert_eq!(report.state, GameState::Lost);
}

#[test]
fn garden_weather_arrives_in_large_amounts() {
    let mut game = Game::new(
        Preset::Garden.rules(),
        ScriptedWeather::new([Weather::Rainy, Weather::Sunny, Weather::Cloudy]).unwrap(),
    );
    game.play_turn("grow").unwrap();
    assert_eq!(*game.plant(), Plant::new(55, 35, 1));
    game.play_turn("wait").unwrap();
    assert_eq!(*game.plant(), Plant::new(50, 50, 1));
    game.play_turn("flower").unwrap();
    assert_eq!(*game.plant(), Plant::new(60, 60, 1));
    assert_eq!(game.day(), 4);
}

#[test]
fn garden_ignores_unrecognized_input() {
    let mut game = calm(Preset::Garden.rules(), Plant::new(30, 30, 2));
    let report = game.play_turn("Grow!").unwrap();
    assert!(matches!(report.outcome, ActionOutcome::Invalid { .. }));
    // Cloudy garden weather still adds 10 of each.
    assert_eq!(report.plant, Plant::new(40, 40, 2));
}
