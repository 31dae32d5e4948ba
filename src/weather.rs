//! Daily weather and the random sources that pick it.
//!
//! The game only ever sees the [`WeatherSource`] trait, so tests can swap the
//! seeded ChaCha generator for a fixed or scripted sequence.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    Rainy,
    Cloudy,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Sunny, Weather::Rainy, Weather::Cloudy];
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weather::Sunny => "sunny",
            Weather::Rainy => "rainy",
            Weather::Cloudy => "cloudy",
        };
        f.write_str(name)
    }
}

pub trait WeatherSource {
    fn next_weather(&mut self) -> Weather;
}

impl<W: WeatherSource + ?Sized> WeatherSource for &mut W {
    fn next_weather(&mut self) -> Weather {
        (**self).next_weather()
    }
}

/// Uniform draw over every [`Weather`] variant.
pub struct RandomWeather {
    rng: ChaCha8Rng,
}

impl RandomWeather {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl WeatherSource for RandomWeather {
    fn next_weather(&mut self) -> Weather {
        Weather::ALL[self.rng.gen_range(0..Weather::ALL.len())]
    }
}

/// Always returns the same weather.
#[derive(Debug, Clone, Copy)]
pub struct FixedWeather(pub Weather);

impl WeatherSource for FixedWeather {
    fn next_weather(&mut self) -> Weather {
        self.0
    }
}

/// Replays a sequence of weather, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedWeather {
    sequence: Vec<Weather>,
    position: usize,
}

impl ScriptedWeather {
    /// Returns `None` for an empty sequence.
    pub fn new(sequence: impl IntoIterator<Item = Weather>) -> Option<Self> {
        let sequence: Vec<_> = sequence.into_iter().collect();
        if sequence.is_empty() {
            return None;
        }
        Some(Self {
            sequence,
            position: 0,
        })
    }
}

impl WeatherSource for ScriptedWeather {
    fn next_weather(&mut self) -> Weather {
        let weather = self.sequence[self.position];
        self.position = (self.position + 1) % self.sequence.len();
        weather
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_weather_is_uniform() {
        const DRAWS: usize = 30_000;
        let mut source = RandomWeather::from_seed(7);
        let mut counts = [0usize; 3];
        for _ in 0..DRAWS {
            let weather = source.next_weather();
            match weather {
                Weather::Sunny => counts[0] += 1,
                Weather::Rainy => counts[1] += 1,
                Weather::Cloudy => counts[2] += 1,
            }
        }

        for (weather, count) in Weather::ALL.iter().zip(counts) {
            let frequency = count as f64 / DRAWS as f64;
            assert!(
                (frequency - 1.0 / 3.0).abs() < 0.02,
                "{weather} drawn with frequency {frequency}"
            );
        }
    }

    #[test]
    fn same_seed_same_forecast() {
        let mut a = RandomWeather::from_seed(42);
        let mut b = RandomWeather::from_seed(42);
        let forecast_a: Vec<_> = (0..50).map(|_| a.next_weather()).collect();
        let forecast_b: Vec<_> = (0..50).map(|_| b.next_weather()).collect();
        assert_eq!(forecast_a, forecast_b);
    }

    #[test]
    fn scripted_weather_cycles() {
        let mut source = ScriptedWeather::new([Weather::Rainy, Weather::Sunny]).unwrap();
        assert_eq!(source.next_weather(), Weather::Rainy);
        assert_eq!(source.next_weather(), Weather::Sunny);
        assert_eq!(source.next_weather(), Weather::Rainy);
        assert!(ScriptedWeather::new(std::iter::empty()).is_none());
    }

    #[test]
    fn borrowed_source_advances_the_original() {
        fn draw(mut source: impl WeatherSource) -> Weather {
            source.next_weather()
        }

        let mut scripted = ScriptedWeather::new([Weather::Sunny, Weather::Cloudy]).unwrap();
        assert_eq!(draw(&mut scripted), Weather::Sunny);
        assert_eq!(scripted.next_weather(), Weather::Cloudy);
    }
}
