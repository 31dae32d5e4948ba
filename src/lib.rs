pub mod action;
pub mod game;
pub mod narration;
pub mod plant;
pub mod rules;
pub mod session;
pub mod weather;

pub use game::{Game, GameError, GameState, TurnReport};
pub use rules::{Preset, Rules, RulesLoader};
pub use session::{Outcome, Session};
