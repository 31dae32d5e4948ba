use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Grow,
    Wait,
    /// Entered as either "bloom" or "flower".
    Bloom,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Grow, Action::Wait, Action::Bloom];

    /// Keywords accepted for this action, in canonical (lowercase) form.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Action::Grow => &["grow"],
            Action::Wait => &["wait"],
            Action::Bloom => &["bloom", "flower"],
        }
    }

    pub fn from_keyword(word: &str, case_sensitive: bool) -> Option<Self> {
        Self::ALL.into_iter().find(|action| {
            action.keywords().iter().any(|keyword| {
                if case_sensitive {
                    word == *keyword
                } else {
                    word.eq_ignore_ascii_case(keyword)
                }
            })
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keywords()[0])
    }
}

/// One line of player input after interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Action(Action),
    Unrecognized(String),
}

impl PlayerInput {
    pub fn parse(line: &str, case_sensitive: bool) -> Self {
        let word = line.trim();
        match Action::from_keyword(word, case_sensitive) {
            Some(action) => PlayerInput::Action(action),
            None => PlayerInput::Unrecognized(word.to_string()),
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            PlayerInput::Action(action) => Some(*action),
            PlayerInput::Unrecognized(_) => None,
        }
    }
}
