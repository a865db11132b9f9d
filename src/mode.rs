use strum::Display;

/// What the user asked the compose runtime to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Up,
    Down,
    Unset,
}

impl Mode {
    /// `up` is checked first, so passing both flags starts the containers.
    pub fn from_flags(up: bool, down: bool) -> Mode {
        if up {
            Mode::Up
        } else if down {
            Mode::Down
        } else {
            Mode::Unset
        }
    }

    pub fn compose_args(&self) -> Option<&'static [&'static str]> {
        match self {
            Mode::Up => Some(&["up", "-d"]),
            Mode::Down => Some(&["down"]),
            Mode::Unset => None,
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self {
            Mode::Up => "Starting up containers...",
            Mode::Down => "Shutting down containers...",
            Mode::Unset => "Unknown Execution Option.",
        }
    }
}
