use serde::{Deserialize, Serialize};

/// A player on a team roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub code: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Player {
            name: name.into(),
            code,
        }
    }
}

/// A registered team: identity and roster are fixed for the whole tournament.
///
/// `name` is the unique identity within a tournament; `project` is a display
/// label. The roster holds up to [`crate::constants::MAX_ROSTER`] players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub project: String,
    pub name: String,
    players: Vec<Player>,
    pin: u32,
}

impl Team {
    pub fn new(
        project: impl Into<String>,
        name: impl Into<String>,
        players: Vec<Player>,
        pin: u32,
    ) -> Self {
        Team {
            project: project.into(),
            name: name.into(),
            players,
            pin,
        }
    }

    /// Ordered roster, in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    /// Shared-PIN check used by the registration collaborator.
    pub fn pin_matches(&self, pin: u32) -> bool {
        self.pin == pin
    }
}

/// Per-team accumulator for the live tournament table.
///
/// Starts at zero and is only ever mutated through the session's scoring
/// step; it is never reset mid-tournament.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Sum of points earned across all successful attempts
    pub points: i32,
    /// Number of resolved attempts, successful or not
    pub attempts: u32,
    /// Number of attempts that earned more than zero points
    pub successes: u32,
}

impl TeamStats {
    /// Record one resolved attempt. Zero points counts the attempt only.
    pub(crate) fn record(&mut self, points: i32) {
        self.attempts += 1;
        if points > 0 {
            self.successes += 1;
            self.points += points;
        }
    }
}
