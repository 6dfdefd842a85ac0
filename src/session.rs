use crate::error::{Error, Result};
use crate::team::{Player, Team, TeamStats};

/// State machine for one round-robin tournament.
///
/// Turns are strictly sequential: player 1 of team 1, player 2 of team 1, ...
/// then on to team 2. A `(team, player)` index pair fully captures position
/// because each team's cursor is checked only against its own roster length,
/// so non-uniform rosters work without special cases. The cursor never
/// rewinds; `current_team == order.len()` is the terminal finished state.
pub struct TurnSession {
    /// Teams with their live stats, in tournament order
    table: Vec<(Team, TeamStats)>,
    current_team: usize,
    current_player: usize,
    started: bool,
}

impl TurnSession {
    pub fn new() -> Self {
        TurnSession {
            table: Vec::new(),
            current_team: 0,
            current_player: 0,
            started: false,
        }
    }

    /// Load the teams and reset every counter to zero.
    ///
    /// Re-loading an existing session discards all prior state and starts a
    /// fresh tournament at the first team's first player.
    pub fn create_table(&mut self, teams: Vec<Team>) -> Result<()> {
        if teams.is_empty() {
            return Err(Error::InvalidConfiguration);
        }
        self.table = teams
            .into_iter()
            .map(|team| (team, TeamStats::default()))
            .collect();
        self.current_team = 0;
        self.current_player = 0;
        self.started = true;
        tracing::debug!(teams = self.table.len(), "session table created");
        Ok(())
    }

    fn in_progress(&self) -> bool {
        self.started && self.current_team < self.table.len()
    }

    /// Record one resolved attempt for the team at the cursor.
    ///
    /// Always counts the attempt; positive points also count a success and
    /// accumulate. The caller must invoke this exactly once per resolved
    /// attempt, since repeated calls double-count.
    pub fn add_points(&mut self, points: i32) -> Result<()> {
        if !self.in_progress() {
            return Err(Error::SessionNotStarted);
        }
        self.table[self.current_team].1.record(points);
        Ok(())
    }

    /// Advance to the next player, rolling over to the next team when the
    /// current roster is exhausted.
    ///
    /// Returns whether the tournament continues. Once finished, further
    /// calls return `false` without moving the cursor.
    pub fn next(&mut self) -> Result<bool> {
        if !self.started {
            return Err(Error::SessionNotStarted);
        }
        if self.current_team >= self.table.len() {
            return Ok(false);
        }
        self.current_player += 1;
        if self.current_player >= self.table[self.current_team].0.roster_len() {
            self.current_player = 0;
            self.current_team += 1;
        }
        Ok(self.current_team < self.table.len())
    }

    /// True exactly when every team has played out its roster.
    pub fn is_finished(&self) -> bool {
        self.started && self.current_team >= self.table.len()
    }

    /// Team currently at the turn cursor.
    pub fn current_team(&self) -> Result<&Team> {
        if !self.in_progress() {
            return Err(Error::SessionNotStarted);
        }
        Ok(&self.table[self.current_team].0)
    }

    /// Index of the current player within the current team's roster.
    pub fn current_player_index(&self) -> Result<usize> {
        if !self.in_progress() {
            return Err(Error::SessionNotStarted);
        }
        Ok(self.current_player)
    }

    /// Player currently at the turn cursor.
    pub fn current_player(&self) -> Result<&Player> {
        let team = self.current_team()?;
        Ok(&team.players()[self.current_player])
    }

    /// Pick the tournament leader.
    ///
    /// Greatest points wins; ties fall to the greater success count, and a
    /// full tie keeps the team seen earliest in tournament order. Callable
    /// mid-tournament for a running leader; the canonical winner is read
    /// after [`is_finished`](Self::is_finished) turns true.
    pub fn get_winner(&self) -> Result<&Team> {
        let mut winner: Option<(&Team, &TeamStats)> = None;
        for (team, stats) in &self.table {
            let better = match winner {
                None => true,
                Some((_, best)) => {
                    stats.points > best.points
                        || (stats.points == best.points && stats.successes > best.successes)
                }
            };
            if better {
                winner = Some((team, stats));
            }
        }
        winner.map(|(team, _)| team).ok_or(Error::SessionNotStarted)
    }

    /// Stats for the named team, if it is in the tournament.
    pub fn get_stats(&self, team_name: &str) -> Option<&TeamStats> {
        self.table
            .iter()
            .find(|(team, _)| team.name == team_name)
            .map(|(_, stats)| stats)
    }

    /// Full standings table, in tournament order.
    pub fn table(&self) -> &[(Team, TeamStats)] {
        &self.table
    }

    /// Teams in play order.
    pub fn order(&self) -> impl Iterator<Item = &Team> {
        self.table.iter().map(|(team, _)| team)
    }
}

impl Default for TurnSession {
    fn default() -> Self {
        TurnSession::new()
    }
}
