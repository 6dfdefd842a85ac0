use crate::attempt::AttemptKind;
use crate::error::Result;
use crate::ledger::WinLedger;
use crate::resolver::{AttemptResolver, RollSource};
use crate::session::TurnSession;
use crate::store::TeamStore;
use crate::team::{Team, TeamStats};

/// Final tournament report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub team: String,
    pub project: String,
    pub players: Vec<String>,
    pub score: i32,
    /// Historical wins for this team name, this tournament included
    pub career_wins: u64,
}

/// Headless orchestrator tying the session, resolver and stores together.
///
/// The session never sees the resolver or any persistence; this is the one
/// place that wires them, so the state machine stays testable on its own.
/// Every call is synchronous; countdowns and debounce are the caller's
/// scheduling concern.
pub struct MatchControl<S: RollSource> {
    session: TurnSession,
    resolver: AttemptResolver<S>,
    ledger: WinLedger,
    store: TeamStore,
}

impl<S: RollSource> MatchControl<S> {
    pub fn new(resolver: AttemptResolver<S>, ledger: WinLedger, store: TeamStore) -> Self {
        MatchControl {
            session: TurnSession::new(),
            resolver,
            ledger,
            store,
        }
    }

    /// Teams saved by a previous run, empty when there is none.
    pub fn saved_teams(&self) -> Result<Vec<Team>> {
        self.store.load()
    }

    /// Begin a tournament over `teams`, in the given order.
    pub fn start(&mut self, teams: Vec<Team>) -> Result<()> {
        self.session.create_table(teams)
    }

    /// Resolve one attempt for the current turn and score it.
    ///
    /// One call per attempt: the resolved points are recorded exactly once.
    pub fn attempt(&mut self, kind: AttemptKind) -> Result<i32> {
        let points = self.resolver.resolve(kind);
        self.session.add_points(points)?;
        Ok(points)
    }

    /// Advance the turn cursor; returns whether the tournament continues.
    pub fn next_turn(&mut self) -> Result<bool> {
        self.session.next()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn session(&self) -> &TurnSession {
        &self.session
    }

    /// Current standings, in tournament order.
    pub fn standings(&self) -> &[(Team, TeamStats)] {
        self.session.table()
    }

    /// Close out the tournament: persist the team list, record the winner in
    /// the ledger, and report the winner with its career win count.
    ///
    /// Ledger I/O trouble must not hide the result from the players, so a
    /// failed append or count degrades to `career_wins = 1` instead of
    /// propagating. Session-state errors still fail fast.
    pub fn finish(&mut self) -> Result<MatchSummary> {
        let teams: Vec<Team> = self.session.order().cloned().collect();
        if let Err(err) = self.store.save(&teams) {
            tracing::warn!(%err, "could not save team list; continuing");
        }

        let winner = self.session.get_winner()?.clone();
        let score = self
            .session
            .get_stats(&winner.name)
            .map(|stats| stats.points)
            .unwrap_or(0);

        let career_wins = match self
            .ledger
            .save_winner(&winner, score)
            .and_then(|_| self.ledger.count_wins(&winner.name))
        {
            Ok(wins) => wins,
            Err(err) => {
                tracing::warn!(%err, "win ledger unavailable; reporting first win");
                1
            }
        };

        Ok(MatchSummary {
            team: winner.name.clone(),
            project: winner.project.clone(),
            players: winner.players().iter().map(|p| p.name.clone()).collect(),
            score,
            career_wins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Player;
    use tempfile::TempDir;

    /// Plays back a fixed roll sequence, then keeps repeating the last roll.
    struct ScriptRoll {
        rolls: Vec<u32>,
        next: usize,
    }

    impl ScriptRoll {
        fn new(rolls: Vec<u32>) -> Self {
            ScriptRoll { rolls, next: 0 }
        }
    }

    impl RollSource for ScriptRoll {
        fn roll(&mut self) -> u32 {
            let roll = self.rolls[self.next.min(self.rolls.len() - 1)];
            self.next += 1;
            roll
        }
    }

    fn team(name: &str, players: &[&str]) -> Team {
        let players = players
            .iter()
            .enumerate()
            .map(|(i, p)| Player::new(*p, i as u32 + 1))
            .collect();
        Team::new("demo", name, players, 1111)
    }

    fn control(dir: &TempDir, rolls: Vec<u32>) -> MatchControl<ScriptRoll> {
        MatchControl::new(
            AttemptResolver::new(ScriptRoll::new(rolls)),
            WinLedger::new(dir.path().join("winners.dat")),
            TeamStore::new(dir.path().join("teams.json")),
        )
    }

    #[test]
    fn test_two_team_tournament_end_to_end() {
        let dir = TempDir::new().unwrap();
        // Team A plays simple(hit)=2, simple(miss)=0, doble(hit)=10 -> 12 points, 2 successes.
        // Team B plays vertical(hit)=3 three times -> 9 points, 3 successes.
        let mut control = control(&dir, vec![1, 100, 1, 1, 1, 1]);
        control
            .start(vec![
                team("Equipo A", &["a1", "a2", "a3"]),
                team("Equipo B", &["b1", "b2", "b3"]),
            ])
            .unwrap();

        for kind in [AttemptKind::Simple, AttemptKind::Simple, AttemptKind::Doble] {
            control.attempt(kind).unwrap();
            control.next_turn().unwrap();
        }
        for _ in 0..3 {
            control.attempt(AttemptKind::Vertical).unwrap();
            control.next_turn().unwrap();
        }
        assert!(control.is_finished());

        let summary = control.finish().unwrap();
        assert_eq!(summary.team, "Equipo A");
        assert_eq!(summary.score, 12);
        assert_eq!(summary.career_wins, 1);
        assert_eq!(summary.players, vec!["a1", "a2", "a3"]);

        let stats_b = control.session().get_stats("Equipo B").unwrap();
        assert_eq!(stats_b.points, 9);
        assert_eq!(stats_b.successes, 3);
    }

    #[test]
    fn test_attempt_points_match_session_credit() {
        let dir = TempDir::new().unwrap();
        let mut control = control(&dir, vec![1]);
        control.start(vec![team("A", &["p1"])]).unwrap();

        let points = control.attempt(AttemptKind::Dominio).unwrap();
        assert_eq!(points, 7);
        assert_eq!(control.session().get_stats("A").unwrap().points, 7);
    }

    #[test]
    fn test_career_wins_accumulate_across_tournaments() {
        let dir = TempDir::new().unwrap();
        let mut control = control(&dir, vec![1]);
        control.start(vec![team("Los Compiladores", &["Ana"])]).unwrap();
        control.attempt(AttemptKind::Simple).unwrap();
        control.next_turn().unwrap();
        let first = control.finish().unwrap();
        assert_eq!(first.career_wins, 1);

        control.start(vec![team("Los Compiladores", &["Ana"])]).unwrap();
        control.attempt(AttemptKind::Simple).unwrap();
        control.next_turn().unwrap();
        let second = control.finish().unwrap();
        assert_eq!(second.career_wins, 2);
    }

    #[test]
    fn test_finished_teams_are_reloadable() {
        let dir = TempDir::new().unwrap();
        let mut control = control(&dir, vec![1]);
        control.start(vec![team("A", &["p1"])]).unwrap();
        control.attempt(AttemptKind::Simple).unwrap();
        control.next_turn().unwrap();
        control.finish().unwrap();

        let saved = control.saved_teams().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "A");
    }

    #[cfg(unix)]
    #[test]
    fn test_ledger_failure_degrades_to_first_win() {
        let dir = TempDir::new().unwrap();
        // A directory where the ledger file should be forces an open error.
        std::fs::create_dir(dir.path().join("winners.dat")).unwrap();
        let mut control = control(&dir, vec![1]);
        control.start(vec![team("A", &["p1"])]).unwrap();
        control.attempt(AttemptKind::Simple).unwrap();
        control.next_turn().unwrap();

        let summary = control.finish().unwrap();
        assert_eq!(summary.career_wins, 1);
        assert_eq!(summary.score, 2);
    }
}
