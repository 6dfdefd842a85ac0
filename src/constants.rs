/// Maximum players on a team roster
pub const MAX_ROSTER: usize = 3;

/// Fixed width of the team-name field in a ledger record, in UTF-16 code units
pub const TEAM_NAME_CHARS: usize = 50;

/// Fixed width of each player-name field in a ledger record, in UTF-16 code units
pub const PLAYER_NAME_CHARS: usize = 40;

/// Total bytes per ledger record:
/// 8 (i64 key) + 100 (team name) + 3 * 80 (player names) + 4 (i32 score)
pub const RECORD_BYTES: u64 =
    8 + (TEAM_NAME_CHARS as u64 * 2) + (MAX_ROSTER as u64 * PLAYER_NAME_CHARS as u64 * 2) + 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size_matches_layout() {
        assert_eq!(RECORD_BYTES, 352);
    }
}
