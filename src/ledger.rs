use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::constants::{MAX_ROSTER, PLAYER_NAME_CHARS, RECORD_BYTES, TEAM_NAME_CHARS};
use crate::error::Result;
use crate::team::Team;

/// One decoded win-ledger record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinRecord {
    /// 1-based sequence number assigned at write time
    pub key: i64,
    pub team: String,
    /// Player names in roster order; missing roster slots decode empty
    pub players: [String; 3],
    pub score: i32,
}

/// Append-only, fixed-record binary file of tournament winners.
///
/// Record layout, 352 bytes, big-endian throughout:
///
/// | field         | encoding                         | bytes |
/// |---------------|----------------------------------|-------|
/// | key           | i64                              |     8 |
/// | team name     | 50 UTF-16 code units, space-pad  |   100 |
/// | player 1 name | 40 UTF-16 code units             |    80 |
/// | player 2 name | 40 UTF-16 code units             |    80 |
/// | player 3 name | 40 UTF-16 code units             |    80 |
/// | score         | i32                              |     4 |
///
/// Fixed widths make the record count and per-record offsets derivable from
/// the file length alone, so no index or header is kept. Every operation is
/// a full open/seek/close cycle; the handle drops on every exit path.
pub struct WinLedger {
    path: PathBuf,
}

impl WinLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WinLedger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the winner as the next record and return its assigned key.
    ///
    /// The key is the prior record count plus one, taken from the file
    /// length at open time. Names longer than their field are truncated;
    /// shorter ones are right-padded with spaces, and roster slots beyond
    /// the team's players are written as all-space fields.
    pub fn save_winner(&self, team: &Team, score: i32) -> Result<i64> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)?;
        let key = (file.metadata()?.len() / RECORD_BYTES) as i64 + 1;

        let mut record = Vec::with_capacity(RECORD_BYTES as usize);
        record.extend_from_slice(&key.to_be_bytes());
        encode_field(&mut record, &team.name, TEAM_NAME_CHARS);
        for slot in 0..MAX_ROSTER {
            let name = team.players().get(slot).map(|p| p.name.as_str()).unwrap_or("");
            encode_field(&mut record, name, PLAYER_NAME_CHARS);
        }
        record.extend_from_slice(&score.to_be_bytes());
        debug_assert_eq!(record.len() as u64, RECORD_BYTES);

        file.seek(SeekFrom::End(0))?;
        file.write_all(&record)?;
        tracing::debug!(key, team = %team.name, score, "win record appended");
        Ok(key)
    }

    /// Count how many records carry this team name.
    ///
    /// Both sides are trimmed and compared case-insensitively. A missing or
    /// empty ledger counts as zero wins, not an error. Linear scan on every
    /// call; the ledger grows by one record per tournament ever played.
    pub fn count_wins(&self, team_name: &str) -> Result<u64> {
        let Some((mut file, records)) = self.open_for_scan()? else {
            return Ok(0);
        };

        let query = team_name.trim().to_lowercase();
        let mut wins = 0;
        let mut field = vec![0u8; TEAM_NAME_CHARS * 2];
        for index in 0..records {
            // Skip the 8-byte key, read only the team-name field.
            file.seek(SeekFrom::Start(index * RECORD_BYTES + 8))?;
            file.read_exact(&mut field)?;
            if decode_field(&field).trim().to_lowercase() == query {
                wins += 1;
            }
        }
        Ok(wins)
    }

    /// Decode every record, in file order.
    pub fn read_all(&self) -> Result<Vec<WinRecord>> {
        let Some((mut file, records)) = self.open_for_scan()? else {
            return Ok(Vec::new());
        };

        let mut out = Vec::with_capacity(records as usize);
        let mut record = vec![0u8; RECORD_BYTES as usize];
        for index in 0..records {
            file.seek(SeekFrom::Start(index * RECORD_BYTES))?;
            file.read_exact(&mut record)?;
            out.push(decode_record(&record));
        }
        Ok(out)
    }

    /// Open the ledger read-only with its whole-record count, or `None` when
    /// the file is missing or empty.
    fn open_for_scan(&self) -> Result<Option<(File, u64)>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        let records = file.metadata()?.len() / RECORD_BYTES;
        if records == 0 {
            return Ok(None);
        }
        Ok(Some((file, records)))
    }
}

/// Append `width` UTF-16 code units for `text`, truncating or space-padding.
fn encode_field(buf: &mut Vec<u8>, text: &str, width: usize) {
    let mut written = 0;
    for unit in text.encode_utf16().take(width) {
        buf.extend_from_slice(&unit.to_be_bytes());
        written += 1;
    }
    for _ in written..width {
        buf.extend_from_slice(&(b' ' as u16).to_be_bytes());
    }
}

/// Decode a big-endian UTF-16 field back to a string, padding included.
fn decode_field(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn decode_record(bytes: &[u8]) -> WinRecord {
    let team_end = 8 + TEAM_NAME_CHARS * 2;
    let player_bytes = PLAYER_NAME_CHARS * 2;

    let key = i64::from_be_bytes(bytes[0..8].try_into().expect("key field is 8 bytes"));
    let team = decode_field(&bytes[8..team_end]).trim().to_string();
    let mut players: [String; 3] = Default::default();
    for (slot, player) in players.iter_mut().enumerate() {
        let start = team_end + slot * player_bytes;
        *player = decode_field(&bytes[start..start + player_bytes])
            .trim()
            .to_string();
    }
    let score_start = team_end + MAX_ROSTER * player_bytes;
    let score = i32::from_be_bytes(
        bytes[score_start..score_start + 4]
            .try_into()
            .expect("score field is 4 bytes"),
    );

    WinRecord {
        key,
        team,
        players,
        score,
    }
}
