use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of balero techniques, each with a fixed point value and a
/// success probability as an integer percentage.
///
/// `SinEmbocada` is the reserved failed-attempt sentinel: zero points, zero
/// probability. The resolver returns it when a roll misses; it is never
/// offered as a player choice and is therefore excluded from
/// [`AttemptKind::SELECTABLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptKind {
    /// Basic, direct catch on the first try
    Simple,
    /// Two spins before seating the piece
    Doble,
    /// The piece rises straight and seats itself
    Vertical,
    /// Catch with a particular swing or spin
    Mariquita,
    /// Fast, dry, decisive catch
    Punalada,
    /// Traditional technique variant
    Purtina,
    /// Catch with the hand inverted
    Dominio,
    /// Failed attempt; resolver-internal, never selectable
    SinEmbocada,
}

impl AttemptKind {
    /// The techniques a player may choose from, in menu order.
    pub const SELECTABLE: [AttemptKind; 7] = [
        AttemptKind::Simple,
        AttemptKind::Doble,
        AttemptKind::Vertical,
        AttemptKind::Mariquita,
        AttemptKind::Punalada,
        AttemptKind::Purtina,
        AttemptKind::Dominio,
    ];

    /// Points awarded when the technique lands.
    pub fn points(self) -> i32 {
        match self {
            AttemptKind::Simple => 2,
            AttemptKind::Doble => 10,
            AttemptKind::Vertical => 3,
            AttemptKind::Mariquita => 4,
            AttemptKind::Punalada => 5,
            AttemptKind::Purtina => 6,
            AttemptKind::Dominio => 7,
            AttemptKind::SinEmbocada => 0,
        }
    }

    /// Success probability as an integer percentage in 0..=100.
    pub fn probability(self) -> u32 {
        match self {
            AttemptKind::Simple => 60,
            AttemptKind::Doble => 5,
            AttemptKind::Vertical => 50,
            AttemptKind::Mariquita => 40,
            AttemptKind::Punalada => 30,
            AttemptKind::Purtina => 20,
            AttemptKind::Dominio => 10,
            AttemptKind::SinEmbocada => 0,
        }
    }
}

impl fmt::Display for AttemptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttemptKind::Simple => "simple",
            AttemptKind::Doble => "doble",
            AttemptKind::Vertical => "vertical",
            AttemptKind::Mariquita => "mariquita",
            AttemptKind::Punalada => "puñalada",
            AttemptKind::Purtina => "purtiña",
            AttemptKind::Dominio => "dominio",
            AttemptKind::SinEmbocada => "sin embocada",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_excludes_sentinel() {
        assert!(!AttemptKind::SELECTABLE.contains(&AttemptKind::SinEmbocada));
        assert_eq!(AttemptKind::SELECTABLE.len(), 7);
    }

    #[test]
    fn test_sentinel_is_worthless_and_impossible() {
        assert_eq!(AttemptKind::SinEmbocada.points(), 0);
        assert_eq!(AttemptKind::SinEmbocada.probability(), 0);
    }

    #[test]
    fn test_riskier_techniques_pay_more() {
        // The payout ordering is the inverse of the probability ordering.
        let mut by_probability = AttemptKind::SELECTABLE.to_vec();
        by_probability.sort_by_key(|k| k.probability());
        let payouts: Vec<i32> = by_probability.iter().map(|k| k.points()).collect();
        let mut sorted = payouts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(payouts, sorted);
    }
}
