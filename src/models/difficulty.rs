use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Single-letter badge used in outlines.
    pub fn badge(&self) -> char {
        match self {
            Difficulty::Beginner => 'B',
            Difficulty::Intermediate => 'I',
            Difficulty::Advanced => 'A',
        }
    }
}

/// Counts per difficulty, in `Difficulty::ALL` order.
pub fn breakdown(levels: impl IntoIterator<Item = Difficulty>) -> [(Difficulty, usize); 3] {
    let mut counts = Difficulty::ALL.map(|d| (d, 0));
    for level in levels {
        if let Some(slot) = counts.iter_mut().find(|(d, _)| *d == level) {
            slot.1 += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let d: Difficulty = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(d, Difficulty::Intermediate);
        assert_eq!(serde_json::to_string(&Difficulty::Advanced).unwrap(), "\"advanced\"");
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(serde_json::from_str::<Difficulty>("\"expert\"").is_err());
        assert!(serde_json::from_str::<Difficulty>("\"Beginner\"").is_err());
    }

    #[test]
    fn test_breakdown() {
        let counts = breakdown([
            Difficulty::Advanced,
            Difficulty::Beginner,
            Difficulty::Advanced,
        ]);
        assert_eq!(
            counts,
            [
                (Difficulty::Beginner, 1),
                (Difficulty::Intermediate, 0),
                (Difficulty::Advanced, 2),
            ]
        );
    }
}
