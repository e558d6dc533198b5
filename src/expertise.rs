use std::fmt;

/// The four proficiency tiers a session can be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExpertiseLevel {
    pub const ALL: [ExpertiseLevel; 4] = [
        ExpertiseLevel::Beginner,
        ExpertiseLevel::Intermediate,
        ExpertiseLevel::Advanced,
        ExpertiseLevel::Expert,
    ];

    /// Returns the label the catalog uses for this tier. The separator
    /// is an en dash.
    pub fn label(self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "100 – Beginner",
            ExpertiseLevel::Intermediate => "200 – Intermediate",
            ExpertiseLevel::Advanced => "300 – Advanced",
            ExpertiseLevel::Expert => "400 – Expert",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ExpertiseLevel;

    #[test]
    fn labels_match_catalog() {
        assert_eq!(ExpertiseLevel::Beginner.to_string(), "100 – Beginner");
        assert_eq!(ExpertiseLevel::Intermediate.to_string(), "200 – Intermediate");
        assert_eq!(ExpertiseLevel::Advanced.to_string(), "300 – Advanced");
        assert_eq!(ExpertiseLevel::Expert.to_string(), "400 – Expert");
    }

    #[test]
    fn labels_are_distinct() {
        let labels = ExpertiseLevel::ALL
            .iter()
            .map(|level| level.label())
            .collect::<HashSet<_>>();

        assert_eq!(labels.len(), ExpertiseLevel::ALL.len());
    }

    #[test]
    fn labels_use_an_en_dash() {
        for level in ExpertiseLevel::ALL.iter() {
            assert!(level.label().contains(" \u{2013} "), "{:?}", level);
            assert!(!level.label().contains('-'), "{:?}", level);
        }
    }
}
