use serde::{Deserialize, Serialize};

/// Overall eligibility verdict derived from the four dimension checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Satisfied,
    PartiallySatisfied,
    NotSatisfied,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Satisfied => "satisfied",
            Verdict::PartiallySatisfied => "partially satisfied",
            Verdict::NotSatisfied => "not satisfied",
        }
    }
}

/// Pass/fail flag per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionChecks {
    pub evaluation: bool,
    pub training: bool,
    pub skills: bool,
    pub experience: bool,
}

impl DimensionChecks {
    fn flags(&self) -> [bool; 4] {
        [self.evaluation, self.training, self.skills, self.experience]
    }

    pub fn passed_count(&self) -> usize {
        self.flags().iter().filter(|passed| **passed).count()
    }

    pub fn verdict(&self) -> Verdict {
        match self.passed_count() {
            4 => Verdict::Satisfied,
            0 => Verdict::NotSatisfied,
            _ => Verdict::PartiallySatisfied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_follows_boolean_pattern() {
        let all = DimensionChecks {
            evaluation: true,
            training: true,
            skills: true,
            experience: true,
        };
        assert_eq!(all.verdict(), Verdict::Satisfied);
        assert_eq!(DimensionChecks::default().verdict(), Verdict::NotSatisfied);

        let one = DimensionChecks {
            skills: true,
            ..DimensionChecks::default()
        };
        assert_eq!(one.verdict(), Verdict::PartiallySatisfied);

        let three = DimensionChecks {
            experience: false,
            ..all
        };
        assert_eq!(three.passed_count(), 3);
        assert_eq!(three.verdict(), Verdict::PartiallySatisfied);
    }

    #[test]
    fn verdict_serializes_in_upper_snake_case() {
        let json = serde_json::to_string(&Verdict::PartiallySatisfied).expect("serializes");
        assert_eq!(json, "\"PARTIALLY_SATISFIED\"");
    }
}
