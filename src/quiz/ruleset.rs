use std::{fmt, str::FromStr};

/// Accepted roll-number formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollNumberRule {
    /// Exactly 4 digits, 0000 through 9999.
    FourDigits,
    /// Exactly 3 digits, 001 through 999.
    ThreeDigitsNonZero,
}

impl RollNumberRule {
    pub fn accepts(self, roll: &str) -> bool {
        let all_digits = roll.bytes().all(|b| b.is_ascii_digit());
        match self {
            RollNumberRule::FourDigits => roll.len() == 4 && all_digits,
            RollNumberRule::ThreeDigitsNonZero => {
                roll.len() == 3 && all_digits && roll != "000"
            }
        }
    }

    /// Human-readable format requirement, used in rejection messages.
    pub fn requirement(self) -> &'static str {
        match self {
            RollNumberRule::FourDigits => "It must be exactly 4 digits (e.g., 0123 or 0000).",
            RollNumberRule::ThreeDigitsNonZero => {
                "It must be exactly 3 digits from 001 to 999 (000 is not allowed)."
            }
        }
    }
}

/// Which answers are sent and what the score is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Every question is sent (unattempted as null); score out of the total.
    AllQuestions,
    /// Only attempted answers are sent; score out of the attempted count.
    /// Submitting with nothing attempted is refused.
    AttemptedOnly,
}

/// The set of validation and scoring rules a quiz deployment runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    pub roll_number: RollNumberRule,
    pub answers: AnswerPolicy,
    /// Whether the attempt id returned by the service is shown in the result.
    pub show_attempt_id: bool,
}

impl Ruleset {
    pub const fn standard() -> Self {
        Self {
            roll_number: RollNumberRule::FourDigits,
            answers: AnswerPolicy::AllQuestions,
            show_attempt_id: true,
        }
    }

    pub const fn attempted_only() -> Self {
        Self {
            roll_number: RollNumberRule::ThreeDigitsNonZero,
            answers: AnswerPolicy::AttemptedOnly,
            show_attempt_id: false,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.answers {
            AnswerPolicy::AllQuestions => write!(f, "standard"),
            AnswerPolicy::AttemptedOnly => write!(f, "attempted-only"),
        }
    }
}

impl FromStr for Ruleset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "attempted-only" | "attempted_only" => Ok(Self::attempted_only()),
            other => Err(format!("unknown ruleset '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digit_rule() {
        let rule = RollNumberRule::FourDigits;
        for ok in ["0000", "0123", "9999"] {
            assert!(rule.accepts(ok), "{ok} should pass");
        }
        for bad in ["", "123", "12345", "12a4", " 123", "١٢٣٤"] {
            assert!(!rule.accepts(bad), "{bad} should fail");
        }
    }

    #[test]
    fn three_digit_rule_excludes_zero() {
        let rule = RollNumberRule::ThreeDigitsNonZero;
        for ok in ["001", "010", "999"] {
            assert!(rule.accepts(ok), "{ok} should pass");
        }
        for bad in ["000", "00", "0001", "1000", "-01", "1.0"] {
            assert!(!rule.accepts(bad), "{bad} should fail");
        }
    }

    #[test]
    fn parses_ruleset_names() {
        assert_eq!("standard".parse::<Ruleset>().unwrap(), Ruleset::standard());
        assert_eq!(
            "Attempted-Only".parse::<Ruleset>().unwrap(),
            Ruleset::attempted_only()
        );
        assert!("lenient".parse::<Ruleset>().is_err());
        assert_eq!(Ruleset::attempted_only().to_string(), "attempted-only");
    }
}
