// src/quiz/validator.rs

use crate::{
    error::QuizError,
    models::submission::{Identity, SCHOOL_CODE_RE},
    quiz::ruleset::Ruleset,
};

/// Checks the raw school code and roll number before a session may start.
///
/// Both inputs are trimmed. Blank fields are reported first, then the school
/// code, then the roll number, so the user always sees the earliest problem.
pub fn validate_identity(
    school: &str,
    student: &str,
    ruleset: &Ruleset,
) -> Result<Identity, QuizError> {
    let school = school.trim();
    let student = student.trim();

    if school.is_empty() || student.is_empty() {
        return Err(QuizError::MissingInput);
    }

    if !is_valid_school_code(school) {
        return Err(QuizError::InvalidSchoolCode);
    }

    if !ruleset.roll_number.accepts(student) {
        return Err(QuizError::InvalidRollNumber(ruleset.roll_number));
    }

    Ok(Identity {
        school: school.to_string(),
        student: student.to_string(),
    })
}

pub fn is_valid_school_code(code: &str) -> bool {
    SCHOOL_CODE_RE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ruleset::RollNumberRule;

    #[test]
    fn school_code_format() {
        for ok in ["BLR123", "AAA000", "ZZZ999"] {
            assert!(is_valid_school_code(ok), "{ok}");
        }
        for bad in ["blr123", "BL123", "BLRR123", "BLR12", "BLR1234", "BLR12A", "BLR 123", ""] {
            assert!(!is_valid_school_code(bad), "{bad}");
        }
    }

    #[test]
    fn blank_input_is_reported_first() {
        let err = validate_identity("  ", "abc", &Ruleset::standard()).unwrap_err();
        assert!(matches!(err, QuizError::MissingInput));
    }

    #[test]
    fn school_code_checked_before_roll_number() {
        let err = validate_identity("blr123", "xx", &Ruleset::standard()).unwrap_err();
        assert!(matches!(err, QuizError::InvalidSchoolCode));
    }

    #[test]
    fn roll_number_depends_on_ruleset() {
        let standard = Ruleset::standard();
        let attempted = Ruleset::attempted_only();

        assert!(validate_identity("BLR123", "0000", &standard).is_ok());
        assert!(validate_identity("BLR123", "000", &attempted).is_err());
        assert!(validate_identity("BLR123", "001", &attempted).is_ok());

        let err = validate_identity("BLR123", "123", &standard).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidRollNumber(RollNumberRule::FourDigits)
        ));
    }

    #[test]
    fn identity_is_trimmed() {
        let id = validate_identity(" BLR123 ", " 0042\n", &Ruleset::standard()).unwrap();
        assert_eq!(id.school, "BLR123");
        assert_eq!(id.student, "0042");
    }
}
