use crate::models::question::Question;

/// Renders one question as a numbered block with 1-based choice labels.
pub fn render_question(index: usize, question: &Question) -> String {
    let mut out = format!("{}. {}\n", index + 1, question.text);
    for (i, choice) in question.choices.iter().enumerate() {
        out.push_str(&format!("   ({}) {}\n", i + 1, choice));
    }
    out
}

/// Turns a typed line such as "2" or "1 3" into per-choice checked flags.
///
/// Each number checks one choice, so several numbers behave like clicking
/// several radios in turn. Out-of-range and non-numeric tokens are skipped.
pub fn parse_choice_line(line: &str, choice_count: usize) -> Vec<bool> {
    let mut checked = vec![false; choice_count];
    for token in line.split(|c: char| c.is_whitespace() || c == ',') {
        match token.parse::<usize>() {
            Ok(n) if (1..=choice_count).contains(&n) => checked[n - 1] = true,
            _ => {}
        }
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::collector::last_checked;

    #[test]
    fn renders_numbered_choices() {
        let q = Question {
            text: "Largest planet?".into(),
            choices: vec!["Mars".into(), "Jupiter".into()],
        };
        assert_eq!(
            render_question(2, &q),
            "3. Largest planet?\n   (1) Mars\n   (2) Jupiter\n"
        );
    }

    #[test]
    fn parses_choice_lines() {
        assert_eq!(parse_choice_line("", 3), vec![false, false, false]);
        assert_eq!(parse_choice_line("2", 3), vec![false, true, false]);
        assert_eq!(parse_choice_line("9 x 0", 3), vec![false, false, false]);
        assert_eq!(last_checked(&parse_choice_line("3, 1", 3)), Some(2));
    }
}
