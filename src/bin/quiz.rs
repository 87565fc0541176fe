// src/bin/quiz.rs

use std::io::Write;

use school_quiz::{
    config::Config,
    error::QuizError,
    quiz::{
        flow::StartInput,
        render::{parse_choice_line, render_question},
        source::HttpSource,
        submitter::Submitter,
        widget::QuizWidget,
    },
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;
use url::Url;

type Input = Lines<BufReader<Stdin>>;

/// Prints `label` and reads one line. `None` on end of input.
async fn prompt(lines: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    lines.next_line().await
}

/// Asks for one choice line per question.
async fn answer_questions(
    widget: &QuizWidget,
    lines: &mut Input,
) -> std::io::Result<Option<Vec<Vec<bool>>>> {
    let Some(session) = widget.session() else {
        return Ok(Some(Vec::new()));
    };

    let mut selections = Vec::with_capacity(session.questions.len());
    for (i, question) in session.questions.iter().enumerate() {
        println!("{}", render_question(i, question));
        let Some(line) = prompt(lines, "Your choice (blank to skip): ").await? else {
            return Ok(None);
        };
        selections.push(parse_choice_line(&line, question.choices.len()));
    }
    Ok(Some(selections))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.rust_log))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let base = Url::parse(&config.api_base)?;
    let client = reqwest::Client::new();
    let source = HttpSource::new(client.clone(), base.join("questions.json")?);
    let submitter = Submitter::new(client, base.join("api/submit")?, config.jitter_max);

    tracing::info!("Using ruleset {} against {}", config.ruleset, base);
    let mut widget = QuizWidget::new(config.ruleset, Box::new(source), submitter);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Intro panel
    loop {
        let Some(school) = prompt(&mut lines, "School code: ").await? else {
            return Ok(());
        };
        let Some(student) = prompt(&mut lines, "Roll number: ").await? else {
            return Ok(());
        };
        let Some(grade) = prompt(&mut lines, "Grade: ").await? else {
            return Ok(());
        };

        let input = StartInput {
            school,
            student,
            grade,
        };
        match widget.start(&input).await {
            Ok(session) => {
                println!("\nSession {}\n", session.token);
                break;
            }
            Err(e) => println!("{}\n", e),
        }
    }

    // Quiz panel
    let Some(mut selections) = answer_questions(&widget, &mut lines).await? else {
        return Ok(());
    };
    loop {
        println!("Submitting...");
        match widget.submit(&selections).await {
            Ok(outcome) => {
                println!();
                for line in outcome.summary() {
                    println!("{}", line);
                }
                return Ok(());
            }
            Err(QuizError::NothingAttempted) => {
                println!("{}\n", QuizError::NothingAttempted);
                match answer_questions(&widget, &mut lines).await? {
                    Some(again) => selections = again,
                    None => return Ok(()),
                }
            }
            Err(e) => {
                println!("{}", e);
                let choice = prompt(&mut lines, "Press Enter to retry or type q to quit: ").await?;
                match choice.as_deref().map(str::trim) {
                    None | Some("q") | Some("Q") => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}
