use crate::content::QuizQuestion;
use crate::models::{QuizPhase, TopicSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(
    f: &mut Frame,
    area: Rect,
    session: &TopicSession,
    questions: &[QuizQuestion],
    accent: Color,
) {
    if area.height == 0 || questions.is_empty() {
        return;
    }
    if session.phase == QuizPhase::Finished || session.question_index >= questions.len() {
        draw_results(f, area, session, questions, accent);
    } else {
        draw_question(f, area, session, &questions[session.question_index], questions.len());
    }
}

fn draw_question(
    f: &mut Frame,
    area: Rect,
    session: &TopicSession,
    question: &QuizQuestion,
    total: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "Question {} / {}    Score: {}",
        session.question_index + 1,
        total,
        session.score
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let mut text = Text::from(question.question.as_str());
    text.push_line(Line::from(""));
    for (i, option) in question.options.iter().enumerate() {
        text.push_line(option_line(i, option, session.phase, question.correct));
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    f.render_widget(body, chunks[1]);

    let feedback = match session.phase {
        QuizPhase::ShowingFeedback { .. } => {
            let mut feedback_text = Text::from(question.explanation.as_str());
            feedback_text.push_line(Line::from(""));
            feedback_text.push_line(Line::from(vec![
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::from(" Next"),
            ]));
            Paragraph::new(feedback_text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Explanation"))
        }
        _ => Paragraph::new(Line::from(vec![
            Span::styled(
                "1-4",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Pick an answer"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL)),
    };
    f.render_widget(feedback, chunks[2]);
}

/// Options render neutral while answering; once an answer is in, the correct
/// option and a wrong pick are marked and everything else goes inert.
fn option_line(
    index: usize,
    option: &str,
    phase: QuizPhase,
    correct: usize,
) -> Line<'static> {
    match phase {
        QuizPhase::ShowingFeedback { selected } => {
            if index == correct {
                Line::from(Span::styled(
                    format!(" ✓ {}) {}", index + 1, option),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if index == selected {
                Line::from(Span::styled(
                    format!(" ✗ {}) {}", index + 1, option),
                    Style::default().fg(Color::Red),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}) {}", index + 1, option),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        }
        _ => Line::from(vec![
            Span::styled(
                format!("   {}) ", index + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(option.to_string()),
        ]),
    }
}

fn draw_results(
    f: &mut Frame,
    area: Rect,
    session: &TopicSession,
    questions: &[QuizQuestion],
    accent: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quiz Complete! 🎉")
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let score = Paragraph::new(format!(
        "You scored {} / {}",
        session.score,
        questions.len()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Retake Quiz  "),
        Span::styled(
            "c",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Complete Module"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
