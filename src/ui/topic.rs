use crate::content::{Content, Topic};
use crate::models::{Section, SectionMarker, TopicSession};
use crate::ui::layout::calculate_topic_chunks;
use crate::utils::parse_hex_color;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_topic(f: &mut Frame, session: &TopicSession, content: &Content) {
    let topic = match content.topic(session.topic) {
        Some(topic) => topic,
        None => return,
    };
    let accent = parse_hex_color(&topic.color).unwrap_or(Color::Cyan);
    let layout = calculate_topic_chunks(f.area());

    let header_text = vec![
        Line::from(Span::styled(
            topic.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(topic.full_name.clone()),
        Line::from(Span::styled(
            topic.tagline.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let dots = Paragraph::new(Line::from(dot_spans(session.section, accent)))
        .alignment(Alignment::Center);
    f.render_widget(dots, layout.dots_area);

    match session.section {
        Section::Overview => draw_overview(f, layout.body_area, topic, session, accent),
        Section::HowItWorks => draw_steps(f, layout.body_area, topic, accent),
        Section::Examples => draw_examples(f, layout.body_area, topic),
        Section::Demo => super::demo::draw_demo(f, layout.body_area, session),
        Section::Quiz => super::quiz::draw_quiz(f, layout.body_area, session, &topic.quiz, accent),
    }

    let help_text = vec![Line::from(vec![
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Sections  "),
        Span::styled(
            "1-5",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Jump  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn dot_spans(active: Section, accent: Color) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for section in Section::ALL {
        let (symbol, style) = match section.marker(active) {
            SectionMarker::Completed => ("●", Style::default().fg(Color::Green)),
            SectionMarker::Active => (
                "●",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            SectionMarker::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{} ", symbol), style));
        spans.push(Span::styled(section.title(), style));
        spans.push(Span::from("   "));
    }
    spans
}

fn draw_overview(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    topic: &Topic,
    session: &TopicSession,
    accent: Color,
) {
    if area.height == 0 {
        return;
    }
    let mut text = Text::default();
    text.push_line(Line::from(topic.description.clone()));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("💡 Fun Fact: {}", session.fun_fact),
        Style::default().fg(accent),
    )));

    let overview = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Overview"));
    f.render_widget(overview, area);
}

fn draw_steps(f: &mut Frame, area: ratatui::layout::Rect, topic: &Topic, accent: Color) {
    if area.height == 0 {
        return;
    }
    let mut text = Text::default();
    for (i, step) in topic.how_it_works.iter().enumerate() {
        text.push_line(Line::from(vec![
            Span::styled(
                format!(" {}. ", i + 1),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::from(step.clone()),
        ]));
        text.push_line(Line::from(""));
    }

    let steps = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("How It Works"));
    f.render_widget(steps, area);
}

fn draw_examples(f: &mut Frame, area: ratatui::layout::Rect, topic: &Topic) {
    if area.height == 0 {
        return;
    }
    let mut text = Text::default();
    for example in &topic.examples {
        text.push_line(Line::from(format!("💡 {}", example)));
        text.push_line(Line::from(""));
    }

    let examples = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Examples"));
    f.render_widget(examples, area);
}
