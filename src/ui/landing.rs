use crate::content::Content;
use crate::models::{App, TopicKey};
use crate::ui::layout::calculate_landing_chunks;
use crate::utils::{parse_hex_color, truncate_to_width};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_landing(f: &mut Frame, app: &App, content: &Content) {
    let layout = calculate_landing_chunks(f.area());

    let title = Paragraph::new("AI Explorer v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let items: Vec<ListItem> = TopicKey::ALL
        .iter()
        .enumerate()
        .filter_map(|(i, key)| {
            let topic = content.topic(*key)?;
            let accent = parse_hex_color(&topic.color).unwrap_or(Color::White);
            let name_style = if i == app.selected_topic_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            };
            let badge_style = if app.progress.is_complete(*key) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut text = Text::default();
            text.push_line(Line::from(vec![
                Span::styled(topic.name.clone(), name_style),
                Span::from("  "),
                Span::from(topic.full_name.clone()),
                Span::from("  "),
                Span::styled(format!("[{}]", app.progress.badge_label(*key)), badge_style),
            ]));
            text.push_line(Line::from(Span::styled(
                format!("   {}", truncate_to_width(&topic.tagline, 70)),
                Style::default().fg(Color::DarkGray),
            )));
            text.push_line(Line::from(""));
            Some(ListItem::new(text))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Topics ({} / {} completed)",
            app.progress.completed_count(),
            TopicKey::ALL.len()
        )))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, layout.list_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Open Topic  "),
        Span::styled(
            "q",
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
