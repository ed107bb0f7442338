use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct LandingLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct TopicLayout {
    pub header_area: Rect,
    pub dots_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_landing_chunks(area: Rect) -> LandingLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    LandingLayout {
        header_area: chunks[0],
        list_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_topic_chunks(area: Rect) -> TopicLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    TopicLayout {
        header_area: chunks[0],
        dots_area: chunks[1],
        body_area: chunks[2],
        help_area: chunks[3],
    }
}
