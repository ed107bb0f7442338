use ai_explorer::models::{App, AppState, TopicKey};
use ai_explorer::session::{action_for_key, apply_action, Action};
use ai_explorer::{logger, ui, Content};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    logger::init();
    let content = Content::load()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut rng = rand::thread_rng();

    loop {
        terminal.draw(|f| match app.state {
            AppState::Landing => ui::draw_landing(f, &app, &content),
            AppState::Topic => {
                if let Some(session) = &app.session {
                    ui::draw_topic(f, session, &content);
                }
            }
            AppState::CompletionModal => {
                if let Some(session) = &app.session {
                    ui::draw_topic(f, session, &content);
                    ui::draw_completion_modal(f, session, &content);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.state {
                AppState::Landing => match key.code {
                    KeyCode::Up => {
                        if app.selected_topic_index > 0 {
                            app.selected_topic_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if app.selected_topic_index < TopicKey::ALL.len() - 1 {
                            app.selected_topic_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let topic = TopicKey::ALL[app.selected_topic_index];
                        apply_action(&mut app, &content, Action::OpenTopic(topic), &mut rng);
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Topic | AppState::CompletionModal => {
                    if let Some(action) = action_for_key(&app, key) {
                        apply_action(&mut app, &content, action, &mut rng);
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
