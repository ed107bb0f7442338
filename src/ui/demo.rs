use crate::demo::{DemoState, GuessGame, PredictGame, VariationGame, GUESS_SCENARIOS};
use crate::models::TopicSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// Result backgrounds matching the topic accent palette.
const CORRECT_BG: Color = Color::Rgb(0x99, 0xE8, 0x65);
const INCORRECT_BG: Color = Color::Rgb(0xFE, 0x90, 0xE8);
const HINT_BG: Color = Color::Rgb(0xFF, 0xDC, 0x8B);
const VARIATION_BG: Color = Color::Rgb(0xC0, 0xFF, 0xEF);

struct DemoPanel {
    title: &'static str,
    intro: &'static str,
    prompt: Text<'static>,
    result: Option<(Text<'static>, Color)>,
    keys: Vec<(&'static str, &'static str)>,
}

pub fn draw_demo(f: &mut Frame, area: Rect, session: &TopicSession) {
    if area.height == 0 {
        return;
    }
    let panel = match &session.demo {
        DemoState::Guess(game) => guess_panel(game),
        DemoState::Predict(game) => predict_panel(game),
        DemoState::Variation(game) => variation_panel(game),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let mut prompt_text = Text::from(Line::from(Span::styled(
        panel.intro,
        Style::default().fg(Color::DarkGray),
    )));
    prompt_text.push_line(Line::from(""));
    for line in panel.prompt.lines {
        prompt_text.push_line(line);
    }
    let prompt = Paragraph::new(prompt_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(panel.title));
    f.render_widget(prompt, chunks[0]);

    let result_content = match panel.result {
        Some((text, bg)) => Paragraph::new(text)
            .style(Style::default().bg(bg).fg(Color::Black))
            .wrap(Wrap { trim: true }),
        None => Paragraph::new("").wrap(Wrap { trim: true }),
    };
    f.render_widget(
        result_content.block(Block::default().borders(Borders::ALL).title("Result")),
        chunks[1],
    );

    let mut key_spans = Vec::new();
    for (key, label) in panel.keys {
        key_spans.push(Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        key_spans.push(Span::from(format!(" {}  ", label)));
    }
    let keys = Paragraph::new(Line::from(key_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keys, chunks[2]);
}

fn guess_panel(game: &GuessGame) -> DemoPanel {
    let prompt = match game.scenario {
        Some(i) => Text::from(GUESS_SCENARIOS[i].text),
        None => Text::from("Press n to start a new round!"),
    };

    let result = game.verdict.map(|verdict| {
        let (message, bg) = if verdict.correct {
            (
                format!(
                    "🎉 Correct! {}",
                    if verdict.was_real {
                        "This sounds like real data!"
                    } else {
                        "This was generated by AI!"
                    }
                ),
                CORRECT_BG,
            )
        } else {
            (
                format!(
                    "❌ Not quite! {}",
                    if verdict.was_real {
                        "This was actually real data."
                    } else {
                        "This was actually generated by AI."
                    }
                ),
                INCORRECT_BG,
            )
        };
        (Text::from(message), bg)
    });

    let keys = if game.choices_locked() {
        vec![("n", "New Round")]
    } else {
        vec![("r", "Real"), ("f", "Fake"), ("n", "New Round")]
    };

    DemoPanel {
        title: "Real vs Fake Game",
        intro: "Can you tell which image description sounds more realistic?",
        prompt,
        result,
        keys,
    }
}

fn predict_panel(game: &PredictGame) -> DemoPanel {
    let data = game.sentence_data();
    let mut prompt = Text::from(format!("{}...", data.start));
    prompt.push_line(Line::from(""));
    let mut word_spans = Vec::new();
    for (i, word) in data.words.iter().enumerate() {
        word_spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        word_spans.push(Span::from(format!(") {}  ", word)));
    }
    prompt.push_line(Line::from(word_spans));

    let result = game.picked.map(|picked| {
        let word = data.words[picked];
        if word == data.best {
            (
                Text::from(format!(
                    "🎉 Great prediction! \"{}\" makes perfect sense in context!",
                    word
                )),
                CORRECT_BG,
            )
        } else {
            (
                Text::from(format!(
                    "🤔 Hmm, \"{}\" doesn't quite fit. RNNs learn what words usually come next!",
                    word
                )),
                HINT_BG,
            )
        }
    });

    DemoPanel {
        title: "Word Prediction Game",
        intro: "Complete the sentence like an RNN would!",
        prompt,
        result,
        keys: vec![("1-3", "Pick a word"), ("n", "New Sentence")],
    }
}

fn variation_panel(game: &VariationGame) -> DemoPanel {
    let data = game.input_data();
    let prompt = Text::from(format!("Original: {}", data.original));

    let result = game.generated.then(|| {
        let mut text = Text::from(Line::from(Span::styled(
            "Generated Variations:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(data.variations.join(" | ")));
        text.push_line(Line::from(""));
        text.push_line(Line::from(
            "VAEs learned the 'essence' of the input and created similar but different outputs!",
        ));
        (text, VARIATION_BG)
    });

    DemoPanel {
        title: "Image Variation Generator",
        intro: "See how VAEs create variations of input data!",
        prompt,
        result,
        keys: vec![("g", "Generate Variations"), ("n", "New Input")],
    }
}
