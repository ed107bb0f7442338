use crate::content::Content;
use crate::demo::DemoState;
use crate::logger;
use crate::models::{App, AppState, QuizPhase, Section, TopicKey, TopicSession};
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use rand::Rng;

/// Every user-visible operation, decoupled from the keys that trigger it.
/// Key translation happens once in `action_for_key`; `apply_action` is the
/// single dispatch point that mutates the app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenTopic(TopicKey),
    ReturnToLanding,
    NextSection,
    PreviousSection,
    GoToSection(Section),
    SelectOption(usize),
    AdvanceQuestion,
    RetakeQuiz,
    CompleteModule,
    DismissModal,
    NewRound,
    GuessReal,
    GuessFake,
    PredictWord(usize),
    NewSentence,
    GenerateVariations,
    NewInput,
}

pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    match app.state {
        AppState::Landing => None,
        AppState::CompletionModal => match key.code {
            // "Continue" and "Main Menu" are behaviorally identical.
            KeyCode::Enter | KeyCode::Char('m') => Some(Action::DismissModal),
            _ => None,
        },
        AppState::Topic => app
            .session
            .as_ref()
            .and_then(|session| topic_action(session, key)),
    }
}

fn topic_action(session: &TopicSession, key: KeyEvent) -> Option<Action> {
    // The active section claims its keys first; navigation gets the rest.
    let claimed = match session.section {
        Section::Demo => demo_action(&session.demo, key),
        Section::Quiz => quiz_action(session, key),
        _ => None,
    };
    if claimed.is_some() {
        return claimed;
    }

    match key.code {
        KeyCode::Esc => Some(Action::ReturnToLanding),
        KeyCode::Right => Some(Action::NextSection),
        KeyCode::Left => Some(Action::PreviousSection),
        KeyCode::Char(c @ '1'..='5') => {
            Section::from_index(c as usize - '1' as usize).map(Action::GoToSection)
        }
        _ => None,
    }
}

fn quiz_action(session: &TopicSession, key: KeyEvent) -> Option<Action> {
    match session.phase {
        QuizPhase::AwaitingAnswer => match key.code {
            KeyCode::Char(c @ '1'..='4') => Some(Action::SelectOption(c as usize - '1' as usize)),
            _ => None,
        },
        QuizPhase::ShowingFeedback { .. } => match key.code {
            KeyCode::Enter => Some(Action::AdvanceQuestion),
            _ => None,
        },
        QuizPhase::Finished => match key.code {
            KeyCode::Char('r') => Some(Action::RetakeQuiz),
            KeyCode::Char('c') => Some(Action::CompleteModule),
            _ => None,
        },
    }
}

fn demo_action(demo: &DemoState, key: KeyEvent) -> Option<Action> {
    match demo {
        DemoState::Guess(game) => match key.code {
            KeyCode::Char('n') => Some(Action::NewRound),
            KeyCode::Char('r') if !game.choices_locked() => Some(Action::GuessReal),
            KeyCode::Char('f') if !game.choices_locked() => Some(Action::GuessFake),
            _ => None,
        },
        DemoState::Predict(_) => match key.code {
            KeyCode::Char('n') => Some(Action::NewSentence),
            KeyCode::Char(c @ '1'..='3') => Some(Action::PredictWord(c as usize - '1' as usize)),
            _ => None,
        },
        DemoState::Variation(_) => match key.code {
            KeyCode::Char('g') => Some(Action::GenerateVariations),
            KeyCode::Char('n') => Some(Action::NewInput),
            _ => None,
        },
    }
}

pub fn apply_action(app: &mut App, content: &Content, action: Action, rng: &mut impl Rng) {
    match action {
        Action::OpenTopic(key) => open_topic(app, content, key, rng),
        Action::ReturnToLanding | Action::DismissModal => {
            app.state = AppState::Landing;
            app.session = None;
            logger::log("returned to landing");
        }
        Action::NextSection => {
            if let Some(session) = &mut app.session {
                let next = session.section.next();
                if next != session.section {
                    enter_section(session, next);
                }
            }
        }
        Action::PreviousSection => {
            if let Some(session) = &mut app.session {
                let previous = session.section.previous();
                if previous != session.section {
                    enter_section(session, previous);
                }
            }
        }
        Action::GoToSection(target) => {
            if let Some(session) = &mut app.session
                && target != session.section
            {
                enter_section(session, target);
            }
        }
        Action::SelectOption(option) => select_option(app, content, option),
        Action::AdvanceQuestion => advance_question(app, content),
        Action::RetakeQuiz => {
            if let Some(session) = &mut app.session
                && session.phase == QuizPhase::Finished
            {
                session.reset_quiz();
                logger::log("quiz retake");
            }
        }
        Action::CompleteModule => complete_module(app),
        Action::NewRound => {
            if let Some(DemoState::Guess(game)) = demo_mut(app) {
                game.new_round(rng);
            }
        }
        Action::GuessReal => {
            if let Some(DemoState::Guess(game)) = demo_mut(app) {
                game.guess(true);
            }
        }
        Action::GuessFake => {
            if let Some(DemoState::Guess(game)) = demo_mut(app) {
                game.guess(false);
            }
        }
        Action::PredictWord(word) => {
            if let Some(DemoState::Predict(game)) = demo_mut(app) {
                game.predict(word);
            }
        }
        Action::NewSentence => {
            if let Some(DemoState::Predict(game)) = demo_mut(app) {
                game.new_sentence(rng);
            }
        }
        Action::GenerateVariations => {
            if let Some(DemoState::Variation(game)) = demo_mut(app) {
                game.generate();
            }
        }
        Action::NewInput => {
            if let Some(DemoState::Variation(game)) = demo_mut(app) {
                game.new_input(rng);
            }
        }
    }
}

fn demo_mut(app: &mut App) -> Option<&mut DemoState> {
    app.session.as_mut().map(|session| &mut session.demo)
}

/// Unknown keys (absent from the content store) abort without changing state.
fn open_topic(app: &mut App, content: &Content, key: TopicKey, rng: &mut impl Rng) {
    if let Some(topic) = content.topic(key) {
        let fun_fact = topic
            .fun_facts
            .choose(rng)
            .cloned()
            .unwrap_or_default();
        app.session = Some(TopicSession::new(key, fun_fact));
        app.state = AppState::Topic;
        logger::log(&format!("opened topic {}", key.as_str()));
    }
}

/// Entering the quiz section always restarts the walk at question 0.
fn enter_section(session: &mut TopicSession, target: Section) {
    session.section = target;
    if target == Section::Quiz {
        session.reset_quiz();
    }
    logger::log(&format!("section -> {}", target.title()));
}

fn select_option(app: &mut App, content: &Content, option: usize) {
    if let Some(session) = &mut app.session {
        if session.section != Section::Quiz || session.phase != QuizPhase::AwaitingAnswer {
            return;
        }
        let questions = content.quiz(session.topic);
        if let Some(question) = questions.get(session.question_index) {
            if option >= question.options.len() {
                return;
            }
            if option == question.correct {
                session.score += 1;
            }
            session.phase = QuizPhase::ShowingFeedback { selected: option };
            logger::log(&format!(
                "question {} answered {} ({})",
                session.question_index + 1,
                option + 1,
                if option == question.correct {
                    "correct"
                } else {
                    "incorrect"
                }
            ));
        }
    }
}

fn advance_question(app: &mut App, content: &Content) {
    if let Some(session) = &mut app.session {
        if !matches!(session.phase, QuizPhase::ShowingFeedback { .. }) {
            return;
        }
        session.question_index += 1;
        if session.question_index < content.quiz(session.topic).len() {
            session.phase = QuizPhase::AwaitingAnswer;
        } else {
            session.phase = QuizPhase::Finished;
            logger::log(&format!("quiz finished, score {}", session.score));
        }
    }
}

fn complete_module(app: &mut App) {
    if let Some(session) = &app.session
        && session.phase == QuizPhase::Finished
    {
        app.progress.mark_complete(session.topic);
        app.state = AppState::CompletionModal;
        logger::log(&format!("completed {}", session.topic.as_str()));
    }
}
