use crate::demo::DemoState;
use crate::progress::Progress;
use serde::Deserialize;

/// Closed set of taught topics. Doubles as the JSON key of the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKey {
    Gans,
    Rnns,
    Vaes,
}

impl TopicKey {
    pub const ALL: [TopicKey; 3] = [TopicKey::Gans, TopicKey::Rnns, TopicKey::Vaes];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicKey::Gans => "gans",
            TopicKey::Rnns => "rnns",
            TopicKey::Vaes => "vaes",
        }
    }
}

/// The five ordered content panels of a topic page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    HowItWorks,
    Examples,
    Demo,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMarker {
    Completed,
    Active,
    Upcoming,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::HowItWorks,
        Section::Examples,
        Section::Demo,
        Section::Quiz,
    ];

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// One step forward, clamped at Quiz.
    pub fn next(self) -> Section {
        Section::from_index(self.index() + 1).unwrap_or(self)
    }

    /// One step back, clamped at Overview.
    pub fn previous(self) -> Section {
        match self.index() {
            0 => self,
            i => Section::ALL[i - 1],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::HowItWorks => "How It Works",
            Section::Examples => "Examples",
            Section::Demo => "Demo",
            Section::Quiz => "Quiz",
        }
    }

    /// Dot-indicator marker for this section given the active cursor.
    pub fn marker(self, active: Section) -> SectionMarker {
        if self.index() < active.index() {
            SectionMarker::Completed
        } else if self == active {
            SectionMarker::Active
        } else {
            SectionMarker::Upcoming
        }
    }
}

/// Quiz walk state for the current question index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer,
    ShowingFeedback { selected: usize },
    Finished,
}

/// Everything that lives only while a topic page is open. Recreated from
/// scratch on every open, so nothing bleeds between topics.
#[derive(Debug)]
pub struct TopicSession {
    pub topic: TopicKey,
    pub section: Section,
    /// Fun fact chosen once per activation.
    pub fun_fact: String,
    pub question_index: usize,
    pub score: usize,
    pub phase: QuizPhase,
    pub demo: DemoState,
}

impl TopicSession {
    pub fn new(topic: TopicKey, fun_fact: String) -> Self {
        TopicSession {
            topic,
            section: Section::Overview,
            fun_fact,
            question_index: 0,
            score: 0,
            phase: QuizPhase::AwaitingAnswer,
            demo: DemoState::for_topic(topic),
        }
    }

    pub fn reset_quiz(&mut self) {
        self.question_index = 0;
        self.score = 0;
        self.phase = QuizPhase::AwaitingAnswer;
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Landing,
    Topic,
    CompletionModal,
}

/// Top-level application state owned by the main loop and threaded through
/// every transition, instead of ambient globals.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub selected_topic_index: usize,
    pub progress: Progress,
    pub session: Option<TopicSession>,
}

impl App {
    pub fn new() -> Self {
        App {
            state: AppState::Landing,
            selected_topic_index: 0,
            progress: Progress::new(),
            session: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Overview.index(), 0);
        assert_eq!(Section::Quiz.index(), 4);
        assert_eq!(Section::ALL.len(), 5);
    }

    #[test]
    fn test_section_next_clamps_at_end() {
        assert_eq!(Section::Overview.next(), Section::HowItWorks);
        assert_eq!(Section::Demo.next(), Section::Quiz);
        assert_eq!(Section::Quiz.next(), Section::Quiz);
    }

    #[test]
    fn test_section_previous_clamps_at_start() {
        assert_eq!(Section::Quiz.previous(), Section::Demo);
        assert_eq!(Section::HowItWorks.previous(), Section::Overview);
        assert_eq!(Section::Overview.previous(), Section::Overview);
    }

    #[test]
    fn test_section_moves_by_exactly_one_between_bounds() {
        for section in Section::ALL {
            let i = section.index();
            if i < Section::ALL.len() - 1 {
                assert_eq!(section.next().index(), i + 1);
            }
            if i > 0 {
                assert_eq!(section.previous().index(), i - 1);
            }
        }
    }

    #[test]
    fn test_markers_on_activation() {
        let markers: Vec<SectionMarker> = Section::ALL
            .iter()
            .map(|s| s.marker(Section::Overview))
            .collect();
        assert!(!markers.contains(&SectionMarker::Completed));
        assert_eq!(
            markers
                .iter()
                .filter(|m| **m == SectionMarker::Active)
                .count(),
            1
        );
    }

    #[test]
    fn test_markers_mid_walk() {
        assert_eq!(
            Section::Overview.marker(Section::Examples),
            SectionMarker::Completed
        );
        assert_eq!(
            Section::Examples.marker(Section::Examples),
            SectionMarker::Active
        );
        assert_eq!(
            Section::Quiz.marker(Section::Examples),
            SectionMarker::Upcoming
        );
    }

    #[test]
    fn test_topic_session_starts_at_overview() {
        let session = TopicSession::new(TopicKey::Gans, "fact".to_string());
        assert_eq!(session.section, Section::Overview);
        assert_eq!(session.question_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn test_reset_quiz() {
        let mut session = TopicSession::new(TopicKey::Rnns, String::new());
        session.question_index = 2;
        session.score = 1;
        session.phase = QuizPhase::Finished;
        session.reset_quiz();
        assert_eq!(session.question_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn test_topic_key_strings() {
        assert_eq!(TopicKey::Gans.as_str(), "gans");
        assert_eq!(TopicKey::Rnns.as_str(), "rnns");
        assert_eq!(TopicKey::Vaes.as_str(), "vaes");
    }
}
