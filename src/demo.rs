use crate::models::TopicKey;
use rand::Rng;

pub struct GuessScenario {
    pub text: &'static str,
    pub is_real: bool,
}

/// Fixed pool for the real-vs-fake guessing game. Rounds draw uniformly and
/// independently, so repeats are allowed.
pub const GUESS_SCENARIOS: &[GuessScenario] = &[
    GuessScenario {
        text: "A portrait of a person with perfectly symmetrical features and flawless skin",
        is_real: false,
    },
    GuessScenario {
        text: "A selfie with natural lighting and slight imperfections",
        is_real: true,
    },
    GuessScenario {
        text: "An artwork that perfectly mimics Van Gogh's style but shows a modern city",
        is_real: false,
    },
    GuessScenario {
        text: "A photograph with natural shadows and realistic proportions",
        is_real: true,
    },
];

pub struct PredictSentence {
    pub start: &'static str,
    pub words: [&'static str; 3],
    pub best: &'static str,
}

pub const PREDICT_SENTENCES: &[PredictSentence] = &[
    PredictSentence {
        start: "The weather today is",
        words: ["sunny", "cloudy", "rainy"],
        best: "sunny",
    },
    PredictSentence {
        start: "I love to eat",
        words: ["pizza", "books", "music"],
        best: "pizza",
    },
    PredictSentence {
        start: "The cat is",
        words: ["sleeping", "flying", "swimming"],
        best: "sleeping",
    },
    PredictSentence {
        start: "My favorite color is",
        words: ["blue", "fast", "loud"],
        best: "blue",
    },
];

pub struct VariationInput {
    pub original: &'static str,
    pub variations: [&'static str; 3],
}

pub const VARIATION_INPUTS: &[VariationInput] = &[
    VariationInput {
        original: "🏠 House",
        variations: ["🏡 Cottage", "🏰 Castle", "🏢 Building"],
    },
    VariationInput {
        original: "🐱 Cat",
        variations: ["🐈 Kitten", "🦁 Lion", "🐅 Tiger"],
    },
    VariationInput {
        original: "🌸 Flower",
        variations: ["🌺 Hibiscus", "🌻 Sunflower", "🌹 Rose"],
    },
    VariationInput {
        original: "🚗 Car",
        variations: ["🚙 SUV", "🏎️ Sports Car", "🚐 Van"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessVerdict {
    pub correct: bool,
    pub was_real: bool,
}

/// Real-vs-fake game. No scenario until the first round is started; once a
/// verdict is in, the choice inputs stay locked until the next round.
#[derive(Debug, Default)]
pub struct GuessGame {
    pub scenario: Option<usize>,
    pub verdict: Option<GuessVerdict>,
}

impl GuessGame {
    pub fn new_round(&mut self, rng: &mut impl Rng) {
        self.scenario = Some(rng.gen_range(0..GUESS_SCENARIOS.len()));
        self.verdict = None;
    }

    pub fn guess(&mut self, guess_real: bool) {
        if self.verdict.is_some() {
            return;
        }
        if let Some(i) = self.scenario {
            let was_real = GUESS_SCENARIOS[i].is_real;
            self.verdict = Some(GuessVerdict {
                correct: guess_real == was_real,
                was_real,
            });
        }
    }

    pub fn choices_locked(&self) -> bool {
        self.scenario.is_none() || self.verdict.is_some()
    }
}

/// Word-prediction game. Seeds from the first sentence; picking a word shows
/// feedback but never advances the prompt on its own.
#[derive(Debug)]
pub struct PredictGame {
    pub sentence: usize,
    pub picked: Option<usize>,
}

impl PredictGame {
    pub fn new() -> Self {
        PredictGame {
            sentence: 0,
            picked: None,
        }
    }

    pub fn sentence_data(&self) -> &'static PredictSentence {
        &PREDICT_SENTENCES[self.sentence]
    }

    pub fn predict(&mut self, word_index: usize) {
        if word_index < self.sentence_data().words.len() {
            self.picked = Some(word_index);
        }
    }

    pub fn picked_best(&self) -> Option<bool> {
        let data = self.sentence_data();
        self.picked.map(|i| data.words[i] == data.best)
    }

    pub fn new_sentence(&mut self, rng: &mut impl Rng) {
        self.sentence = rng.gen_range(0..PREDICT_SENTENCES.len());
        self.picked = None;
    }
}

impl Default for PredictGame {
    fn default() -> Self {
        PredictGame::new()
    }
}

/// Variation generator. "Generate" is deterministic for the current input;
/// only "new input" draws randomly.
#[derive(Debug)]
pub struct VariationGame {
    pub input: usize,
    pub generated: bool,
}

impl VariationGame {
    pub fn new() -> Self {
        VariationGame {
            input: 0,
            generated: false,
        }
    }

    pub fn input_data(&self) -> &'static VariationInput {
        &VARIATION_INPUTS[self.input]
    }

    pub fn generate(&mut self) {
        self.generated = true;
    }

    pub fn new_input(&mut self, rng: &mut impl Rng) {
        self.input = rng.gen_range(0..VARIATION_INPUTS.len());
        self.generated = false;
    }
}

impl Default for VariationGame {
    fn default() -> Self {
        VariationGame::new()
    }
}

/// Topic-specific demo state, one variant per topic.
#[derive(Debug)]
pub enum DemoState {
    Guess(GuessGame),
    Predict(PredictGame),
    Variation(VariationGame),
}

impl DemoState {
    pub fn for_topic(topic: TopicKey) -> DemoState {
        match topic {
            TopicKey::Gans => DemoState::Guess(GuessGame::default()),
            TopicKey::Rnns => DemoState::Predict(PredictGame::new()),
            TopicKey::Vaes => DemoState::Variation(VariationGame::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_guess_game_starts_without_scenario() {
        let game = GuessGame::default();
        assert!(game.scenario.is_none());
        assert!(game.verdict.is_none());
        assert!(game.choices_locked());
    }

    #[test]
    fn test_guess_before_round_is_ignored() {
        let mut game = GuessGame::default();
        game.guess(true);
        assert!(game.verdict.is_none());
    }

    #[test]
    fn test_new_round_picks_a_valid_scenario() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GuessGame::default();
        for _ in 0..20 {
            game.new_round(&mut rng);
            assert!(game.scenario.unwrap() < GUESS_SCENARIOS.len());
            assert!(game.verdict.is_none());
            assert!(!game.choices_locked());
        }
    }

    #[test]
    fn test_wrong_guess_marks_incorrect_and_locks_choices() {
        let mut game = GuessGame::default();
        // Scenario 0 is a generated description.
        game.scenario = Some(0);
        game.guess(true);
        let verdict = game.verdict.unwrap();
        assert!(!verdict.correct);
        assert!(!verdict.was_real);
        assert!(game.choices_locked());
    }

    #[test]
    fn test_guess_after_verdict_is_ignored() {
        let mut game = GuessGame::default();
        game.scenario = Some(1);
        game.guess(true);
        let first = game.verdict;
        game.guess(false);
        assert_eq!(game.verdict, first);
    }

    #[test]
    fn test_new_round_unlocks_choices() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GuessGame::default();
        game.scenario = Some(0);
        game.guess(false);
        assert!(game.choices_locked());
        game.new_round(&mut rng);
        assert!(!game.choices_locked());
    }

    #[test]
    fn test_correct_guess_for_each_scenario() {
        for (i, scenario) in GUESS_SCENARIOS.iter().enumerate() {
            let mut game = GuessGame::default();
            game.scenario = Some(i);
            game.guess(scenario.is_real);
            assert!(game.verdict.unwrap().correct);
        }
    }

    #[test]
    fn test_predict_game_seeds_first_sentence() {
        let game = PredictGame::new();
        assert_eq!(game.sentence, 0);
        assert_eq!(game.sentence_data().start, "The weather today is");
        assert!(game.picked.is_none());
    }

    #[test]
    fn test_predict_best_word() {
        let mut game = PredictGame::new();
        game.predict(0);
        assert_eq!(game.picked_best(), Some(true));
    }

    #[test]
    fn test_predict_other_word_is_not_punitive() {
        let mut game = PredictGame::new();
        game.predict(2);
        assert_eq!(game.picked_best(), Some(false));
        // A further pick is still accepted; selection never locks.
        game.predict(0);
        assert_eq!(game.picked_best(), Some(true));
    }

    #[test]
    fn test_predict_does_not_advance_sentence() {
        let mut game = PredictGame::new();
        game.predict(1);
        assert_eq!(game.sentence, 0);
    }

    #[test]
    fn test_predict_out_of_range_is_ignored() {
        let mut game = PredictGame::new();
        game.predict(3);
        assert!(game.picked.is_none());
    }

    #[test]
    fn test_new_sentence_clears_pick() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = PredictGame::new();
        game.predict(1);
        game.new_sentence(&mut rng);
        assert!(game.picked.is_none());
        assert!(game.sentence < PREDICT_SENTENCES.len());
    }

    #[test]
    fn test_every_sentence_has_its_best_word_as_a_candidate() {
        for sentence in PREDICT_SENTENCES {
            assert!(sentence.words.contains(&sentence.best));
        }
    }

    #[test]
    fn test_variation_game_generate_is_deterministic() {
        let mut game = VariationGame::new();
        assert!(!game.generated);
        game.generate();
        assert!(game.generated);
        assert_eq!(game.input_data().original, "🏠 House");
        // Generating again changes nothing.
        game.generate();
        assert_eq!(game.input, 0);
    }

    #[test]
    fn test_variation_new_input_resets_generated() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = VariationGame::new();
        game.generate();
        game.new_input(&mut rng);
        assert!(!game.generated);
        assert!(game.input < VARIATION_INPUTS.len());
    }

    #[test]
    fn test_seeded_rng_gives_reproducible_rounds() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let mut game_a = GuessGame::default();
        let mut game_b = GuessGame::default();
        for _ in 0..10 {
            game_a.new_round(&mut a);
            game_b.new_round(&mut b);
            assert_eq!(game_a.scenario, game_b.scenario);
        }
    }

    #[test]
    fn test_demo_state_variant_per_topic() {
        assert!(matches!(
            DemoState::for_topic(TopicKey::Gans),
            DemoState::Guess(_)
        ));
        assert!(matches!(
            DemoState::for_topic(TopicKey::Rnns),
            DemoState::Predict(_)
        ));
        assert!(matches!(
            DemoState::for_topic(TopicKey::Vaes),
            DemoState::Variation(_)
        ));
    }
}
