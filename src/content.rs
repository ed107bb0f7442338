use crate::models::TopicKey;
use serde::Deserialize;
use std::collections::HashMap;

/// Static topic content, embedded at compile time so the binary is
/// self-contained. Parsed once at startup and never mutated.
const TOPICS_JSON: &str = include_str!("../content/topics.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: String,
    pub full_name: String,
    /// Accent color as a "#RRGGBB" hex string.
    pub color: String,
    pub tagline: String,
    pub description: String,
    pub how_it_works: Vec<String>,
    pub examples: Vec<String>,
    pub fun_facts: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    pub explanation: String,
}

#[derive(Debug, Clone)]
pub struct Content {
    pub topics: HashMap<TopicKey, Topic>,
}

impl Content {
    pub fn load() -> Result<Content, serde_json::Error> {
        let topics = serde_json::from_str(TOPICS_JSON)?;
        Ok(Content { topics })
    }

    pub fn topic(&self, key: TopicKey) -> Option<&Topic> {
        self.topics.get(&key)
    }

    /// Quiz questions for a topic; empty when the topic is unknown.
    pub fn quiz(&self, key: TopicKey) -> &[QuizQuestion] {
        self.topics
            .get(&key)
            .map(|t| t.quiz.as_slice())
            .unwrap_or(&[])
    }
}
