pub mod content;
pub mod demo;
pub mod logger;
pub mod models;
pub mod progress;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use content::{Content, QuizQuestion, Topic};
pub use demo::DemoState;
pub use models::{App, AppState, QuizPhase, Section, TopicKey, TopicSession};
pub use progress::Progress;
pub use session::{action_for_key, apply_action, Action};
pub use ui::{draw_completion_modal, draw_landing, draw_topic};
pub use utils::{parse_hex_color, truncate_to_width};
