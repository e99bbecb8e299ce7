pub(crate) const DEFAULT_API_URL: &str = "http://localhost:11434";
pub(crate) const DEFAULT_MODEL_NAME: &str = "llama3";

pub const MAX_SUGGESTIONS: usize = 3;

pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "What were the main challenges?",
    "What's planned for next week?",
    "Is the timeline on track?",
];

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const SERVER_PORT: u16 = 8000;
