use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuestionRequest {
    pub question: String,
    pub session_id: String,
}
