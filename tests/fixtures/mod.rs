use report_qa::models::generate::GenerateResponse;

pub const SAMPLE_REPORT: &str = "Week 1: finished module A. Blocked on API access.";
pub const SAMPLE_QUESTION: &str = "What is blocking progress?";

pub fn generate_response(text: &str) -> GenerateResponse {
    GenerateResponse {
        model: "llama3".to_string(),
        response: text.to_string(),
        done: true,
        prompt_eval_count: Some(64),
        eval_count: Some(38),
    }
}

pub fn sample_answer_response() -> GenerateResponse {
    generate_response("Progress is blocked on API access.")
}

pub fn sample_followup_response() -> GenerateResponse {
    generate_response(
        "1. Who can grant the API access?\n2. How long has module A taken?\n3. What is the revised timeline?",
    )
}

pub fn sample_followup_suggestions() -> Vec<String> {
    vec![
        "Who can grant the API access?".to_string(),
        "How long has module A taken?".to_string(),
        "What is the revised timeline?".to_string(),
    ]
}
