/// Prompt construction for the AI routes
///
/// Each route renders its inputs into a single text prompt here, keeping
/// handlers free of prompt wording and the [`super::ChatModel`] backends
/// interchangeable.
use serde::{Deserialize, Serialize};

/// One turn of a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user" or "assistant"
    pub role: String,

    /// Message text
    pub content: String,
}

/// Builds the career-coach prompt from a conversation history
///
/// The last message is the current question; earlier messages are rendered
/// as `User:`/`AI:` context lines above it.
pub fn chat_prompt(messages: &[ChatMessage]) -> String {
    let user_message = messages
        .last()
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    let context = messages[..messages.len().saturating_sub(1)]
        .iter()
        .map(|msg| {
            let speaker = if msg.role == "user" { "User" } else { "AI" };
            format!("{}: {}", speaker, msg.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = String::from(
        "You are Career Mantra AI, an expert career coach and mentor. \
         You provide personalized career guidance, resume feedback, interview preparation, \
         career transition advice, and skill development recommendations. \
         Be supportive, professional, insightful, and actionable in your responses. \
         Use a warm, encouraging tone.\n\n",
    );
    if !context.is_empty() {
        prompt.push_str(&context);
        prompt.push('\n');
    }
    prompt.push_str(&format!("User: {}\nAI:", user_message));
    prompt
}

/// Builds the resume-review prompt
///
/// Asks for a JSON object with `score`, `analysis`, and `suggestions`.
pub fn resume_prompt(resume_text: &str) -> String {
    format!(
        "You are an expert resume reviewer. Analyze this resume and return JSON:\n\
         {{\n\
         \x20 \"score\": <0-100>,\n\
         \x20 \"analysis\": \"<strengths and weaknesses>\",\n\
         \x20 \"suggestions\": \"<specific improvements>\"\n\
         }}\n\n\
         Resume content:\n{}",
        resume_text
    )
}

/// Builds the career-roadmap prompt
///
/// Asks for a JSON object with `steps`, `timeline`, and `resources`.
pub fn roadmap_prompt(current_role: &str, target_role: &str, experience: &str, skills: &str) -> String {
    format!(
        "Create a career roadmap from {} to {}. Experience: {}. Skills: {}. Return JSON:\n\
         {{\n\
         \x20 \"steps\": [{{\"title\": \"\", \"description\": \"\", \"actions\": []}}],\n\
         \x20 \"timeline\": \"\",\n\
         \x20 \"resources\": \"\"\n\
         }}",
        current_role, target_role, experience, skills
    )
}
