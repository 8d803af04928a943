use anyhow::{Context, Result, anyhow};

use crate::client::{ChatCompletionRequest, ChatMessage, ChatMessageRole, OpenAiClient};

use super::prompt::SYSTEM_PROMPT;

/// Single-attempt chat completion call: system persona plus the rendered
/// trip prompt. Returns the first choice's message content.
pub(crate) async fn request_itinerary(
    client: &OpenAiClient,
    prompt: String,
    model: &str,
    max_tokens: u32,
    temperature: f32,
) -> Result<String> {
    let chat_request = ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: ChatMessageRole::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: ChatMessageRole::User,
                content: prompt,
            },
        ],
        max_tokens: Some(max_tokens),
        temperature: Some(temperature),
    };

    let response = client
        .chat_completion(chat_request)
        .await
        .context("Travel plan completion call failed")?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Model returned no choices"))?;

    let content = choice.message.content.trim();
    if content.is_empty() {
        return Err(anyhow!("Model reply contained no content"));
    }

    Ok(content.to_string())
}
