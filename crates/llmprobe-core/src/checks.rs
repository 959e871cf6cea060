use crate::client::{ChatMessage, ChatRequest, ClientError, EndpointClient, ModelList};
use std::time::Duration;

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(10);
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(15);
const MODELS_TIMEOUT: Duration = Duration::from_secs(10);

/// How many model identifiers the model-listing check prints.
pub const MODEL_PREVIEW_LIMIT: usize = 5;

const ANALYSIS_INSTRUCTION: &str =
    "You are an AI assistant that analyzes conversations and extracts key information.";

const SAMPLE_CONVERSATION: &str = "
User: We need to discuss the project timeline.
Manager: The deadline is next Friday. We should complete the API integration by Wednesday.
User: What about testing?
Manager: Testing should happen Thursday morning.
";

/// Single-turn completion against the fast model.
pub async fn basic_completion(client: &EndpointClient, model: &str) -> bool {
    println!("🧪 Testing basic chat completion...");

    let request = ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(
            "Say 'Hello from the probe!' in exactly 5 words.",
        )],
        temperature: 0.7,
        max_tokens: 50,
    };

    match client.chat_completion(&request, COMPLETION_TIMEOUT).await {
        Ok(response) => match response.content() {
            Some(content) => {
                println!("✅ SUCCESS!");
                println!("Response: {}", content);
                println!("Tokens used: {}", response.usage.total_tokens);
                true
            }
            None => {
                println!("❌ FAILED!");
                println!("Error: response contained no choices");
                false
            }
        },
        Err(err) => {
            report_failure(&err);
            false
        }
    }
}

/// Multi-turn request with a system instruction, the way the endpoint is used
/// for summarizing recorded conversations.
pub async fn conversation_analysis(client: &EndpointClient, model: &str) -> bool {
    println!("\n🧪 Testing conversation analysis...");

    let prompt = format!(
        "Analyze this conversation and provide:\n\
         1. A brief summary (1-2 sentences)\n\
         2. Key action items with deadlines\n\
         3. Main topics discussed\n\n\
         Conversation:\n{}",
        SAMPLE_CONVERSATION
    );

    let request = ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(ANALYSIS_INSTRUCTION),
            ChatMessage::user(prompt),
        ],
        // Lower temperature keeps the analysis output consistent.
        temperature: 0.3,
        max_tokens: 300,
    };

    match client.chat_completion(&request, ANALYSIS_TIMEOUT).await {
        Ok(response) => match response.content() {
            Some(content) => {
                println!("✅ SUCCESS!");
                println!("\n=== Analysis Result ===");
                println!("{}", content);
                println!("\nTokens used: {}", response.usage.total_tokens);
                true
            }
            None => {
                println!("❌ FAILED!");
                println!("Error: response contained no choices");
                false
            }
        },
        Err(err) => {
            report_failure(&err);
            false
        }
    }
}

/// Fetches the model list and prints the first few identifiers.
pub async fn available_models(client: &EndpointClient) -> bool {
    println!("\n🧪 Testing available models endpoint...");

    match client.list_models(MODELS_TIMEOUT).await {
        Ok(list) => {
            println!("✅ SUCCESS!");
            println!("Available models: {} models", list.data.len());
            for id in model_preview(&list) {
                println!("  - {}", id);
            }
            true
        }
        Err(err) => {
            report_failure(&err);
            false
        }
    }
}

pub fn model_preview(list: &ModelList) -> Vec<&str> {
    list.data
        .iter()
        .take(MODEL_PREVIEW_LIMIT)
        .map(|model| model.id.as_str())
        .collect()
}

fn report_failure(err: &ClientError) {
    match err {
        // The server answered: print the status and the body verbatim.
        ClientError::Status { status, body } => {
            println!("Status Code: {}", status.as_u16());
            println!("❌ FAILED!");
            println!("Error: {}", body);
        }
        other => println!("❌ EXCEPTION: {}", other),
    }
}
