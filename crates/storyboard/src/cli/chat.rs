//! Interactive assistant chat.

use storyboard::{
    ConversationSession, GeminiClient, QUIT_COMMAND, StoryboardConfig, StoryboardResult,
    chat_over_lines,
};
use tokio::io::BufReader;

/// Chat over stdin and stdout until end of input or `/quit`.
pub async fn run_chat(config: &StoryboardConfig) -> StoryboardResult<()> {
    let client = GeminiClient::new(config.gemini.clone())?;
    let session = ConversationSession::new(client, config.assistant.clone());

    eprintln!(
        "Chatting with {} (type {} to leave)",
        session.config().model,
        QUIT_COMMAND
    );

    let mut stdout = tokio::io::stdout();
    chat_over_lines(&session, BufReader::new(tokio::io::stdin()), &mut stdout).await
}
