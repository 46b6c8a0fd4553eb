use domain::message::MessageKind;
use domain::session::ChatSession;
use infrastructure::backend_client::BackendClient;
use shared::types::Result;

/// Remote turn handler: forwards each patient message to the backend
/// chat endpoint and mirrors both sides into the session history.
pub struct ChatService {
    client: BackendClient,
}

impl ChatService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Open the backend session and record its greeting.
    pub async fn init_session(&self, session: &mut ChatSession) -> Result<String> {
        let greeting = self.client.init_session(&session.id).await?;
        session.push_assistant(&greeting, MessageKind::Text);
        Ok(greeting)
    }

    pub async fn send(&self, session: &mut ChatSession, input: &str) -> Result<String> {
        session.push_patient(input);
        let reply = self.client.send_message(&session.id, input).await?;
        session.push_assistant(&reply, MessageKind::Text);
        Ok(reply)
    }
}
