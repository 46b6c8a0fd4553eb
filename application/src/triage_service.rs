use domain::classifier::{self, ClassificationResult, ResponseKind};
use domain::message::{Message, MessageKind};
use domain::session::ChatSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// One completed local turn: the assistant message that went into the
/// session plus any follow-up prompts to suggest.
pub struct TriageReply {
    pub message: Message,
    pub follow_up: Vec<String>,
}

/// Local turn handler around the rule classifier. Owns the random
/// source so tests can pin reply selection.
pub struct TriageService {
    rng: StdRng,
}

impl TriageService {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn respond(&mut self, session: &mut ChatSession, input: &str) -> TriageReply {
        session.push_patient(input);

        let ClassificationResult {
            response,
            kind,
            follow_up,
        } = classifier::classify_with(input, &mut self.rng);
        debug!(?kind, "classified patient message");

        let message_kind = match kind {
            ResponseKind::Emergency => MessageKind::Emergency,
            _ => MessageKind::Text,
        };
        let message = Message::assistant(response, message_kind);
        session.push(message.clone());

        TriageReply {
            message,
            follow_up: follow_up.unwrap_or_default(),
        }
    }
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new()
    }
}
