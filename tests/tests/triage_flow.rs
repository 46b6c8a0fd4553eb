use application::triage_service::TriageService;
use domain::classifier::{
    self, Category, EMERGENCY_RESPONSES, FEVER_RESPONSES, GENERAL_RESPONSES, GREETING_RESPONSES,
    HEADACHE_RESPONSES,
};
use domain::message::Sender;
use domain::session::ChatSession;

#[test]
fn emergency_has_absolute_priority() {
    // Emergency phrases win even when a greeting word is present.
    for input in [
        "I have chest pain and also say hi",
        "hello, I think he's choking",
        "hey, she can't breathe",
    ] {
        assert_eq!(classifier::categorize(input), Category::Emergency);
    }
}

#[test]
fn a_conversation_accumulates_alternating_turns() {
    let mut triage = TriageService::with_seed(11);
    let mut session = ChatSession::new();

    triage.respond(&mut session, "hi there");
    triage.respond(&mut session, "I have a fever and a headache");
    triage.respond(&mut session, "what should I eat?");

    assert_eq!(session.len(), 6);
    for (index, message) in session.history.iter().enumerate() {
        let expected = if index % 2 == 0 {
            Sender::Patient
        } else {
            Sender::Assistant
        };
        assert_eq!(message.sender, expected);
    }

    // Fever is checked before headache, so the combined complaint draws
    // from the fever bank.
    assert!(GREETING_RESPONSES.contains(&session.history[1].content.as_str()));
    assert!(FEVER_RESPONSES.contains(&session.history[3].content.as_str()));
    assert!(GENERAL_RESPONSES.contains(&session.history[5].content.as_str()));
}

#[test]
fn every_reply_comes_from_a_known_bank() {
    let mut triage = TriageService::new();
    let mut session = ChatSession::new();
    let banks = [
        GREETING_RESPONSES,
        EMERGENCY_RESPONSES,
        FEVER_RESPONSES,
        HEADACHE_RESPONSES,
        GENERAL_RESPONSES,
    ];

    for input in ["hello", "stroke", "chills", "migraine", "", "vaccines?"] {
        let reply = triage.respond(&mut session, input);
        let known = banks
            .iter()
            .any(|bank| bank.contains(&reply.message.content.as_str()));
        assert!(known, "reply not drawn from any bank: {}", reply.message.content);
    }
}

#[test]
fn emergency_turns_never_suggest_follow_ups() {
    let mut triage = TriageService::with_seed(3);
    let mut session = ChatSession::new();

    let reply = triage.respond(&mut session, "possible overdose");
    assert!(reply.message.is_emergency());
    assert!(reply.follow_up.is_empty());

    let reply = triage.respond(&mut session, "hello again");
    assert!(!reply.message.is_emergency());
    assert!(!reply.follow_up.is_empty());
}

#[test]
fn helper_follow_ups_default_for_unknown_kinds() {
    assert_eq!(
        classifier::follow_ups_for("unknown-category"),
        classifier::follow_ups_for("general")
    );
    assert_ne!(
        classifier::follow_ups_for("symptom"),
        classifier::follow_ups_for("general")
    );
}
