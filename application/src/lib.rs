pub mod chat_service;
pub mod triage_service;
