use application::chat_service::ChatService;
use application::triage_service::{TriageReply, TriageService};
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::classifier::DISCLAIMER;
use domain::session::ChatSession;
use infrastructure::backend_client::BackendClient;
use infrastructure::config::Config;
use shared::telemetry::TurnTimer;
use shared::types::Result;
use tracing::debug;

const WELCOME: &str = "Hello! I'm HealthTalk, your AI medical companion. I can help you understand symptoms, provide general health guidance, and determine when you should seek professional medical care.\n\nPlease remember that I provide general information only and cannot replace professional medical advice. For emergencies, always call 911 immediately.\n\nHow can I help you today?";

#[derive(Parser)]
#[command(name = "healthtalk")]
#[command(about = "Terminal chat client for the HealthTalk medical assistant")]
pub struct Cli {
    /// Forward turns to the remote chat backend instead of answering locally
    #[arg(long)]
    pub remote: bool,

    /// Pin the reply-selection RNG (local mode only)
    #[arg(long)]
    pub seed: Option<u64>,

    /// One-shot message; when empty, enters interactive chat
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub struct CliApp {
    session: ChatSession,
}

impl CliApp {
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(),
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        let message = cli.args.join(" ");
        debug!(session_id = %self.session.id, remote = cli.remote, "starting chat client");

        if cli.remote {
            if message.trim().is_empty() {
                self.run_remote_chat().await
            } else {
                self.run_remote_one_shot(&message).await
            }
        } else {
            let mut triage = match cli.seed {
                Some(seed) => TriageService::with_seed(seed),
                None => TriageService::new(),
            };
            if message.trim().is_empty() {
                self.run_local_chat(&mut triage)
            } else {
                self.run_local_one_shot(&mut triage, &message)
            }
        }
    }

    fn print_reply(reply: &TriageReply, timer: &TurnTimer) {
        if reply.message.is_emergency() {
            println!("\n{}", reply.message.content.red().bold());
        } else {
            println!("\n{}", reply.message.content);
        }
        if !reply.follow_up.is_empty() {
            println!("\n{}", "You could tell me:".cyan());
            for question in &reply.follow_up {
                println!("  {} {}", "-".cyan(), question);
            }
        }
        println!("{}", format!("({} ms)", timer.elapsed_millis()).dimmed());
    }

    fn print_banner() {
        println!("{}", WELCOME.green());
        println!("\n{}", DISCLAIMER.dimmed());
        println!("{}", "Type 'exit' to quit.".yellow());
    }

    fn run_local_chat(&mut self, triage: &mut TriageService) -> Result<()> {
        Self::print_banner();
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                break;
            }

            let timer = TurnTimer::start();
            let reply = triage.respond(&mut self.session, input);
            Self::print_reply(&reply, &timer);
        }
        Ok(())
    }

    fn run_local_one_shot(&mut self, triage: &mut TriageService, message: &str) -> Result<()> {
        let timer = TurnTimer::start();
        let reply = triage.respond(&mut self.session, message);
        Self::print_reply(&reply, &timer);
        Ok(())
    }

    fn remote_service(&self) -> Result<ChatService> {
        let config = Config::load();
        let client = BackendClient::new(&config)?;
        Ok(ChatService::new(client))
    }

    async fn run_remote_chat(&mut self) -> Result<()> {
        let service = self.remote_service()?;
        let greeting = service.init_session(&mut self.session).await?;
        println!("{}", greeting.green());
        println!("{}", "Type 'exit' to quit.".yellow());

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                break;
            }

            let timer = TurnTimer::start();
            match service.send(&mut self.session, input).await {
                Ok(reply) => {
                    println!("\n{}", reply);
                    println!("{}", format!("({} ms)", timer.elapsed_millis()).dimmed());
                }
                Err(err) => {
                    println!("{}", format!("Backend unavailable: {err}").red());
                }
            }
        }
        Ok(())
    }

    async fn run_remote_one_shot(&mut self, message: &str) -> Result<()> {
        let service = self.remote_service()?;
        let reply = service.send(&mut self.session, message).await?;
        println!("{}", reply);
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
