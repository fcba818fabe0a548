use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use yoga_client::Client;
use yoga_client::config::{ClientConfig, ConfigError};
use yoga_client::flows::{FlowError, FormMode, Opened, Route, TracingNotifier};
use yoga_client::forms::{LoginForm, RegisterForm, SessionForm};
use yoga_client::net::{ApiError, TeacherApi};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --email/--password or set YOGA_EMAIL/YOGA_PASSWORD")]
    MissingCredentials,
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Flow(#[from] FlowError),
    #[error("redirected to {0}")]
    Redirected(Route),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "yoga-cli", about = "Yoga studio booking API CLI")]
struct Cli {
    #[arg(long, env = "YOGA_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "YOGA_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "YOGA_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account (does not log in).
    Register(RegisterArgs),
    #[command(flatten)]
    Account(AccountCommand),
}

/// Commands that run after logging in.
#[derive(Subcommand, Debug)]
enum AccountCommand {
    Me(MeCommand),
    Sessions(SessionsCommand),
    Teachers(TeachersCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
}

#[derive(Args, Debug)]
struct MeCommand {
    #[command(subcommand)]
    command: MeSubcommand,
}

#[derive(Subcommand, Debug)]
enum MeSubcommand {
    Show,
    Delete,
}

#[derive(Args, Debug)]
struct SessionsCommand {
    #[command(subcommand)]
    command: SessionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SessionsSubcommand {
    List,
    Show { session_id: u64 },
    Create(SessionFields),
    Update {
        session_id: u64,
        #[command(flatten)]
        fields: SessionFields,
    },
    Delete { session_id: u64 },
    Join { session_id: u64 },
    Leave { session_id: u64 },
}

#[derive(Args, Debug)]
struct SessionFields {
    #[arg(long)]
    name: String,
    #[arg(long, help = "Calendar day, YYYY-MM-DD")]
    date: String,
    #[arg(long)]
    teacher_id: u64,
    #[arg(long)]
    description: String,
}

impl SessionFields {
    fn into_form(self) -> SessionForm {
        SessionForm {
            name: self.name,
            date: self.date,
            teacher_id: Some(self.teacher_id),
            description: self.description,
        }
    }
}

#[derive(Args, Debug)]
struct TeachersCommand {
    #[command(subcommand)]
    command: TeachersSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeachersSubcommand {
    List,
    Show { teacher_id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.base_url {
        Some(url) => ClientConfig { base_url: ClientConfig::new(url)?.base_url, ..ClientConfig::from_env()? },
        None => ClientConfig::from_env()?,
    };
    let client = Client::new(&config, Arc::new(TracingNotifier))?;
    let (email, password) = credentials(cli.email, cli.password)?;

    match cli.command {
        Command::Register(args) => {
            let form = RegisterForm { first_name: args.first_name, last_name: args.last_name, email, password };
            let route = client.register().submit(&form).await?;
            println!("registered; next: {route}");
            Ok(())
        }
        Command::Account(command) => {
            client.login().submit(&LoginForm::new(&email, &password)).await?;
            run_logged_in(&client, command).await
        }
    }
}

async fn run_logged_in(client: &Client, command: AccountCommand) -> Result<(), CliError> {
    match command {
        AccountCommand::Me(me) => run_me(client, me).await,
        AccountCommand::Sessions(sessions) => run_sessions(client, sessions).await,
        AccountCommand::Teachers(teachers) => run_teachers(client, teachers).await,
    }
}

fn credentials(email: Option<String>, password: Option<String>) -> Result<(String, String), CliError> {
    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(CliError::MissingCredentials),
    }
}

async fn run_me(client: &Client, me: MeCommand) -> Result<(), CliError> {
    match me.command {
        MeSubcommand::Show => print_json(&client.me().load().await?),
        MeSubcommand::Delete => {
            let route = client.me().delete_account().await?;
            println!("account deleted; next: {route}");
            Ok(())
        }
    }
}

async fn run_sessions(client: &Client, sessions: SessionsCommand) -> Result<(), CliError> {
    let flow = client.sessions();
    match sessions.command {
        SessionsSubcommand::List => print_json(&flow.list().await?),
        SessionsSubcommand::Show { session_id } => print_json(&flow.detail(session_id).await?),
        SessionsSubcommand::Create(fields) => save_session(client, FormMode::Create, fields).await,
        SessionsSubcommand::Update { session_id, fields } => {
            save_session(client, FormMode::Update(session_id), fields).await
        }
        SessionsSubcommand::Delete { session_id } => {
            let route = flow.delete(session_id).await?;
            println!("session deleted; next: {route}");
            Ok(())
        }
        SessionsSubcommand::Join { session_id } => print_json(&flow.participate(session_id).await?),
        SessionsSubcommand::Leave { session_id } => print_json(&flow.un_participate(session_id).await?),
    }
}

async fn save_session(client: &Client, mode: FormMode, fields: SessionFields) -> Result<(), CliError> {
    let flow = client.session_form();
    if let Opened::Redirect(route) = flow.open(mode).await? {
        return Err(CliError::Redirected(route));
    }
    let route = flow.submit(mode, &fields.into_form()).await?;
    println!("session saved; next: {route}");
    Ok(())
}

async fn run_teachers(client: &Client, teachers: TeachersCommand) -> Result<(), CliError> {
    let service = client.teachers();
    match teachers.command {
        TeachersSubcommand::List => print_json(&service.all().await?),
        TeachersSubcommand::Show { teacher_id } => print_json(&service.detail(teacher_id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
