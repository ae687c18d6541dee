// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use bitsy_client::{
    config::LogFormat,
    gateway::ReqwestTransport,
    models::{now, Account, WebhookType},
    search,
    session::{FileStorage, SessionContext, SessionStore},
    wallet::uncompress_pubkey,
    BitsyApi, BitsyResult, Config, HttpGateway, WalletIdentityService,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// bitsy <3 command line client
#[derive(Debug, Parser)]
#[command(name = "bitsy", version, about = "bitsy <3 command line client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in with the account password
    LoginPassword {
        /// Account password; read from the environment when omitted
        #[arg(long, env = "BITSY_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in by signing the challenge with a key derived from a mnemonic
    LoginMnemonic {
        /// BIP-39 phrase, space separated
        #[arg(long)]
        phrase: String,

        /// Optional BIP-39 passphrase
        #[arg(long)]
        password: Option<String>,
    },

    /// Show the cached session
    Whoami,

    /// Drop the cached session
    Logout,

    /// Register a third party owned by an address
    RegisterThirdParty {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,
    },

    /// Account settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Personal access tokens
    #[command(subcommand)]
    Tokens(TokensCommand),

    /// Third-party webhooks
    #[command(subcommand)]
    Webhooks(WebhooksCommand),

    /// Expand a compressed secp256k1 public key
    UncompressPubkey { pubkey: String },
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// List settings, optionally filtered by key prefix
    List {
        #[arg(long)]
        query: Option<String>,
    },
    /// Flip a boolean setting
    Toggle { key: String },
}

#[derive(Debug, Subcommand)]
enum TokensCommand {
    List,
    /// Issue a new token
    Create {
        #[arg(long)]
        name: String,
    },
    /// Flip the active flag
    Toggle { uuid: String },
    Delete { uuid: String },
}

#[derive(Debug, Subcommand)]
enum WebhooksCommand {
    List,
    /// Register a new webhook
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        endpoint: String,

        #[arg(long = "type", value_enum, default_value_t = WebhookKind::Incoming)]
        kind: WebhookKind,

        #[arg(long)]
        active: bool,
    },
    /// Flip the active flag
    Toggle { uuid: String },
    Delete { uuid: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WebhookKind {
    Incoming,
    Outgoing,
}

impl From<WebhookKind> for WebhookType {
    fn from(kind: WebhookKind) -> Self {
        match kind {
            WebhookKind::Incoming => WebhookType::Incoming,
            WebhookKind::Outgoing => WebhookType::Outgoing,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bitsy: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("bitsy: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(bitsy_client::config::DEFAULT_LOG_FILTER));

    let json = format == LogFormat::Json;
    let result = tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact()
        }))
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false)
        }))
        .try_init();

    if let Err(e) = result {
        eprintln!("bitsy: could not install logger: {e}");
    }
}

async fn run(command: Command, config: &Config) -> BitsyResult<()> {
    let sessions = SessionStore::new(FileStorage::new(&config.session_dir));
    let base_url = config.gateway.base_url()?;
    info!(gateway = %base_url, "Using backend");

    match command {
        Command::LoginPassword { password } => {
            let account = identity(config, sessions)?
                .login_with_password(&password)
                .await?;
            print_account(&account);
        }
        Command::LoginMnemonic { phrase, password } => {
            let account = identity(config, sessions)?
                .login_with_mnemonic(&phrase, password.as_deref())
                .await?;
            print_account(&account);
        }
        Command::Whoami => {
            let session = SessionContext::load(&sessions)?;
            print_account(session.account());
        }
        Command::Logout => {
            sessions.logout()?;
            println!("Logged out");
        }
        Command::RegisterThirdParty { name, address } => {
            let registered = BitsyApi::from_config(&config.gateway)?
                .register_third_party(&name, &address)
                .await?;
            println!(
                "{}  {}  owner {}",
                registered.third_party.uuid, registered.third_party.name, registered.account.address
            );
        }
        Command::Settings(command) => {
            let session = SessionContext::load(&sessions)?;
            let api = BitsyApi::from_config(&config.gateway)?;
            match command {
                SettingsCommand::List { query } => {
                    let settings = api.list_settings(&session).await?;
                    for setting in search::filter(&settings, query.as_deref().unwrap_or("")) {
                        println!(
                            "{:<28} {:<5}  {}",
                            setting.key,
                            setting.value,
                            setting.description().unwrap_or("")
                        );
                    }
                }
                SettingsCommand::Toggle { key } => {
                    let setting = api.toggle_setting(&session, &key).await?;
                    println!("{} = {}", setting.key, setting.value);
                }
            }
        }
        Command::Tokens(command) => {
            let session = SessionContext::load(&sessions)?;
            let api = BitsyApi::from_config(&config.gateway)?;
            match command {
                TokensCommand::List => {
                    let at = now();
                    for token in api.list_access_tokens(&session).await? {
                        let state = if token.is_usable(at) { "usable" } else { "inactive" };
                        println!("{}  {:<24} {}", token.uuid, token.name, state);
                    }
                }
                TokensCommand::Create { name } => {
                    let token = api.create_access_token(&session, &name).await?;
                    println!("{}  {}", token.uuid, token.name);
                }
                TokensCommand::Toggle { uuid } => {
                    let token = api.toggle_access_token(&session, &uuid).await?;
                    println!("{} active = {}", token.uuid, token.active);
                }
                TokensCommand::Delete { uuid } => {
                    api.delete_access_token(&session, &uuid).await?;
                    println!("Deleted {uuid}");
                }
            }
        }
        Command::Webhooks(command) => {
            let session = SessionContext::load(&sessions)?;
            let api = BitsyApi::from_config(&config.gateway)?;
            match command {
                WebhooksCommand::List => {
                    for webhook in api.list_webhooks(&session).await? {
                        println!(
                            "{}  {:<24} {:?}  {}  active = {}",
                            webhook.uuid, webhook.name, webhook.kind, webhook.endpoint, webhook.active
                        );
                    }
                }
                WebhooksCommand::Create {
                    name,
                    endpoint,
                    kind,
                    active,
                } => {
                    let webhook = api
                        .create_webhook(&session, &name, kind.into(), &endpoint, active)
                        .await?;
                    println!("{}  {}  active = {}", webhook.uuid, webhook.name, webhook.active);
                }
                WebhooksCommand::Toggle { uuid } => {
                    let webhook = api.toggle_webhook(&session, &uuid).await?;
                    println!("{} active = {}", webhook.uuid, webhook.active);
                }
                WebhooksCommand::Delete { uuid } => {
                    api.delete_webhook(&session, &uuid).await?;
                    println!("Deleted {uuid}");
                }
            }
        }
        Command::UncompressPubkey { pubkey } => {
            println!("0x{}", alloy::primitives::hex::encode(uncompress_pubkey(&pubkey)?));
        }
    }

    Ok(())
}

fn identity(
    config: &Config,
    sessions: SessionStore,
) -> BitsyResult<WalletIdentityService<ReqwestTransport>> {
    Ok(WalletIdentityService::new(
        HttpGateway::from_config(&config.gateway)?,
        sessions,
    ))
}

fn print_account(account: &Account) {
    println!("address    {}", account.address);
    if let Some(pubkey) = &account.pubkey {
        println!("pubkey     {pubkey}");
    }
    println!("created_at {}", account.created_at);
}
