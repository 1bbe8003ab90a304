use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use d4bot::commands::{publish_commands, CommandRouter, RegistrationScope, TextRouter};
use d4bot::core::Config;
use d4bot::features::PresenceRotator;
use d4bot::platform::discord::{raw_invocation, text_message};
use d4bot::platform::SerenityPlatform;

struct Handler {
    router: CommandRouter,
    text_router: TextRouter,
    guild_id: Option<u64>,
    /// Ready fires again on reconnect; sync and rotation happen once per process
    started: AtomicBool,
}

impl Handler {
    fn new(router: CommandRouter, guild_id: Option<u64>) -> Self {
        Self {
            router,
            text_router: TextRouter::new(),
            guild_id,
            started: AtomicBool::new(false),
        }
    }

    fn registration_scope(&self) -> RegistrationScope {
        match self.guild_id {
            Some(guild_id) => RegistrationScope::Guild(guild_id),
            None => RegistrationScope::Global,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let platform = SerenityPlatform::for_channel(&ctx, msg.channel_id);
        self.text_router
            .dispatch(&platform, &text_message(&msg))
            .await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Reconnected; commands already published and presence rotation running");
            return;
        }

        // Guild registration is instant; global may take up to an hour to propagate
        let scope = self.registration_scope();
        match scope {
            RegistrationScope::Guild(guild_id) => {
                info!("🔧 Development mode: Registering commands for guild {guild_id}")
            }
            RegistrationScope::Global => info!("🌍 Production mode: Registering commands globally"),
        }
        if let Err(e) = publish_commands(&*ctx.http, self.router.catalog(), scope).await {
            error!("❌ Failed to register slash commands: {e:#}");
        }

        let sink = ctx.clone();
        tokio::spawn(async move {
            PresenceRotator::standard().run(sink).await;
        });
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                let platform = SerenityPlatform::for_interaction(&ctx, &command);
                self.router
                    .dispatch(&platform, raw_invocation(&command))
                    .await;
            }
            other => debug!("Ignoring interaction of kind {:?}", other.kind()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting DR4GY BOY Discord Bot...");

    let router = CommandRouter::standard()?;
    info!("📋 {} slash commands in catalog", router.catalog().len());

    let handler = Handler::new(router, config.discord_guild_id);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    // Build the Discord client with proper gateway configuration
    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(config.client_id)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Privileged intents (members, message content) not enabled");
        error!("  - Network connectivity issues");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
