//! CLI for Topicast
//!
//! Subcommands:
//! - `serve`: run the UDP broker
//! - `register`: register this host for a set of topics (useful for smoke tests)

use std::time::Duration;

use clap::Parser;
use tokio::net::UdpSocket;
use tracing::{error, info};

use topicast::broker::Broker;
use topicast::broker::register::format_topics;
use topicast::config::{LoggingSettings, Settings, load_config};
use topicast::handlers::builtin;
use topicast::message::{Message, MessageType};
use topicast::transport::{BUFFER_SIZE, Server};
use topicast::utils::logging;

#[derive(Parser)]
#[command(name = "topicast")]
enum Command {
    /// Start the UDP broker
    Serve,
    /// Send a REGISTER message and print the acknowledgment
    Register {
        /// Broker address (default: 127.0.0.1:10001)
        #[arg(long, default_value = "127.0.0.1:10001")]
        server: String,
        /// Comma-separated topics to subscribe to
        #[arg(long, value_delimiter = ',', required = true)]
        topics: Vec<String>,
        /// How long to wait for the acknowledgment, in milliseconds
        #[arg(long, default_value_t = 2000)]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cmd = Command::parse();

    match cmd {
        Command::Serve => {
            if let Err(e) = run_server().await {
                logging::init(&Settings::default().logging);
                error!("Server failed: {}", e);
                std::process::exit(1);
            }
        }
        Command::Register {
            server,
            topics,
            timeout_ms,
        } => {
            logging::init(&LoggingSettings {
                level: "warn".to_string(),
            });
            if let Err(e) = run_register(&server, &topics, timeout_ms).await {
                error!("Registration failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init(&config.logging);

    let mut broker = Broker::new();
    if config.broker.reply_to_ping {
        broker.register_handler(MessageType::PING, builtin::pong)?;
    }

    let mut server = Server::from_settings(&config, broker)?;
    server.bind().await?;

    tokio::select! {
        res = server.listen() => {
            res?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}

async fn run_register(
    server: &str,
    topics: &[String],
    timeout_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    let register = Message::new(MessageType::REGISTER, format_topics(topics));
    socket.send_to(&register.encode()?, server).await?;

    let mut buf = vec![0u8; BUFFER_SIZE];
    let (len, _) =
        tokio::time::timeout(Duration::from_millis(timeout_ms), socket.recv_from(&mut buf)).await??;

    let reply = Message::decode(&buf[..len])?;
    if !reply.verify_integrity() {
        return Err("acknowledgment failed its integrity check".into());
    }
    println!("{}: {}", reply.msg_type(), reply.payload());

    Ok(())
}
