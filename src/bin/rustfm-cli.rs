use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use rustfm::{ApiClient, Credentials, Params, Scrobble, ScrobbleBatch, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rustfm-cli")]
#[command(about = "CLI for rustfm - Last.fm API client", long_about = None)]
struct Cli {
    /// Last.fm API key
    #[arg(long, env = "LASTFM_API_KEY")]
    api_key: String,

    /// Last.fm shared secret
    #[arg(long, env = "LASTFM_SHARED_SECRET", hide_env_values = true)]
    secret: String,

    /// Session key for write calls
    #[arg(long, env = "LASTFM_SESSION_KEY", hide_env_values = true)]
    session_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL a user must visit to authorize this application
    AuthUrl {
        /// Callback URL
        callback: String,
    },
    /// Exchange an authorized token for a session key
    Session {
        /// Token returned to the callback
        token: String,
    },
    /// Show artist information
    Artist {
        /// Artist name
        name: String,
    },
    /// List similar artists
    Similar {
        /// Artist name
        name: String,

        /// Limit results
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Scrobble one play (needs a session key)
    Scrobble {
        /// Artist name
        artist: String,

        /// Track title
        track: String,

        #[arg(long)]
        album: Option<String>,

        /// Unix timestamp of the play; defaults to now
        #[arg(long)]
        timestamp: Option<i64>,
    },
    /// Print the signed parameters of a call without sending it
    Sign {
        /// API method, e.g. artist.addTags
        method: String,

        /// Parameters as key=value
        params: Vec<String>,
    },
}

fn parse_params(raw: &[String]) -> Result<Params, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("expected key=value, got '{}'", pair))
        })
        .collect()
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(Credentials::new(cli.api_key, cli.secret)?)?;
    let session = cli
        .session_key
        .map(|key| Session::new("", key, 0));

    match &cli.command {
        Commands::AuthUrl { callback } => {
            println!("{}", client.auth().get_auth_url(callback));
        }
        Commands::Session { token } => {
            let session = client.auth().get_session(token).await?;
            println!("User:        {}", session.name);
            println!("Session key: {}", session.key);
        }
        Commands::Artist { name } => {
            let artist = client.artist().get_info(name).await?;
            println!("{}", artist.name);
            println!("   Listeners: {}", artist.listeners);
            println!("   Plays:     {}", artist.playcount);
            if !artist.tags.is_empty() {
                println!("   Tags:      {}", artist.tag_names().join(", "));
            }
            if let Some(url) = &artist.url {
                println!("   {}", url);
            }
        }
        Commands::Similar { name, limit } => {
            let similar = client.artist().get_similar(name, Some(*limit)).await?;
            for (i, artist) in similar.iter().enumerate() {
                println!(
                    "{}. {} ({:.2})",
                    i + 1,
                    artist.name,
                    artist.match_score.unwrap_or_default()
                );
            }
        }
        Commands::Scrobble {
            artist,
            track,
            album,
            timestamp,
        } => {
            let session = session.ok_or("a session key is required to scrobble")?;
            let mut scrobble = Scrobble::new(artist, track, timestamp.unwrap_or_else(now));
            if let Some(album) = album {
                scrobble = scrobble.with_album(album);
            }
            let batch = ScrobbleBatch::new().with(scrobble)?;
            let result = client.track().scrobble(&batch, &session).await?;
            println!(
                "✅ Accepted: {}, ignored: {}",
                result.accepted, result.ignored
            );
        }
        Commands::Sign { method, params } => {
            let params = parse_params(params)?;
            for (key, value) in client.prepare_signed(method, params, session.as_ref())? {
                println!("{}={}", key, value);
            }
        }
    }

    Ok(())
}
