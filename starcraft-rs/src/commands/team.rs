//! Team and player identity command implementations

use anyhow::{Context, Result};
use clap::Subcommand;

use sc2_objects::{Player, Team};

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Compute the identity hash of a team from its members' profile URLs
    Hash {
        /// Battle.net profile URLs of the members, in any order
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Build a player's Battle.net profile URL
    Url {
        /// Player name
        name: String,

        /// Gateway (e.g., "us", "eu", "kr")
        #[arg(short, long, default_value = "us")]
        gateway: String,

        /// Subregion within the gateway
        #[arg(short, long, default_value_t = 1)]
        subregion: u32,

        /// Account id
        #[arg(short, long)]
        uid: u32,
    },
}

pub fn execute(command: TeamCommands) -> Result<()> {
    match command {
        TeamCommands::Hash { urls } => execute_hash(&urls),
        TeamCommands::Url {
            name,
            gateway,
            subregion,
            uid,
        } => execute_url(name, gateway, subregion, uid),
    }
}

/// Rebuild a player from a profile URL of the form
/// `http://{gateway}.battle.net/sc2/en/profile/{uid}/{subregion}/{name}/`
pub fn player_from_profile_url(pid: u8, url: &str) -> Result<Player> {
    let rest = url
        .strip_prefix("http://")
        .with_context(|| format!("Profile URL must start with http://: {}", url))?;
    let (gateway, path) = rest
        .split_once(".battle.net/sc2/en/profile/")
        .with_context(|| format!("Not a Battle.net profile URL: {}", url))?;

    let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    let [uid, subregion, name] = segments.as_slice() else {
        anyhow::bail!("Expected uid/subregion/name in profile URL: {}", url);
    };

    let mut player = Player::new(pid, *name);
    player.gateway = gateway.to_string();
    player.uid = uid
        .parse()
        .with_context(|| format!("Invalid uid in profile URL: {}", url))?;
    player.subregion = subregion
        .parse()
        .with_context(|| format!("Invalid subregion in profile URL: {}", url))?;
    Ok(player)
}

fn execute_hash(urls: &[String]) -> Result<()> {
    let team = Team::new(1).into_ref();

    for (index, url) in urls.iter().enumerate() {
        let pid = u8::try_from(index + 1).context("Too many team members")?;
        let player = player_from_profile_url(pid, url)?.into_ref();
        Team::join(&team, &player);
    }

    log::info!("Hashing team of {} players", team.borrow().len());
    println!("{}", team.borrow().hash());
    Ok(())
}

fn execute_url(name: String, gateway: String, subregion: u32, uid: u32) -> Result<()> {
    let mut player = Player::new(1, name);
    player.gateway = gateway;
    player.subregion = subregion;
    player.uid = uid;

    println!("{}", player.url());
    Ok(())
}
