//! Sign a staff token for a GitHub account id.
//!
//! Usage: `mint-token <github-id> [display-name]`. Reads `JWT_*` settings
//! from the environment (or `.env`) the same way the server does.

use anyhow::Context;
use demobots_dashboard::{auth::dto::JwtKeys, config::JwtConfig};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let github_id = args
        .next()
        .context("usage: mint-token <github-id> [display-name]")?;
    let name = args.next();

    let keys = JwtKeys::from_config(&JwtConfig::from_env()?);
    let token = keys.sign(&github_id, name)?;
    println!("{token}");
    Ok(())
}
