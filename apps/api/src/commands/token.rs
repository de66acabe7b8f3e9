use anyhow::{Context, Result};
use colored::Colorize;

use crate::auth::JwtService;
use crate::config::Config;
use crate::store::CareersStore;

pub async fn run(
    store: &dyn CareersStore,
    config: &Config,
    username: &str,
    email: Option<&str>,
    ttl_hours: i64,
) -> Result<()> {
    let email = email
        .map(str::to_string)
        .unwrap_or_else(|| format!("{username}@example.com"));
    let (recruiter, created) = store.get_or_create_recruiter(username, &email).await?;
    if created {
        println!("{}", format!("Created recruiter: {username}").green());
    }

    let jwt = JwtService::new(&config.jwt_secret, config.jwt_issuer.clone());
    let token = jwt
        .create_token(recruiter.id, &recruiter.username, chrono::Duration::hours(ttl_hours))
        .context("could not sign token")?;

    println!("{}", format!("Bearer token for {username} (valid {ttl_hours}h):").bold());
    println!("{token}");
    Ok(())
}
