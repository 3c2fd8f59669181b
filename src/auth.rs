use twitch_oauth2::{AccessToken, client::reqwest_http_client, ClientSecret, RefreshToken, UserToken};

use crate::chat::User;
use crate::config::TwitchConfig;

/// Validates the configured user token, refreshing it when Twitch says so
pub async fn load_user_token(config: &TwitchConfig) -> anyhow::Result<UserToken> {
    if config.user_access_token.is_empty() || config.user_refresh_token.is_empty() {
        anyhow::bail!("Can't log in, twitch.user_access_token and twitch.user_refresh_token must be set");
    }

    let user_access_token = AccessToken::new(config.user_access_token.clone());
    let user_refresh_token = RefreshToken::new(config.user_refresh_token.clone());
    let client_secret = ClientSecret::new(config.client_secret.clone());

    let token = UserToken::from_existing(reqwest_http_client, user_access_token, user_refresh_token, client_secret)
        .await
        .map_err(|error| anyhow::anyhow!("Failed to validate user token: {}", error))?;

    log::debug!("Validated user token of '{}'", token.login);

    Ok(token)
}

/// Account the token belongs to. `display_name` comes from the config, the token only knows the login.
pub fn bot_identity(token: &UserToken, display_name: &str) -> User {
    User::new(token.user_id.clone(), token.login.clone(), display_name)
}
