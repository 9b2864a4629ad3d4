use crate::error::{QuidError, Result};
use crate::settings::{load_settings, save_settings};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("API URL: {}", settings.api_url);
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    reqwest::Url::parse(url)
        .map_err(|e| QuidError::Settings(format!("invalid URL '{url}': {e}")))?;
    let mut settings = load_settings();
    settings.api_url = url.trim_end_matches('/').to_string();
    save_settings(&settings)?;
    println!("API URL set to {}", settings.api_url);
    Ok(())
}
