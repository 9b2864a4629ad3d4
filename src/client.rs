use std::time::Duration;

use reqwest::blocking::Response;
use reqwest::{StatusCode, Url};

use crate::error::{QuidError, Result};
use crate::models::{Investor, InvestorDetails};

/// Read-only client for the investor commitments backend. Fetch failures
/// propagate verbatim; there is no retry or caching layer.
pub struct ApiClient {
    base: Url,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| QuidError::Settings(format!("invalid API URL '{base_url}': {e}")))?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { base, http })
    }

    /// `GET /investors/` — all investors with their commitment totals.
    pub fn investors(&self) -> Result<Vec<Investor>> {
        let url = self.join(&[])?;
        let resp = self.get_checked(url)?;
        Ok(resp.json()?)
    }

    /// `GET /investors/{name}` — one investor's commitments, grouped totals
    /// and grand total. The name segment is percent-encoded.
    pub fn investor(&self, name: &str) -> Result<InvestorDetails> {
        let url = self.join(&[name])?;
        let resp = self.http.get(url.clone()).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(QuidError::UnknownInvestor(name.to_string()));
        }
        check_status(&resp, &url)?;
        Ok(resp.json()?)
    }

    fn join(&self, extra: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| QuidError::Settings("API URL cannot be a base".to_string()))?;
            segments.pop_if_empty().push("investors");
            for seg in extra {
                segments.push(seg);
            }
            // The backend serves the list route with a trailing slash.
            if extra.is_empty() {
                segments.push("");
            }
        }
        Ok(url)
    }

    fn get_checked(&self, url: Url) -> Result<Response> {
        let resp = self.http.get(url.clone()).send()?;
        check_status(&resp, &url)?;
        Ok(resp)
    }
}

fn check_status(resp: &Response, url: &Url) -> Result<()> {
    if !resp.status().is_success() {
        return Err(QuidError::Api {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(())
}
