use crate::browser::CommitmentBrowser;
use crate::client::ApiClient;
use crate::error::Result;

pub fn run(name: &str, api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let details = client.investor(name)?;

    let mut browser = CommitmentBrowser::new(
        name.to_string(),
        details.commitments,
        details.assets_totals,
        details.total_amount,
    );
    browser.run()?;
    Ok(())
}
