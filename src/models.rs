use serde::Deserialize;

/// One row of the `GET /investors/` list: an investor with the sum of
/// their commitments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: String,
    pub country: String,
    pub total_commitment: f64,
    pub date_added: String,
}

/// A single commitment within an investor's detail record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub amount: f64,
    pub asset_class: String,
    pub date_added: String,
    pub last_updated: String,
}

/// Per-asset-class rollup within an investor's detail record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTotal {
    pub asset_class: String,
    pub total_amount: f64,
    pub number_of_commitments: i64,
}

/// Response body of `GET /investors/{name}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDetails {
    pub assets_totals: Vec<AssetTotal>,
    pub commitments: Vec<Commitment>,
    pub total_amount: f64,
}
