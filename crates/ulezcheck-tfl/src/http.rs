//! HTTP client for the TfL vehicle lookup and HGV compliance endpoints.

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use ulezcheck_core::{
    FieldValue, HgvComplianceInfo, VehicleLookupRequest, VehicleLookupResponse,
    random_user_agent,
};

use crate::source::VehicleDataSource;

pub const DEFAULT_VEHICLE_LOOKUP_URL: &str =
    "https://mobileapim.tfl.gov.uk/Prod/unirucCapitaFacade/VRMLookup";
/// The VRM is appended to this as a single path segment.
pub const DEFAULT_HGV_COMPLIANCE_URL: &str = "https://api.tfl.gov.uk/Dvs2/api/hgv";

const SITE_ORIGIN: &str = "https://tfl.gov.uk";
const SITE_REFERER: &str = "https://tfl.gov.uk/";
const JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum TflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty response body")]
    Empty,
    #[error("invalid endpoint URL {0}")]
    Url(String),
}

/// Client for both endpoints. One per invocation.
pub struct TflClient {
    client: reqwest::Client,
    vehicle_lookup_url: Url,
    hgv_compliance_url: Url,
}

impl TflClient {
    /// Client pointed at the public TfL endpoints.
    pub fn new() -> Result<Self, TflError> {
        Self::with_endpoints(DEFAULT_VEHICLE_LOOKUP_URL, DEFAULT_HGV_COMPLIANCE_URL)
    }

    pub fn with_endpoints(
        vehicle_lookup_url: &str,
        hgv_compliance_url: &str,
    ) -> Result<Self, TflError> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, vehicle_lookup_url, hgv_compliance_url)
    }

    /// Use a preconfigured `reqwest` client.
    pub fn with_client(
        client: reqwest::Client,
        vehicle_lookup_url: &str,
        hgv_compliance_url: &str,
    ) -> Result<Self, TflError> {
        Ok(Self {
            client,
            vehicle_lookup_url: parse_endpoint(vehicle_lookup_url)?,
            hgv_compliance_url: parse_endpoint(hgv_compliance_url)?,
        })
    }

    /// Compliance URL for `vrm`, percent-encoded as one path segment.
    pub fn hgv_url(&self, vrm: &str) -> Result<Url, TflError> {
        let mut url = self.hgv_compliance_url.clone();
        url.path_segments_mut()
            .map_err(|()| TflError::Url(self.hgv_compliance_url.to_string()))?
            .pop_if_empty()
            .push(vrm);
        Ok(url)
    }

    /// GET the DVS compliance record for `vrm`.
    pub async fn lookup_hgv_compliance(&self, vrm: &str) -> Result<HgvComplianceInfo, TflError> {
        let url = self.hgv_url(vrm)?;

        debug!(url = %url, "fetching HGV compliance");
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "*/*")
            .header(ORIGIN, SITE_ORIGIN)
            .header(USER_AGENT, random_user_agent())
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TflError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        decode_body(&body)
    }

    /// POST a vehicle lookup for `vrm`.
    pub async fn lookup_vehicle(&self, vrm: &str) -> Result<VehicleLookupResponse, TflError> {
        let url = self.vehicle_lookup_url.clone();

        debug!(url = %url, "fetching vehicle details");
        let resp = self
            .client
            .post(url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .header(ORIGIN, SITE_ORIGIN)
            .header(REFERER, SITE_REFERER)
            .header(USER_AGENT, random_user_agent())
            .json(&VehicleLookupRequest::new(vrm))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TflError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        decode_body(&body)
    }
}

impl VehicleDataSource for TflClient {
    type Error = TflError;

    async fn fetch_hgv_compliance(&self, vrm: &str) -> Result<HgvComplianceInfo, TflError> {
        self.lookup_hgv_compliance(vrm)
            .await
            .inspect_err(|err| warn!(error = %err, "HGV compliance lookup failed"))
    }

    async fn fetch_vehicle_info(&self, vrm: &str) -> Result<VehicleLookupResponse, TflError> {
        self.lookup_vehicle(vrm)
            .await
            .inspect_err(|err| warn!(error = %err, "vehicle lookup failed"))
    }
}

/// Parse a success body. A falsy document (`null`, `{}`, `[]`, `""`, `0`,
/// `false`) carries no data and is [`TflError::Empty`]; any other object
/// counts, whichever keys it has.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, TflError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let truthy = serde_json::from_value::<FieldValue>(value.clone())
        .is_ok_and(|v| v.is_truthy());
    if !truthy {
        return Err(TflError::Empty);
    }
    Ok(serde_json::from_value(value)?)
}

fn parse_endpoint(raw: &str) -> Result<Url, TflError> {
    let url = Url::parse(raw).map_err(|e| TflError::Url(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(TflError::Url(raw.to_string()));
    }
    Ok(url)
}
