//! Vehicle lookup request body and response records.

use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, lenient, present};

/// Country code sent with every lookup.
pub const LOOKUP_COUNTRY: &str = "UK";

/// POST body for the vehicle lookup endpoint:
/// `{"vrmLookupRequest": {"vRM": ..., "country": "UK", "date": {}}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLookupRequest {
    pub vrm_lookup_request: LookupRequestBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupRequestBody {
    #[serde(rename = "vRM")]
    pub vrm: String,
    pub country: String,
    pub date: serde_json::Map<String, serde_json::Value>,
}

impl VehicleLookupRequest {
    /// Build a lookup for `vrm`, passed through verbatim.
    pub fn new(vrm: &str) -> Self {
        Self {
            vrm_lookup_request: LookupRequestBody {
                vrm: vrm.to_string(),
                country: LOOKUP_COUNTRY.to_string(),
                date: serde_json::Map::new(),
            },
        }
    }
}

/// Top-level vehicle lookup response. Only `vrmLookupResponse` is read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLookupResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub vrm_lookup_response: Option<VrmLookupResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VrmLookupResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub vehicle_details: Option<VehicleDetails>,
}

impl VehicleLookupResponse {
    /// The nested `vehicleDetails` record, or an all-absent one.
    pub fn details(&self) -> VehicleDetails {
        self.vrm_lookup_response
            .as_ref()
            .and_then(|r| r.vehicle_details.clone())
            .unwrap_or_default()
    }
}

/// Per-vehicle record from `vrmLookupResponse.vehicleDetails`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleDetails {
    #[serde(rename = "vRM", default, deserialize_with = "present")]
    pub registration: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub make: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub model: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub colour: Option<FieldValue>,
    #[serde(rename = "taxCode", default, deserialize_with = "present")]
    pub tax_code: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub chargeability: Option<Chargeability>,
    #[serde(rename = "inAutoPay", default, deserialize_with = "present")]
    pub in_auto_pay: Option<FieldValue>,
    #[serde(rename = "isULEZExempt", default, deserialize_with = "present")]
    pub ulez_exempt: Option<FieldValue>,
    #[serde(rename = "uLEZVehicleListType", default, deserialize_with = "present")]
    pub ulez_vehicle_list_type: Option<FieldValue>,
    #[serde(rename = "isULEZNonChargeable", default, deserialize_with = "present")]
    pub ulez_non_chargeable: Option<FieldValue>,
}

/// Zone charge flags. `true` (or `1`) means a charge applies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Chargeability {
    #[serde(rename = "isCcChargeable", default, deserialize_with = "present")]
    pub cc_chargeable: Option<FieldValue>,
    #[serde(rename = "isLezChargeable", default, deserialize_with = "present")]
    pub lez_chargeable: Option<FieldValue>,
    #[serde(rename = "isUlezChargeable", default, deserialize_with = "present")]
    pub ulez_chargeable: Option<FieldValue>,
    #[serde(rename = "isEsChargeable", default, deserialize_with = "present")]
    pub es_chargeable: Option<FieldValue>,
}

impl VehicleDetails {
    /// Chargeability flags, all absent when the object is missing.
    pub fn chargeability(&self) -> Chargeability {
        self.chargeability.clone().unwrap_or_default()
    }

    /// Whether a ULEZ charge applies. Missing or `null` counts as no charge.
    pub fn is_ulez_chargeable(&self) -> bool {
        self.chargeability
            .as_ref()
            .and_then(|c| c.ulez_chargeable.as_ref())
            .is_some_and(FieldValue::is_truthy)
    }
}
