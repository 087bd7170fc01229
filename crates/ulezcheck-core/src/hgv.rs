//! HGV Direct Vision Standard compliance record.

use serde::Deserialize;

use crate::value::{FieldValue, present};

/// Flat record returned by the DVS `hgv/{vrm}` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HgvComplianceInfo {
    #[serde(default, deserialize_with = "present")]
    pub star_rating: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub is_exempt: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub lez2020: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub is_subject_to_dvs: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub is_evidence_required: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub euro_class_rating: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub country_code: Option<FieldValue>,
    #[serde(default, deserialize_with = "present")]
    pub vehicle_type: Option<FieldValue>,
}
