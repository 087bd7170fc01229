//! Report assembly: lookup records to labelled, formatted rows.
//!
//! Produces plain data; painting to a terminal happens in the CLI.

use crate::format::{Formatted, Tone, format_value};
use crate::hgv::HgvComplianceInfo;
use crate::value::FieldValue;
use crate::vehicle::{VehicleDetails, VehicleLookupResponse};

/// Shown for keys that are missing outright (as opposed to `null`).
pub const NOT_AVAILABLE: &str = "N/A";

pub const ULEZ_FAIL: &str = "This vehicle does not meet the ULEZ emissions standards.";
pub const ULEZ_PASS: &str = "This vehicle meets the ULEZ emissions standards.";

/// A titled block of report rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

/// One `label: value` line. Rows without a value are sub-headings.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: Option<Formatted>,
}

impl Row {
    fn field(label: &'static str, value: Formatted) -> Self {
        Self {
            label,
            value: Some(value),
        }
    }

    fn heading(label: &'static str) -> Self {
        Self { label, value: None }
    }
}

// ── Field helpers ──

fn plain(value: &Option<FieldValue>) -> Formatted {
    format_value(value.as_ref(), false)
}

fn charge(value: &Option<FieldValue>) -> Formatted {
    format_value(value.as_ref(), true)
}

/// Like [`plain`], but a missing key reads `N/A`.
fn or_na(value: &Option<FieldValue>) -> Formatted {
    match value {
        Some(v) => format_value(Some(v), false),
        None => Formatted::new(NOT_AVAILABLE, Tone::Highlight),
    }
}

// ── Sections ──

/// Build the vehicle section and hand back the details record for the
/// summary.
pub fn vehicle_section(response: &VehicleLookupResponse) -> (Section, VehicleDetails) {
    let details = response.details();
    let charges = details.chargeability();

    let rows = vec![
        Row::field("Vehicle Registration", or_na(&details.registration)),
        Row::field("Make", or_na(&details.make)),
        Row::field("Model", or_na(&details.model)),
        Row::field("Color", or_na(&details.colour)),
        Row::field("Tax Code", or_na(&details.tax_code)),
        Row::heading("Chargeability"),
        Row::field("  - CC Chargeable", charge(&charges.cc_chargeable)),
        Row::field("  - LEZ Chargeable", charge(&charges.lez_chargeable)),
        Row::field("  - ULEZ Chargeable", charge(&charges.ulez_chargeable)),
        Row::field("  - ES Chargeable", charge(&charges.es_chargeable)),
        Row::field("In Auto Pay", plain(&details.in_auto_pay)),
        Row::field("ULEZ Exempt", plain(&details.ulez_exempt)),
        Row::field("ULEZ Vehicle List Type", or_na(&details.ulez_vehicle_list_type)),
        Row::field("ULEZ Non-Chargeable", plain(&details.ulez_non_chargeable)),
    ];

    (
        Section {
            title: "Vehicle Information",
            rows,
        },
        details,
    )
}

pub fn hgv_section(info: &HgvComplianceInfo) -> Section {
    Section {
        title: "HGV Compliance Information",
        rows: vec![
            Row::field("Star Rating", plain(&info.star_rating)),
            Row::field("Is Exempt", plain(&info.is_exempt)),
            Row::field("LEZ 2020", plain(&info.lez2020)),
            Row::field("Is Subject to DVS", plain(&info.is_subject_to_dvs)),
            Row::field("Is Evidence Required", plain(&info.is_evidence_required)),
            Row::field("Euro Class Rating", plain(&info.euro_class_rating)),
            Row::field("Country Code", or_na(&info.country_code)),
            Row::field("Vehicle Type", or_na(&info.vehicle_type)),
        ],
    }
}

/// One-line ULEZ verdict for the vehicle.
pub fn summary(details: &VehicleDetails) -> Formatted {
    if details.is_ulez_chargeable() {
        Formatted::new(ULEZ_FAIL, Tone::Unfavorable)
    } else {
        Formatted::new(ULEZ_PASS, Tone::Favorable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    impl Section {
        fn value(&self, label: &str) -> Option<&Formatted> {
            self.rows
                .iter()
                .find(|r| r.label == label)
                .and_then(|r| r.value.as_ref())
        }
    }

    fn lookup(v: serde_json::Value) -> VehicleLookupResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn vehicle_rows_in_order() {
        let (section, _) = vehicle_section(&VehicleLookupResponse::default());
        let labels: Vec<&str> = section.rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            [
                "Vehicle Registration",
                "Make",
                "Model",
                "Color",
                "Tax Code",
                "Chargeability",
                "  - CC Chargeable",
                "  - LEZ Chargeable",
                "  - ULEZ Chargeable",
                "  - ES Chargeable",
                "In Auto Pay",
                "ULEZ Exempt",
                "ULEZ Vehicle List Type",
                "ULEZ Non-Chargeable",
            ]
        );
        assert!(section.rows[5].value.is_none());
    }

    #[test]
    fn missing_chargeability_renders_none_for_each_flag() {
        let (section, details) = vehicle_section(&lookup(json!({
            "vrmLookupResponse": {"vehicleDetails": {"vRM": "AB12CDE"}}
        })));
        for label in [
            "  - CC Chargeable",
            "  - LEZ Chargeable",
            "  - ULEZ Chargeable",
            "  - ES Chargeable",
        ] {
            assert_eq!(
                section.value(label),
                Some(&Formatted::new("None", Tone::Neutral)),
                "{label}"
            );
        }
        assert_eq!(summary(&details), Formatted::new(ULEZ_PASS, Tone::Favorable));
    }

    #[test]
    fn missing_keys_read_na_but_nulls_read_none() {
        let (section, _) = vehicle_section(&lookup(json!({
            "vrmLookupResponse": {"vehicleDetails": {"make": null}}
        })));
        assert_eq!(
            section.value("Make"),
            Some(&Formatted::new("None", Tone::Neutral))
        );
        assert_eq!(
            section.value("Model"),
            Some(&Formatted::new(NOT_AVAILABLE, Tone::Highlight))
        );
        assert_eq!(
            section.value("In Auto Pay"),
            Some(&Formatted::new("None", Tone::Neutral))
        );
    }

    #[test]
    fn chargeability_flags_use_inverted_polarity() {
        let (section, _) = vehicle_section(&lookup(json!({
            "vrmLookupResponse": {"vehicleDetails": {
                "chargeability": {"isCcChargeable": true, "isUlezChargeable": 0},
                "isULEZExempt": true
            }}
        })));
        assert_eq!(
            section.value("  - CC Chargeable"),
            Some(&Formatted::new("Yes", Tone::Unfavorable))
        );
        assert_eq!(
            section.value("  - ULEZ Chargeable"),
            Some(&Formatted::new("No", Tone::Favorable))
        );
        assert_eq!(
            section.value("ULEZ Exempt"),
            Some(&Formatted::new("Yes", Tone::Favorable))
        );
    }

    #[test]
    fn hgv_section_fields() {
        let info: HgvComplianceInfo = serde_json::from_value(json!({
            "isExempt": true,
            "starRating": 5,
            "lez2020": 0
        }))
        .unwrap();
        let section = hgv_section(&info);
        assert_eq!(section.rows.len(), 8);
        assert_eq!(
            section.value("Star Rating"),
            Some(&Formatted::new("5", Tone::Highlight))
        );
        assert_eq!(
            section.value("Is Exempt"),
            Some(&Formatted::new("Yes", Tone::Favorable))
        );
        assert_eq!(
            section.value("LEZ 2020"),
            Some(&Formatted::new("No", Tone::Unfavorable))
        );
        assert_eq!(
            section.value("Euro Class Rating"),
            Some(&Formatted::new("None", Tone::Neutral))
        );
        assert_eq!(
            section.value("Country Code"),
            Some(&Formatted::new(NOT_AVAILABLE, Tone::Highlight))
        );
    }

    #[test]
    fn summary_follows_ulez_chargeable() {
        let details = |v: serde_json::Value| -> VehicleDetails {
            serde_json::from_value(json!({"chargeability": {"isUlezChargeable": v}})).unwrap()
        };
        assert_eq!(summary(&details(json!(1))), Formatted::new(ULEZ_FAIL, Tone::Unfavorable));
        assert_eq!(summary(&details(json!(0))), Formatted::new(ULEZ_PASS, Tone::Favorable));
        assert_eq!(summary(&VehicleDetails::default()).tone, Tone::Favorable);
    }
}
