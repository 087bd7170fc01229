pub mod agent;
pub mod format;
pub mod hgv;
pub mod report;
pub mod value;
pub mod vehicle;

pub use agent::random_user_agent;
pub use format::{Formatted, Tone, format_value};
pub use hgv::HgvComplianceInfo;
pub use report::{Row, Section, hgv_section, summary, vehicle_section};
pub use value::FieldValue;
pub use vehicle::{Chargeability, VehicleDetails, VehicleLookupRequest, VehicleLookupResponse};
