use std::fmt;
use std::future::Future;

use ulezcheck_core::{HgvComplianceInfo, VehicleLookupResponse};

/// Where lookups come from.
///
/// One attempt per call. Any transport error, error status, or empty body
/// is an `Err`; callers decide what to show for it.
pub trait VehicleDataSource {
    type Error: fmt::Display;

    /// DVS compliance record for `vrm`. An error doubles as "not a valid plate".
    fn fetch_hgv_compliance(
        &self,
        vrm: &str,
    ) -> impl Future<Output = Result<HgvComplianceInfo, Self::Error>>;

    /// Vehicle lookup for `vrm`.
    fn fetch_vehicle_info(
        &self,
        vrm: &str,
    ) -> impl Future<Output = Result<VehicleLookupResponse, Self::Error>>;
}
