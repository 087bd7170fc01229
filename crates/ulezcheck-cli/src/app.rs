//! Lookup orchestration: HGV check, then vehicle lookup, then report.

use std::io::{self, Write};

use tracing::{debug, info};
use ulezcheck_tfl::VehicleDataSource;

use crate::display;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Full report printed.
    Reported,
    /// HGV lookup failed; the vehicle lookup was skipped.
    InvalidPlate,
    /// Vehicle lookup failed; only the error line was printed.
    VehicleLookupFailed,
}

impl Outcome {
    /// Only an invalid plate is a failure. A failed vehicle lookup has
    /// already been reported on stderr and exits cleanly.
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Reported | Outcome::VehicleLookupFailed => 0,
            Outcome::InvalidPlate => 2,
        }
    }
}

/// Look up `vrm`, writing the report to `out` and lookup errors to `err`.
///
/// The HGV request always finishes before the vehicle request starts, and
/// its failure ends the run without a second request.
pub async fn run<S, W, E>(
    source: &S,
    vrm: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<Outcome>
where
    S: VehicleDataSource,
    W: Write,
    E: Write,
{
    info!(vrm, "checking HGV compliance");
    let hgv = match source.fetch_hgv_compliance(vrm).await {
        Ok(hgv) => hgv,
        Err(e) => {
            debug!(error = %e, "treating HGV failure as invalid plate");
            display::print_invalid_plate(out)?;
            return Ok(Outcome::InvalidPlate);
        }
    };

    info!(vrm, "looking up vehicle");
    let lookup = match source.fetch_vehicle_info(vrm).await {
        Ok(lookup) => Some(lookup),
        Err(e) => {
            display::print_vehicle_error(err, &e)?;
            None
        }
    };
    let Some(details) = display::print_vehicle_info(out, lookup.as_ref())? else {
        return Ok(Outcome::VehicleLookupFailed);
    };
    display::print_hgv_compliance(out, Some(&hgv))?;
    display::print_summary(out, &details)?;

    Ok(Outcome::Reported)
}
