//! Terminal rendering for lookup reports.
//!
//! Each tone maps to one bright colour; `colored` drops the styling when
//! stdout is not a terminal or `NO_COLOR` is set.

use std::fmt;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use ulezcheck_core::{
    Formatted, HgvComplianceInfo, Section, Tone, VehicleDetails, VehicleLookupResponse,
    hgv_section, summary, vehicle_section,
};

pub const INVALID_PLATE: &str = "The entered license plate is not valid.";

pub fn paint(value: &Formatted) -> ColoredString {
    let text = value.text.as_str();
    match value.tone {
        Tone::Neutral => text.bright_yellow(),
        Tone::Favorable => text.bright_green(),
        Tone::Unfavorable => text.bright_red(),
        Tone::Highlight => text.bright_magenta(),
    }
}

fn print_section(out: &mut impl Write, section: &Section) -> io::Result<()> {
    writeln!(out, "{}", format!("{}:", section.title).cyan())?;
    for row in &section.rows {
        let label = format!("{}:", row.label).white();
        match &row.value {
            Some(value) => writeln!(out, "{label} {}", paint(value))?,
            None => writeln!(out, "{label}")?,
        }
    }
    writeln!(out)
}

/// Print the vehicle section. Returns the details record for the summary,
/// or `None` (printing nothing) when there is no lookup.
pub fn print_vehicle_info(
    out: &mut impl Write,
    lookup: Option<&VehicleLookupResponse>,
) -> io::Result<Option<VehicleDetails>> {
    let Some(lookup) = lookup else {
        return Ok(None);
    };
    let (section, details) = vehicle_section(lookup);
    print_section(out, &section)?;
    Ok(Some(details))
}

pub fn print_hgv_compliance(
    out: &mut impl Write,
    info: Option<&HgvComplianceInfo>,
) -> io::Result<()> {
    match info {
        Some(info) => print_section(out, &hgv_section(info)),
        None => Ok(()),
    }
}

pub fn print_summary(out: &mut impl Write, details: &VehicleDetails) -> io::Result<()> {
    writeln!(out, "{}", paint(&summary(details)))
}

pub fn print_invalid_plate(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} {INVALID_PLATE}", "Warning:".bright_red())
}

/// One uncoloured line for a failed vehicle lookup.
pub fn print_vehicle_error(err: &mut impl Write, cause: &impl fmt::Display) -> io::Result<()> {
    writeln!(err, "Error fetching vehicle information: {cause}")
}
