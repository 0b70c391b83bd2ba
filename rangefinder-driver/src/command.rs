use crate::constants::{
    AZIMUTH_MAX_RANGE, AZIMUTH_MIN_RANGE, CMD_CALIBRATE, CMD_CUSTOM_SCAN, CMD_DEEP_SCAN,
    CMD_HELP, CMD_PTU_CONTROL, CMD_QUICK_SCAN, ELEVATION_MAX_RANGE, ELEVATION_MIN_RANGE,
    LINE_TERMINATOR, SAMPLES_PER_ORIENTATION_RANGE, SCAN_FREQUENCY_RANGE, STEP_RANGE,
};
use crate::error::RangeFinderError;
use rangefinder_data::CustomScanParams;
use std::fmt;
use std::ops::RangeInclusive;

/// Commands understood by the instrument's microcontroller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanCommand {
    QuickScan,
    DeepScan,
    /// Puts the firmware in custom scan mode, parameters follow separately.
    CustomScan,
    PtuControl,
    Calibrate,
    Help,
    CustomScanParameters(CustomScanParams),
    /// Free text typed on the console, always sent with `\r\n`.
    Raw(String),
}

impl fmt::Display for ScanCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanCommand::QuickScan => f.write_str(CMD_QUICK_SCAN),
            ScanCommand::DeepScan => f.write_str(CMD_DEEP_SCAN),
            ScanCommand::CustomScan => f.write_str(CMD_CUSTOM_SCAN),
            ScanCommand::PtuControl => f.write_str(CMD_PTU_CONTROL),
            ScanCommand::Calibrate => f.write_str(CMD_CALIBRATE),
            ScanCommand::Help => f.write_str(CMD_HELP),
            ScanCommand::CustomScanParameters(p) => write!(
                f,
                "-a={},{}-e={},{}-s{}.",
                p.azimuth_min, p.azimuth_max, p.elevation_min, p.elevation_max, p.step
            ),
            ScanCommand::Raw(text) => f.write_str(text),
        }
    }
}

/// Bytes written to the serial port for `command`.
///
/// Fixed and parameter commands go out bare unless `terminate` is set.
pub fn encode(command: &ScanCommand, terminate: bool) -> Vec<u8> {
    let mut data = command.to_string().into_bytes();
    if terminate || matches!(command, ScanCommand::Raw(_)) {
        data.extend_from_slice(LINE_TERMINATOR);
    }
    data
}

/// Checks custom scan parameters against the ranges of the console sliders.
pub fn validate_custom_scan(params: &CustomScanParams) -> Result<(), RangeFinderError> {
    check_range("azimuth_min", params.azimuth_min, &AZIMUTH_MIN_RANGE)?;
    check_range("azimuth_max", params.azimuth_max, &AZIMUTH_MAX_RANGE)?;
    check_range("elevation_min", params.elevation_min, &ELEVATION_MIN_RANGE)?;
    check_range("elevation_max", params.elevation_max, &ELEVATION_MAX_RANGE)?;
    check_range("step", params.step, &STEP_RANGE)?;
    check_range("scan_frequency", params.scan_frequency, &SCAN_FREQUENCY_RANGE)?;
    check_range(
        "samples_per_orientation",
        params.samples_per_orientation,
        &SAMPLES_PER_ORIENTATION_RANGE,
    )?;
    if params.azimuth_min > params.azimuth_max {
        return Err(RangeFinderError::InvalidScanParameter(
            "azimuth_min",
            params.azimuth_min,
        ));
    }
    if params.elevation_min > params.elevation_max {
        return Err(RangeFinderError::InvalidScanParameter(
            "elevation_min",
            params.elevation_min,
        ));
    }
    Ok(())
}

fn check_range(
    name: &'static str,
    value: i32,
    range: &RangeInclusive<i32>,
) -> Result<(), RangeFinderError> {
    match range.contains(&value) {
        true => Ok(()),
        false => Err(RangeFinderError::InvalidScanParameter(name, value)),
    }
}
