use std::ops::RangeInclusive;

pub(crate) const CMD_QUICK_SCAN: &str = "-on-q";
pub(crate) const CMD_DEEP_SCAN: &str = "-on-l";
pub(crate) const CMD_CUSTOM_SCAN: &str = "-c";
pub(crate) const CMD_PTU_CONTROL: &str = "h";
pub(crate) const CMD_CALIBRATE: &str = "-cal";
pub(crate) const CMD_HELP: &str = "d";
pub(crate) const LINE_TERMINATOR: &[u8] = b"\r\n";
pub(crate) const FIELD_SEPARATOR: char = ',';
pub(crate) const N_RECORD_FIELDS: usize = 3;
pub(crate) const DEFAULT_PORT_NAME: &str = "/dev/ttyUSB0";
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 10;
pub(crate) const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub(crate) const POINT_CHANNEL_CAPACITY: usize = 1024;
pub(crate) const COMMAND_CHANNEL_CAPACITY: usize = 16;
// Slider ranges of the custom scan console
pub(crate) const AZIMUTH_MIN_RANGE: RangeInclusive<i32> = 30..=155;
pub(crate) const AZIMUTH_MAX_RANGE: RangeInclusive<i32> = 35..=160;
pub(crate) const ELEVATION_MIN_RANGE: RangeInclusive<i32> = -60..=55;
pub(crate) const ELEVATION_MAX_RANGE: RangeInclusive<i32> = -55..=60;
pub(crate) const STEP_RANGE: RangeInclusive<i32> = 5..=200;
pub(crate) const SCAN_FREQUENCY_RANGE: RangeInclusive<i32> = 1..=100;
pub(crate) const SAMPLES_PER_ORIENTATION_RANGE: RangeInclusive<i32> = 3..=10;
pub(crate) const SIMULATOR_SEED: u64 = 12345;
pub(crate) const SIMULATOR_UPPER_BOUND: i32 = 1000;
