use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

/// Reasons an inbound record is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The record does not have exactly three fields. Holds the observed count.
    ArityMismatch(usize),
    /// A field is not a signed integer. Holds the offending field.
    NotAnInteger(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::ArityMismatch(n) => write!(f, "Record must have exactly 3 fields. Actually {} fields.", n),
            ParseError::NotAnInteger(field) => write!(f, "Field {:?} is not an integer.", field),
        }
    }
}

impl Error for ParseError {}

#[derive(Debug)]
pub enum RangeFinderError {
    PortOpen(serialport::Error),
    NotConnected(),
    /// The reader thread has not caught up with the queued commands.
    CommandQueueFull(),
    WriteFailure(io::Error),
    InvalidScanParameter(&'static str, i32),
    ConfigError(String),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for RangeFinderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeFinderError::PortOpen(err) => write!(f, "Failed to open the serial port. Error: {}", err),
            RangeFinderError::NotConnected() => write!(f, "Serial port is not connected"),
            RangeFinderError::CommandQueueFull() => write!(f, "Command queue is full, try again later"),
            RangeFinderError::WriteFailure(err) => write!(f, "Failed to write to the serial port. Error: {}", err),
            RangeFinderError::InvalidScanParameter(name, value) => write!(f, "Custom scan parameter {} = {} is out of range.", name, value),
            RangeFinderError::ConfigError(msg) => write!(f, "Invalid configuration: {}", msg),
            RangeFinderError::IoError(err) => Display::fmt(&err, f),
            RangeFinderError::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for RangeFinderError {}

impl From<io::Error> for RangeFinderError {
    fn from(err: io::Error) -> Self {
        RangeFinderError::IoError(err)
    }
}
impl From<serialport::Error> for RangeFinderError {
    fn from(err: serialport::Error) -> Self {
        RangeFinderError::SerialError(err)
    }
}
impl From<toml::de::Error> for RangeFinderError {
    fn from(err: toml::de::Error) -> Self {
        RangeFinderError::ConfigError(err.to_string())
    }
}
impl From<toml::ser::Error> for RangeFinderError {
    fn from(err: toml::ser::Error) -> Self {
        RangeFinderError::ConfigError(err.to_string())
    }
}
