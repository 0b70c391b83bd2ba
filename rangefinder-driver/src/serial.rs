use crate::command::{encode, ScanCommand};
use crate::error::RangeFinderError;
use log::{debug, info};
use serialport::SerialPort;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

pub(crate) fn open_port(
    port_name: &str,
    baud_rate: u32,
    timeout: Duration,
) -> Result<Box<dyn SerialPort>, RangeFinderError> {
    let port = serialport::new(port_name, baud_rate)
        .timeout(timeout)
        .open()
        .map_err(RangeFinderError::PortOpen)?;
    info!(target: "rangefinder::serial", "Opened {} at {} baud", port_name, baud_rate);
    Ok(port)
}

fn send_data(port: &mut Box<dyn SerialPort>, data: &[u8]) -> Result<(), RangeFinderError> {
    port.write_all(data).map_err(RangeFinderError::WriteFailure)
}

pub(crate) fn send_command(
    port: &mut Box<dyn SerialPort>,
    command: &ScanCommand,
    terminate: bool,
) -> Result<usize, RangeFinderError> {
    let data = encode(command, terminate);
    send_data(port, &data)?;
    info!(target: "rangefinder::serial", "[Sent] {}", command);
    Ok(data.len())
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, RangeFinderError> {
    let n_u32: u32 = port.bytes_to_read()?;
    Ok(n_u32.try_into().unwrap_or(0))
}

/// Discards whatever the device sent before we started listening.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), RangeFinderError> {
    let n_read: usize = get_n_read(port).unwrap_or(0);
    if n_read == 0 {
        return Ok(());
    }
    let mut stale: Vec<u8> = vec![0; n_read];
    port.read(stale.as_mut_slice())?;
    debug!(target: "rangefinder::serial", "Flushed {} stale bytes", n_read);
    Ok(())
}

/// Reads the bytes already waiting in the input buffer. Never waits for more.
pub(crate) fn read_available(port: &mut Box<dyn SerialPort>) -> Result<Vec<u8>, RangeFinderError> {
    let n_read: usize = get_n_read(port)?;
    if n_read == 0 {
        return Ok(Vec::new());
    }

    let mut signal: Vec<u8> = vec![0; n_read];
    match port.read(signal.as_mut_slice()) {
        Ok(n) => {
            signal.truncate(n);
            Ok(signal)
        }
        Err(e) if e.kind() == ErrorKind::TimedOut => Ok(Vec::new()),
        Err(e) => Err(RangeFinderError::IoError(e)),
    }
}
