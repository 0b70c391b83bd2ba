use crate::command::{validate_custom_scan, ScanCommand};
use crate::config::Config;
use crate::error::{ParseError, RangeFinderError};
use crate::framer::LineFramer;
use crate::numeric::to_string;
use crate::record::parse_record;
use crate::serial::{open_port, read_available, send_command};
use crate::sink::PointSink;
use crate::transform::to_point;
use log::{debug, error, info, warn};
use rangefinder_data::{CustomScanParams, Point3D, WireFormat};
use serialport::SerialPort;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Outcome of one drain of the inbound buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollReport {
    pub accepted: usize,
    pub rejected: usize,
}

/// Single threaded connection to the instrument.
///
/// The session owns the serial port, the line framer and the point cloud.
/// It never waits for data: the caller decides when to [`Session::poll`],
/// typically from a timer or a data-ready notification.
pub struct Session {
    port_name: String,
    baud_rate: u32,
    timeout: Duration,
    wire_format: WireFormat,
    terminate_commands: bool,
    port: Option<Box<dyn SerialPort>>,
    framer: LineFramer,
    sink: PointSink,
}

impl Session {
    /// Creates a disconnected session for the port named in `config`.
    pub fn new(config: &Config) -> Session {
        Session {
            port_name: config.serial.port.clone(),
            baud_rate: config.serial.baud_rate,
            timeout: config.timeout(),
            wire_format: config.protocol.wire_format,
            terminate_commands: config.protocol.terminate_commands,
            port: None,
            framer: LineFramer::new(),
            sink: PointSink::new(),
        }
    }

    /// Creates a session around an already opened port.
    pub fn with_port(port: Box<dyn SerialPort>, config: &Config) -> Session {
        let mut session = Session::new(config);
        if let Some(name) = port.name() {
            session.port_name = name;
        }
        session.port = Some(port);
        session
    }

    pub fn connect(&mut self) -> Result<(), RangeFinderError> {
        if self.port.is_some() {
            return Ok(());
        }
        match open_port(&self.port_name, self.baud_rate, self.timeout) {
            Ok(port) => {
                self.port = Some(port);
                info!(target: "rangefinder::session", "Connected");
                Ok(())
            }
            Err(e) => {
                warn!(target: "rangefinder::session", "{}", e);
                Err(e)
            }
        }
    }

    /// Closes the port. A partially received line is dropped.
    pub fn disconnect(&mut self) {
        if self.port.take().is_none() {
            return;
        }
        if self.framer.buffered() > 0 {
            debug!(
                target: "rangefinder::session",
                "Discarding partial line: {}",
                to_string(&self.framer.pending_bytes())
            );
        }
        self.framer.clear();
        info!(target: "rangefinder::session", "Disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    pub fn send(&mut self, command: &ScanCommand) -> Result<(), RangeFinderError> {
        let port = self.port.as_mut().ok_or(RangeFinderError::NotConnected())?;
        if let Err(e) = send_command(port, command, self.terminate_commands) {
            warn!(target: "rangefinder::session", "{}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Validates and sends the parameters of a custom scan.
    ///
    /// The firmware has to be put in custom scan mode with
    /// [`ScanCommand::CustomScan`] beforehand.
    pub fn send_custom_scan(&mut self, params: CustomScanParams) -> Result<(), RangeFinderError> {
        validate_custom_scan(&params)?;
        self.send(&ScanCommand::CustomScanParameters(params))
    }

    /// Reads what the port has buffered and ingests every complete line.
    pub fn poll(&mut self) -> Result<PollReport, RangeFinderError> {
        let port = self.port.as_mut().ok_or(RangeFinderError::NotConnected())?;
        let signal = match read_available(port) {
            Ok(signal) => signal,
            Err(e) => {
                error!(target: "rangefinder::session", "Read failed: {}", e);
                return Err(e);
            }
        };
        Ok(self.ingest(&signal))
    }

    /// Feeds raw bytes to the framer and ingests the completed lines.
    pub fn ingest(&mut self, data: &[u8]) -> PollReport {
        self.framer.push(data);
        let mut report = PollReport::default();
        while let Some(line) = self.framer.next_line() {
            match self.ingest_line(&line) {
                Ok(_) => report.accepted += 1,
                Err(_) => report.rejected += 1,
            }
        }
        report
    }

    /// Parses one record and appends its point. Bad records are logged and
    /// leave the cloud untouched.
    pub fn ingest_line(&mut self, line: &str) -> Result<Point3D, ParseError> {
        match parse_record(line) {
            Ok(sample) => {
                let point = to_point(&sample, self.wire_format);
                debug!(
                    target: "rangefinder::session",
                    "[Received] {:?} -> ({}, {}, {})",
                    line, point.x, point.y, point.z
                );
                self.sink.append(point);
                Ok(point)
            }
            Err(e) => {
                warn!(target: "rangefinder::session", "Dropped record {:?}: {}", line, e);
                Err(e)
            }
        }
    }

    pub fn reset_plot(&mut self) {
        self.sink.reset();
        info!(target: "rangefinder::session", "Reset!");
    }

    pub fn sink(&self) -> &PointSink {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut PointSink {
        &mut self.sink
    }

    /// Polls every `interval` until `stop` is raised or the port fails.
    pub fn run_polling(
        &mut self,
        interval: Duration,
        stop: &AtomicBool,
    ) -> Result<(), RangeFinderError> {
        while !stop.load(Ordering::Relaxed) {
            self.poll()?;
            std::thread::sleep(interval);
        }
        Ok(())
    }
}
