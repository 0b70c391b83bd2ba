use std::sync::mpsc;

mod command;
mod config;
mod constants;
mod driver_threads;
mod error;
mod framer;
mod numeric;
mod record;
mod serial;
mod session;
mod simulator;
mod sink;
mod time;
mod transform;

use crate::constants::{COMMAND_CHANNEL_CAPACITY, POINT_CHANNEL_CAPACITY};
use crate::driver_threads::read_device_signal;
use crate::serial::{flush, open_port};
use crossbeam_channel::bounded;
use log::info;
use rangefinder_data::Point3D;

pub use crate::command::{encode, validate_custom_scan, ScanCommand};
pub use crate::config::{Config, ProtocolConfig, SerialConfig, SessionConfig};
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::{ParseError, RangeFinderError};
pub use crate::framer::LineFramer;
pub use crate::record::parse_record;
pub use crate::session::{PollReport, Session};
pub use crate::simulator::{RecordKind, Simulator};
pub use crate::sink::PointSink;
pub use crate::transform::to_point;

/// Function to launch the range finder reader thread.
///
/// The thread owns the serial port. Commands are queued with
/// [`DriverThreads::send`] and converted points arrive on the returned
/// receiver in the order the instrument sent them.
///
/// # Arguments
///
/// * `config` - Port name, baud rate and wire format.
pub fn run_driver(
    config: &Config,
) -> Result<(DriverThreads, mpsc::Receiver<Point3D>), RangeFinderError> {
    let mut port = open_port(&config.serial.port, config.serial.baud_rate, config.timeout())?;

    if !cfg!(test) {
        // In testing, keep the bytes queued before the driver started
        flush(&mut port)?;
    }

    let (reader_terminator_tx, reader_terminator_rx) = bounded(10);
    let (command_tx, command_rx) = bounded(COMMAND_CHANNEL_CAPACITY);
    let (point_tx, point_rx) = mpsc::sync_channel::<Point3D>(POINT_CHANNEL_CAPACITY);

    let wire_format = config.protocol.wire_format;
    let terminate_commands = config.protocol.terminate_commands;
    let reader_thread = Some(std::thread::spawn(move || {
        read_device_signal(
            &mut port,
            wire_format,
            terminate_commands,
            point_tx,
            command_rx,
            reader_terminator_rx,
        );
    }));
    info!(target: "rangefinder::driver", "Reader thread started on {}", config.serial.port);

    let driver_threads = DriverThreads {
        reader_terminator_tx,
        command_tx,
        reader_thread,
    };

    Ok((driver_threads, point_rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::sleep_ms;
    use rangefinder_data::{CustomScanParams, WireFormat};
    use serialport::{SerialPort, TTYPort};
    use std::io::{Read, Write};
    use std::time::Duration;

    fn config_for(port: &TTYPort, wire_format: WireFormat) -> Config {
        let mut config = Config::default();
        config.serial.port = port.name().unwrap();
        config.protocol.wire_format = wire_format;
        config
    }

    #[test]
    fn test_run_driver_spherical_data() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let config = config_for(&slave, WireFormat::Spherical);
        let (thread, point_rx) = run_driver(&config).unwrap();

        master.write_all(b"90,90,100\r\n0,0,250\r\n").unwrap();

        let p = point_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let (x, y, z) = p.render_order();
        assert!(f64::abs(x) < 1e-9);
        assert!(f64::abs(y) < 1e-9);
        assert!(f64::abs(z - 100.) < 1e-9);

        let p = point_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(f64::abs(p.z - 250.) < 1e-9);

        drop(thread);
    }

    #[test]
    fn test_run_driver_skips_malformed_records() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let config = config_for(&slave, WireFormat::Cartesian);
        let (thread, point_rx) = run_driver(&config).unwrap();

        master
            .write_all(b"1,2,3\r\n12,7\r\na,b,c\r\n4,5")
            .unwrap();
        sleep_ms(10);
        master.write_all(b",6\r\n").unwrap();

        let points = (0..2)
            .map(|_| point_rx.recv_timeout(Duration::from_secs(1)).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            points,
            vec![Point3D::new(1., 2., 3.), Point3D::new(4., 5., 6.)]
        );
        assert!(point_rx.recv_timeout(Duration::from_millis(50)).is_err());

        drop(thread);
    }

    #[test]
    fn test_run_driver_sends_commands() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let config = config_for(&slave, WireFormat::Spherical);
        let (thread, _point_rx) = run_driver(&config).unwrap();

        thread.send(ScanCommand::QuickScan).unwrap();
        thread
            .send(ScanCommand::CustomScanParameters(CustomScanParams {
                azimuth_min: 30,
                azimuth_max: 160,
                elevation_min: -60,
                elevation_max: 60,
                step: 10,
                scan_frequency: 1,
                samples_per_orientation: 3,
            }))
            .unwrap();

        sleep_ms(50);

        let expected = b"-on-q-a=30,160-e=-60,60-s10.";
        let mut buf = [0u8; 28];
        master.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, expected);

        drop(thread);
    }

    #[test]
    fn test_run_driver_stops_when_port_breaks() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let config = config_for(&slave, WireFormat::Cartesian);
        let (thread, point_rx) = run_driver(&config).unwrap();

        master.write_all(b"1,2,3\r\n").unwrap();
        assert_eq!(
            point_rx.recv_timeout(Duration::from_secs(1)),
            Ok(Point3D::new(1., 2., 3.))
        );

        drop(master);
        assert_eq!(
            point_rx.recv_timeout(Duration::from_secs(1)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );

        drop(thread);
    }

    #[test]
    fn test_run_driver_fails_on_missing_port() {
        let mut config = Config::default();
        config.serial.port = "/dev/this-port-does-not-exist".to_string();
        assert!(matches!(
            run_driver(&config),
            Err(RangeFinderError::PortOpen(_))
        ));
    }
}
