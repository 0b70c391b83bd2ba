use crate::command::ScanCommand;
use crate::error::RangeFinderError;
use crate::framer::LineFramer;
use crate::record::parse_record;
use crate::serial::{read_available, send_command};
use crate::time::sleep_ms;
use crate::transform::to_point;
use crossbeam_channel::{Receiver, Sender};
use crossbeam_utils::Backoff;
use log::{error, warn};
use rangefinder_data::{Point3D, WireFormat};
use serialport::SerialPort;
use std::sync::mpsc::{self, TrySendError};
use std::thread::JoinHandle;

/// Struct that contains the driver thread.
pub struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) command_tx: Sender<ScanCommand>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
}

impl DriverThreads {
    /// Queues a command for the reader thread, which owns the port.
    ///
    /// Never blocks: a full queue is reported as
    /// [`RangeFinderError::CommandQueueFull`] and the command is not sent.
    pub fn send(&self, command: ScanCommand) -> Result<(), RangeFinderError> {
        match self.command_tx.try_send(command) {
            Ok(()) => Ok(()),
            Err(crossbeam_channel::TrySendError::Full(_)) => Err(RangeFinderError::CommandQueueFull()),
            Err(crossbeam_channel::TrySendError::Disconnected(_)) => Err(RangeFinderError::NotConnected()),
        }
    }
}

pub(crate) fn read_device_signal(
    port: &mut Box<dyn SerialPort>,
    wire_format: WireFormat,
    terminate_commands: bool,
    point_tx: mpsc::SyncSender<Point3D>,
    command_rx: Receiver<ScanCommand>,
    reader_terminator_rx: Receiver<bool>,
) {
    let mut framer = LineFramer::new();
    let backoff = Backoff::new();
    loop {
        if do_terminate(&reader_terminator_rx) {
            return;
        }

        for command in command_rx.try_iter() {
            if let Err(e) = send_command(port, &command, terminate_commands) {
                warn!(target: "rangefinder::driver", "{e}");
            }
        }

        let signal = match read_available(port) {
            Ok(signal) => signal,
            Err(e) => {
                error!(target: "rangefinder::driver", "Read failed, stopping reader: {e}");
                return;
            }
        };
        if signal.is_empty() {
            if backoff.is_completed() {
                sleep_ms(1);
            } else {
                backoff.snooze();
            }
            continue;
        }
        backoff.reset();

        framer.push(&signal);
        for line in framer.drain_lines() {
            let sample = match parse_record(&line) {
                Ok(sample) => sample,
                Err(e) => {
                    warn!(target: "rangefinder::driver", "Dropped record {:?}: {}", line, e);
                    continue;
                }
            };
            let point = to_point(&sample, wire_format);
            if !forward_point(point, &point_tx, &reader_terminator_rx) {
                return;
            }
        }
    }
}

/// Hands a point to the consumer, waiting while its queue is full.
/// Returns false when the thread has to stop.
fn forward_point(
    point: Point3D,
    point_tx: &mpsc::SyncSender<Point3D>,
    reader_terminator_rx: &Receiver<bool>,
) -> bool {
    let mut pending = point;
    loop {
        match point_tx.try_send(pending) {
            Ok(()) => return true,
            Err(TrySendError::Full(p)) => {
                if do_terminate(reader_terminator_rx) {
                    return false;
                }
                pending = p;
                sleep_ms(1);
            }
            Err(TrySendError::Disconnected(_)) => return false,
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the driver thread.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // the reader may already be gone after a read failure
    let _ = driver_threads.reader_terminator_tx.send(true);

    if let Some(thread) = driver_threads.reader_thread.take() {
        if thread.join().is_err() {
            error!(target: "rangefinder::driver", "Reader thread panicked");
        }
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn test_send_does_not_block_on_full_queue() {
        let (reader_terminator_tx, _reader_terminator_rx) = bounded(1);
        let (command_tx, command_rx) = bounded(1);
        let threads = DriverThreads {
            reader_terminator_tx,
            command_tx,
            reader_thread: None,
        };

        threads.send(ScanCommand::QuickScan).unwrap();
        assert!(matches!(
            threads.send(ScanCommand::DeepScan),
            Err(RangeFinderError::CommandQueueFull())
        ));
        assert_eq!(command_rx.try_recv(), Ok(ScanCommand::QuickScan));

        drop(command_rx);
        assert!(matches!(
            threads.send(ScanCommand::Help),
            Err(RangeFinderError::NotConnected())
        ));
    }
}
