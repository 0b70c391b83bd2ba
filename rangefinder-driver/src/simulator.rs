use crate::constants::{LINE_TERMINATOR, SIMULATOR_SEED, SIMULATOR_UPPER_BOUND};
use crate::error::RangeFinderError;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serialport::SerialPort;
use std::io::Write;

/// Shape of the simulated point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// Independent uniform coordinates.
    Scatter,
    /// Uniform height with a small sinusoidal offset on x and y.
    Spiral,
}

/// Stands in for the instrument when testing the link: emits cartesian
/// `x,y,z\r\n` records to a serial port.
pub struct Simulator {
    rng: StdRng,
}

impl Default for Simulator {
    fn default() -> Self {
        Simulator::with_seed(SIMULATOR_SEED)
    }
}

impl Simulator {
    pub fn new() -> Simulator {
        Simulator::default()
    }

    pub fn with_seed(seed: u64) -> Simulator {
        Simulator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn coordinate(&mut self) -> i32 {
        self.rng.gen_range(0..SIMULATOR_UPPER_BOUND)
    }

    pub fn scatter_record(&mut self) -> String {
        let x = self.coordinate();
        let y = self.coordinate();
        let z = self.coordinate();
        format!("{},{},{}", x, y, z)
    }

    pub fn spiral_record(&mut self) -> String {
        let z = self.coordinate();
        let x = (f64::sin(z.into()) + f64::from(self.coordinate())) as i32;
        let y = (f64::cos(z.into()) + f64::from(self.coordinate())) as i32;
        format!("{},{},{}", x, y, z)
    }

    pub fn record(&mut self, kind: RecordKind) -> String {
        match kind {
            RecordKind::Scatter => self.scatter_record(),
            RecordKind::Spiral => self.spiral_record(),
        }
    }

    /// Writes `n_records` terminated records to `port`. Returns the bytes written.
    pub fn send_batch(
        &mut self,
        port: &mut Box<dyn SerialPort>,
        kind: RecordKind,
        n_records: usize,
    ) -> Result<usize, RangeFinderError> {
        let mut n_bytes = 0;
        for _ in 0..n_records {
            let mut data = self.record(kind).into_bytes();
            data.extend_from_slice(LINE_TERMINATOR);
            port.write_all(&data).map_err(RangeFinderError::WriteFailure)?;
            n_bytes += data.len();
        }
        debug!(target: "rangefinder::simulator", "[Sent] {} {:?} records", n_records, kind);
        Ok(n_bytes)
    }
}
