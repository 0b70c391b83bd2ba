use clap::{Parser, ValueEnum};
use rangefinder_driver::{Config, RecordKind, Simulator};
use serialport::SerialPort;
use std::io::Read;
use std::time::Duration;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Scatter,
    Spiral,
}

#[derive(Parser, Debug)]
#[command(about = "Pretends to be the range finder on the other end of a serial link.")]
struct Args {
    /// The device path to a serial port
    port: String,
    #[arg(long, value_enum, default_value = "scatter")]
    kind: Kind,
    /// Records per batch
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Number of batches, sent every interval
    #[arg(long, default_value_t = 1)]
    batches: usize,
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::default();

    let mut port: Box<dyn SerialPort> = serialport::new(&args.port, config.serial.baud_rate)
        .timeout(config.timeout())
        .open()
        .unwrap();

    let kind = match args.kind {
        Kind::Scatter => RecordKind::Scatter,
        Kind::Spiral => RecordKind::Spiral,
    };
    let mut simulator = Simulator::with_seed(args.seed);
    for _ in 0..args.batches {
        let n = simulator.send_batch(&mut port, kind, args.count).unwrap();
        println!("[Sent] {} records, {} bytes", args.count, n);

        // echo whatever the host sends, e.g. scan commands
        let mut received = vec![0u8; 256];
        if let Ok(n) = port.read(&mut received) {
            println!("[Received] {}", String::from_utf8_lossy(&received[..n]));
        }
        std::thread::sleep(Duration::from_millis(args.interval_ms));
    }
}
