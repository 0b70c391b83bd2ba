use clap::{Parser, ValueEnum};
use rangefinder_data::{CustomScanParams, WireFormat};
use rangefinder_driver::{Config, ScanCommand, Session};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scan {
    Quick,
    Deep,
    Custom,
    Calibrate,
}

#[derive(Parser, Debug)]
#[command(about = "Drives a scan from a single thread, polling the port on a timer.")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "rangefinder.toml")]
    config: String,
    /// Serial port, overrides the config file
    #[arg(long)]
    port: Option<String>,
    /// Treat records as x,y,z instead of azimuth,elevation,distance
    #[arg(long)]
    cartesian: bool,
    #[arg(long, value_enum, default_value = "quick")]
    scan: Scan,
    #[arg(long, default_value_t = 30, allow_hyphen_values = true)]
    azimuth_min: i32,
    #[arg(long, default_value_t = 160, allow_hyphen_values = true)]
    azimuth_max: i32,
    #[arg(long, default_value_t = -60, allow_hyphen_values = true)]
    elevation_min: i32,
    #[arg(long, default_value_t = 60, allow_hyphen_values = true)]
    elevation_max: i32,
    #[arg(long, default_value_t = 10)]
    step: i32,
    /// Stop after this many points
    #[arg(long, default_value_t = 1000)]
    max_points: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = match Config::load_or_create(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = args.port.clone() {
        config.serial.port = port;
    }
    if args.cartesian {
        config.protocol.wire_format = WireFormat::Cartesian;
    }

    let mut session = Session::new(&config);
    if let Err(e) = session.connect() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let sent = match args.scan {
        Scan::Quick => session.send(&ScanCommand::QuickScan),
        Scan::Deep => session.send(&ScanCommand::DeepScan),
        Scan::Calibrate => session.send(&ScanCommand::Calibrate),
        Scan::Custom => session.send(&ScanCommand::CustomScan).and_then(|_| {
            session.send_custom_scan(CustomScanParams {
                azimuth_min: args.azimuth_min,
                azimuth_max: args.azimuth_max,
                elevation_min: args.elevation_min,
                elevation_max: args.elevation_max,
                step: args.step,
                ..CustomScanParams::default()
            })
        }),
    };
    if let Err(e) = sent {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let counter = session.sink_mut().subscribe();
    while session.sink().len() < args.max_points {
        if let Err(e) = session.poll() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        if let Some(count) = counter.try_iter().last() {
            println!("Points plotted: {count}");
        }
        std::thread::sleep(config.poll_interval());
    }

    let points = session.sink().render_points().collect::<Vec<_>>();
    println!("{}", serde_json::to_string(&points).unwrap_or_default());
    session.disconnect();
    ExitCode::SUCCESS
}
