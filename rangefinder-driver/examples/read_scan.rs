use clap::{Arg, ArgAction, Command};
use rangefinder_driver::{run_driver, Config, ScanCommand};

struct Args {
    config: String,
    port: Option<String>,
    deep: bool,
}

fn get_args() -> Args {
    let matches = Command::new("Range finder data receiver.")
        .about("Starts a scan and prints the received points as JSON lines.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port, overrides the config file")
                .use_value_delimiter(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the TOML config file")
                .default_value("rangefinder.toml"),
        )
        .arg(
            Arg::new("deep")
                .long("deep")
                .help("Run a deep scan instead of a quick scan")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    Args {
        config: matches.get_one::<String>("config").unwrap().to_string(),
        port: matches.get_one::<String>("port").cloned(),
        deep: matches.get_flag("deep"),
    }
}

fn main() {
    env_logger::init();
    let args = get_args();

    let mut config = Config::load_or_create(&args.config).unwrap();
    if let Some(port) = args.port {
        config.serial.port = port;
    }

    let (driver_threads, point_rx) = run_driver(&config).unwrap();
    let command = if args.deep {
        ScanCommand::DeepScan
    } else {
        ScanCommand::QuickScan
    };
    driver_threads.send(command).unwrap();

    while let Ok(point) = point_rx.recv() {
        let (x, y, z) = point.render_order();
        println!("{}", serde_json::json!({ "x": x, "y": y, "z": z }));
    }

    drop(driver_threads);
}
