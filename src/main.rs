use clap::Parser;
use ip_space_plan::output::{print_report, report_json};
use ip_space_plan::{build_report, Settings};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Plan the address layout of a VLAN subnet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network address of the subnet, e.g. 192.168.1.0
    subnet: String,

    /// Netmask as /n or dotted-decimal, e.g. /24 or 255.255.255.0
    netmask: String,

    /// 802.1Q VLAN ID
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    vlan: i64,

    /// Addresses already assigned in the subnet
    #[arg(short, long, value_delimiter = ',')]
    assigned: Vec<Ipv4Addr>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    // Keep stdout clean for the report
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::debug!("#Start main() {:?}", args);

    let settings = Settings::from_env()?;
    let report = build_report(
        args.vlan,
        &args.subnet,
        &args.netmask,
        &args.assigned,
        &settings,
    )?;

    if args.json {
        println!("{}", report_json(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
