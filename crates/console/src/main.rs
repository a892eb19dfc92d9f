use std::env;

use dashboard::{
    memory::MemoryInput, surface::Field, Dashboard, DashboardConfig, DataFetcher,
    SampleFetcher,
};
use taxi_api::{TaxiApiClient, TaxiApiConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{parse_line, Command};
use terminal::{TerminalDisplay, TerminalMap};

mod command;
mod terminal;

#[tokio::main]
async fn main() {
    env_logger::init();

    // inputs given on the command line are in place before the initial load
    let mut input = MemoryInput::default();
    for argument in env::args().skip(1) {
        match parse_line(&argument) {
            Ok(Command::Apply(values)) => apply_values(&mut input, values),
            Ok(Command::Quit) => return,
            Err(why) => {
                eprintln!("{why}");
                return;
            }
        }
    }

    let api_config = TaxiApiConfig::env();
    let config = DashboardConfig {
        fetch_timeout: api_config.timeout(),
        ..Default::default()
    };

    if env::var("TAXI_DASHBOARD_SAMPLE").is_ok_and(|value| value == "1") {
        log::info!("using sample data");
        run(SampleFetcher, input, config).await;
    } else {
        let client = TaxiApiClient::new(&api_config).expect("could not create http client.");
        log::info!("using backend at {}", api_config.base_url);
        run(client, input, config).await;
    }
}

async fn run<F: DataFetcher>(fetcher: F, input: MemoryInput, config: DashboardConfig) {
    let mut dashboard = Dashboard::new(
        fetcher,
        input,
        TerminalDisplay,
        TerminalMap::default(),
        config,
    );
    dashboard.load().await;

    // one line at a time, so an apply pass never overlaps the next
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(why) => {
                log::error!("could not read input: {why}");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Command::Apply(values)) => {
                apply_values(dashboard.input_mut(), values);
                let report = dashboard.apply().await;
                println!("{} markers on the map", report.markers);
            }
            Ok(Command::Quit) => break,
            Err(why) => eprintln!("{why}"),
        }
    }
}

fn apply_values(input: &mut MemoryInput, values: Vec<(Field, String)>) {
    for (field, value) in values {
        if value.is_empty() {
            input.clear(field);
        } else {
            input.set(field, value);
        }
    }
}
