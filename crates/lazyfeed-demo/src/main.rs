#![forbid(unsafe_code)]

//! lazyfeed demo binary entry point.

use lazyfeed_demo::cli;
use lazyfeed_demo::script;
use lazyfeed_widgets::{Feed, FeedConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let opts = cli::Opts::parse();
    init_tracing(opts.log_json);

    let mut config = match &opts.config {
        Some(path) => match FeedConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => FeedConfig::default(),
    };
    script::apply_overrides(&mut config, &opts);

    let mut feed = match Feed::new(&config) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };

    let summary = script::run(&mut feed, &opts, |step| {
        if opts.quiet {
            return;
        }
        println!(
            "-- step {} (scroll {}, {} cards, {} revealed) --",
            step.step, step.scroll_offset, step.cards, step.revealed
        );
        for line in &step.lines {
            println!("{line}");
        }
    });

    if opts.log_json {
        println!("{}", summary.to_json());
    } else {
        println!("{summary}");
    }
}
