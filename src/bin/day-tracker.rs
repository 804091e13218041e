use std::fs::OpenOptions;

use day_tracker::clock::SystemClock;
use day_tracker::config::Settings;
use day_tracker::storage::FileStorage;
use day_tracker::Tracker;


fn main() {
    let settings = Settings::from_env();
    init_logging(&settings);

    let storage = FileStorage::new(&settings.data_dir);
    let tracker = Tracker::open(storage, SystemClock);

    if let Err(err) = day_tracker::app::run(tracker) {
        log::error!("UI failed: {}", err);
        eprintln!("day-tracker: {}", err);
        std::process::exit(1);
    }
}

/// The terminal belongs to the UI, so log records go to a file in the data folder
fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let file = std::fs::create_dir_all(&settings.data_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(settings.log_file()));
    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        },
        Err(err) => {
            eprintln!("Unable to open log file {:?}: {}. Logging is disabled", settings.log_file(), err);
            builder.filter_level(log::LevelFilter::Off);
        },
    }

    let _ = builder.try_init();
}
