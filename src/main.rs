use numsort::cli::{AppConfig, Args};
use numsort::config::UserConfig;
use numsort::prompt::Prompter;
use numsort::{FileIo, SortJob};

use env_logger::Env;
use log::{info, warn};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Load user configuration
    let mut user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load user config: {}", e);
        UserConfig::default()
    });

    let config: AppConfig = AppConfig::from(args).with_user_defaults(&user_config);

    let io = match &config.base_dir {
        Some(dir) => FileIo::new(dir),
        None => FileIo::from_executable_dir(),
    };
    info!("resolving paths against {}", io.base_dir().display());

    let mut prompter = Prompter::stdio();
    let result = SortJob::resolve_with_prompts(&config, &io, &mut prompter)
        .and_then(|(job, list)| job.sort_and_write(list, &io));
    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }

    // Only a successful run updates the stored defaults
    if config.save_defaults {
        user_config.remember(&config);
        if let Err(e) = user_config.save() {
            warn!("Failed to save user config: {}", e);
        }
    }
}
