// Cross platform logger, starts logging at a given level on Android and the
//      std desktop targets.

//<Android>>>: uses android_logger to log messages to logcat under the "torchlight" tag.

//<Linux, Windows, iOS and macOS>>> uses env_logger for std output logging.

// Level sys: log::Level sets the maximum logging level. Defaults to Warn if None is used.


pub struct Logger;


impl Logger {
    pub fn start(level: Option<log::Level>) {
        let level = level.unwrap_or(log::Level::Warn);
        #[cfg(target_os="android")]
        {
            android_logger::init_once(
                android_logger::Config::default()
                    .with_max_level(level.to_level_filter())
                    .with_tag("torchlight"),
            );
        }

        #[cfg(not(target_os="android"))]
        {
            //A second start (tests, re-created activity) keeps the first logger
            let _ = env_logger::builder().filter_level(level.to_level_filter()).try_init();
        }
    }
}
