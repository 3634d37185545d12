use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` records to logcat on Android and to stdout elsewhere.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(LevelFilter::Debug)
                .with_tag("StyleTransfer"),
        );
        #[cfg(not(target_os = "android"))]
        styler_base::init_stdout_logger(LevelFilter::Debug);
    });
}
