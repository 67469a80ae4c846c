use std::sync::Once;

use env_logger::Env;

static INIT: Once = Once::new();

/// Route log output of the crate to the test harness. Only has an effect with
/// the `log` feature enabled.
pub(crate) fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .is_test(true)
            .try_init()
            .ok();
    });
}
