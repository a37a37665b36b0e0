/// Install `env_logger` for the test binary (output captured by the test harness), safe to call
/// from every test.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
