
pub(crate) use quick::Op;

/// Installs a logger for tests. Safe to call from every test.
pub(crate) fn init_logger() {
    let _ = pretty_env_logger::try_init();
}
