//! Thin facade over `env_logger`, gated behind the `with-logs` feature so
//! library consumers that want no logging output pay nothing for it.

#[cfg(feature = "with-logs")]
pub fn init_logger() {
    let _ = env_logger::try_init();
}

#[cfg(not(feature = "with-logs"))]
pub fn init_logger() {
}
