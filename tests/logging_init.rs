use taskrank::logging::init_logging;
use taskrank::types::LogLevel;

// Installing a global subscriber is a one-shot operation per process, so
// this lives in its own test binary.
#[test]
fn logging_installs_once() {
    assert!(init_logging(Some(LogLevel::Debug)).is_ok());
    assert!(init_logging(None).is_err());
    tracing::debug!("logging initialised for test");
}
