//! The tracing subscriber is process-global, so these tests live in their own binary.
use plantid::logging;

#[test]
fn test_repeated_init_is_a_no_op() {
    assert!(logging::init(0).is_ok());
    assert!(logging::init(2).is_ok());
    tracing::info!("logging initialised twice");
}
