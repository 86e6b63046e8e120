//! Runs in its own process: installs a logger that queries the registry.

use core::sync::atomic::{AtomicUsize, Ordering};

use log::{LevelFilter, Log, Metadata, Record};
use rql_encoding::opaque::{is_opaque, register_opaque};

struct Declared;
struct Runtime;
struct Queried;

rql_encoding::submit_opaque!(Declared);

static RECORDS: AtomicUsize = AtomicUsize::new(0);

struct QueryingLogger;

impl Log for QueryingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, _: &Record<'_>) {
        assert!(!is_opaque::<Queried>());
        RECORDS.fetch_add(1, Ordering::Relaxed);
    }

    fn flush(&self) {}
}

static LOGGER: QueryingLogger = QueryingLogger;

#[test]
fn logger_may_query_the_registry() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    assert_eq!(is_opaque::<Declared>(), cfg!(feature = "auto_register"));

    let before = RECORDS.load(Ordering::Relaxed);
    register_opaque::<Runtime>();
    assert!(is_opaque::<Runtime>());
    assert!(RECORDS.load(Ordering::Relaxed) > before);

    // Duplicate registrations log too, outside the lock.
    let before = RECORDS.load(Ordering::Relaxed);
    register_opaque::<Runtime>();
    assert!(RECORDS.load(Ordering::Relaxed) > before);
}
