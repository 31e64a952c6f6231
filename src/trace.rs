use std::time::Duration;

use fastrace::collector::ConsoleReporter;

/// Reports finished spans to stdout as soon as they close.
pub fn start_trace_reporter() {
    log::info!("Starting console span reporting");

    let config = fastrace::collector::Config::default().report_interval(Duration::from_millis(0));
    fastrace::set_reporter(ConsoleReporter, config);
}
