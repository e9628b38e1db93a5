use itertools::Itertools;

pub fn enable_tracing<F: Fn(simple_logger::SimpleLogger) -> simple_logger::SimpleLogger>(
    customizer: F,
) {
    use simple_logger::*;
    let logger = SimpleLogger::new().with_level(log::LevelFilter::Off);
    let logger = customizer(logger);
    let _ = logger.init();
}

pub fn enable_default_tracing() {
    enable_tracing(|logger| {
        logger
            .with_module_level("cheats", log::LevelFilter::Trace)
            .with_module_level("cheats_core", log::LevelFilter::Trace)
    });
}

// Cross-platform eq
pub fn xplat_eq<S: AsRef<str>, T: AsRef<str>>(actual: S, expected: T) {
    // Split the result into lines to work around cross-platform line ending normalization issues
    assert_eq!(
        actual.as_ref().lines().join("\n"),
        expected.as_ref().lines().join("\n")
    );
}
