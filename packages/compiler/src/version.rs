//! Version Information

/// Version of the compiler that produced a template. Code generators stamp
/// this into their output so the runtime can refuse templates it cannot
/// hydrate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
