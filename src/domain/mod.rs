// Domain layer: value types, the page model and the ports the binder and
// formatters are written against. No I/O lives here.

pub mod model;
pub mod ports;
