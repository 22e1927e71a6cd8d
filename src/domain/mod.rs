// Domain layer: envelopes, backend response records and the transport port.
// No network code lives here.

pub mod model;
pub mod ports;
pub mod reports;
