pub mod router;

pub use router::{resolve, ApiModule, RouteEntry, Screen, ViewRouter, ROUTES};
