// Domain layer: core models and ports. No dependency on clap or the
// filesystem; callers supply concrete adapters.

pub mod model;
pub mod ports;
