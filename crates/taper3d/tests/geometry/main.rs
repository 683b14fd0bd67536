mod profile_orientation;
mod rebuild_sink;
mod tank_scenario;
#[cfg(feature = "wavefront")]
mod wavefront_export;
