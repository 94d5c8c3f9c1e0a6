mod types;
mod boost;
mod flight;
mod collision;
mod orbit;
mod camera;
mod snapshot;
mod cosmetics;
mod context;

pub use types::{CameraPose, FrameDebug, Intent, ShipState};
pub use boost::{BoostOutput, BoostResource};
pub use flight::{speed_limit, step_ship, step_ship_dbg};
pub use collision::{body_bounds, overlaps, ship_bounds, sun_bounds};
pub use orbit::{ContactOutcome, OrbitBody, OrbitState};
pub use camera::{desired_position, smoothing_factor};
pub use snapshot::{BodyMarker, MinimapSnapshot, PlanarPoint, ShipMarker};
pub use cosmetics::ShipCosmetics;
pub use context::{CentralBody, FlightSim, SimCheckpoint};
