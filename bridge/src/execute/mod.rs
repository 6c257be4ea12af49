//! Execute handlers for the bridge contract, organized by category:
//! - `admin` - proxy-owned logic replacement and ownership handover
//! - `roles` - relay, guardian, route, and fee administration
//! - `cross` - outbound crossing engine
//! - `deliver` - inbound delivery engine

mod admin;
mod cross;
mod deliver;
mod roles;

pub use admin::*;
pub use cross::*;
pub use deliver::*;
pub use roles::*;
