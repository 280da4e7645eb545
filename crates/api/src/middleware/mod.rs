//! Request middleware and extractors.

pub mod actor;
pub mod role_gate;

pub use actor::{ACTOR_ID_HEADER, ACTOR_ROLE_HEADER, CurrentActor, actor_middleware};
pub use role_gate::OfficeBearer;
