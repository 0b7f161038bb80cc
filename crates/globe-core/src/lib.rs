pub mod atlas;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod containment;
pub mod dataset;
pub mod events;
pub mod geometry;
pub mod resolver;
pub mod round;
pub mod scoring;
pub mod session;
pub mod timer;

pub use atlas::Atlas;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use containment::*;
pub use dataset::{parse_features, read_features, DatasetError};
pub use events::*;
pub use geometry::*;
pub use resolver::*;
pub use round::*;
pub use scoring::*;
pub use session::{Session, SessionError, Step};
pub use timer::*;
