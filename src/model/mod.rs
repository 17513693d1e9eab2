pub use cadence_core::{ActionLogic, Fitness, RotationLogic};
pub mod catalog {
    pub use cadence_core::catalog::*;
}
pub mod config {
    pub use cadence_core::config::*;
}
pub mod evolution {
    pub use cadence_core::evolution::*;
}
pub mod fitness {
    pub use cadence_core::fitness::*;
}
pub mod resources {
    pub use cadence_core::resources::*;
}
pub mod rotation {
    pub use cadence_core::rotation::*;
}
pub mod data {
    pub use cadence_data::*;
}
