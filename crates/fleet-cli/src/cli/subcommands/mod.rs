pub mod assets;
pub mod fleet;
pub mod maintenance;
pub mod operators;

pub use assets::AssetCommands;
pub use fleet::FleetCommands;
pub use maintenance::MaintenanceCommands;
pub use operators::OperatorCommands;
