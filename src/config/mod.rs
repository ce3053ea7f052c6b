pub mod core;
pub mod gameplay;
pub mod world;

pub use self::core::EngineConfig;
pub use gameplay::GameplayConfig;
pub use world::WorldConfig;
