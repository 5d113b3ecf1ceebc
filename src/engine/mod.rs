mod engine;
mod options;

pub use engine::Engine;
pub use options::EngineOptions;
