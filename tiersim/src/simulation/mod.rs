pub mod states;
pub mod params;
pub mod parallel;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
