pub mod defaults;
pub mod id;
pub mod model;
pub mod scene;

pub use id::ObjectId;
pub use model::*;
pub use scene::Scene;
