pub mod errors;
pub mod ids;
pub mod node;
pub mod plan;
pub mod report;
pub mod script;

pub use errors::*;
pub use ids::*;
pub use node::*;
pub use plan::*;
pub use report::*;
pub use script::{Script, Step};
