pub mod severity;
pub mod scan;
pub mod asset;
pub mod news;
pub mod user;

pub use severity::*;
pub use scan::*;
pub use asset::*;
pub use news::*;
pub use user::*;
