pub mod inspection;
pub mod reference;
pub mod transaction;

pub use inspection::InspectionRepository;
pub use reference::ReferenceRepository;
pub use transaction::*;
