pub mod finalization;
pub mod inspection;

pub use finalization::InspectionUpdate;
pub use inspection::InspectionService;
