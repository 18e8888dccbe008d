pub mod status;
pub mod upload_coordinator;

pub use status::StatusDisplay;
pub use upload_coordinator::UploadCoordinator;
