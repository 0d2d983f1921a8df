pub mod admin_handlers;
pub mod application_handlers;
pub mod assessment_handlers;
pub mod dashboard_handlers;
pub mod geo_handlers;
pub mod interview_handlers;
pub mod job_handlers;
pub mod profile_handlers;
pub mod system_handlers;

pub use admin_handlers::*;
pub use application_handlers::*;
pub use assessment_handlers::*;
pub use dashboard_handlers::*;
pub use geo_handlers::*;
pub use interview_handlers::*;
pub use job_handlers::*;
pub use profile_handlers::*;
pub use system_handlers::*;
