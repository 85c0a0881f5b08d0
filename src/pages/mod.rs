//! Page components

mod analytics;
mod directory;
mod professional_detail;
mod register;

pub use analytics::Analytics;
pub use directory::Directory;
pub use professional_detail::ProfessionalDetail;
pub use register::Register;
