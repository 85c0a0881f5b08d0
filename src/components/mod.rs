//! Shared UI components

mod delete_confirm_modal;
mod edit_professional_modal;
mod layout;
mod loading;
mod professional_card;
mod sidebar;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use edit_professional_modal::EditProfessionalModal;
pub use layout::AppLayout;
pub use loading::{LoadingDots, LoadingSpinner};
pub use professional_card::ProfessionalCard;
pub use sidebar::Sidebar;
