//! Professional card component

use dioxus::prelude::*;

use crate::format::{experience_label, format_join_date, primary_specialization};
use crate::routes::Route;
use crate::state::use_language;
use crate::types::ProfessionalSummary;

/// Props for ProfessionalCard
#[derive(Props, Clone, PartialEq)]
pub struct ProfessionalCardProps {
    pub professional: ProfessionalSummary,
}

/// Grid card for one directory entry
#[component]
pub fn ProfessionalCard(props: ProfessionalCardProps) -> Element {
    let lang = use_language().get();
    let prof = &props.professional;

    let specialization = primary_specialization(prof.specializations.as_deref(), lang);
    let experience = experience_label(prof.years_of_experience, lang);
    let extra_specializations = prof
        .specializations
        .as_deref()
        .map(|list| list.len().saturating_sub(1))
        .unwrap_or(0);

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Header: name + primary specialization badge
            div {
                class: "flex items-start justify-between mb-3 gap-2",
                div {
                    h3 { class: "text-lg font-semibold text-gray-900", "{prof.name}" }
                    p { class: "text-sm text-teal-700", "{specialization}" }
                }
                if extra_specializations > 0 {
                    span {
                        class: "px-2 py-0.5 rounded-full bg-teal-50 text-teal-700 text-xs whitespace-nowrap",
                        "+{extra_specializations}"
                    }
                }
            }

            // Contact
            div {
                class: "space-y-1 text-sm text-gray-600 mb-4 flex-grow",
                if let Some(email) = &prof.email {
                    p {
                        class: "truncate",
                        "\u{2709} {email}"
                    }
                }
                if let Some(phone) = &prof.phone {
                    p { "\u{1F4DE} {phone}" }
                }
                p { class: "text-gray-500", "\u{1F4BC} {experience}" }
            }

            // Footer
            div {
                class: "mt-auto pt-3 border-t border-gray-200/60 flex items-center justify-between",
                p {
                    class: "text-xs text-gray-400",
                    "{format_join_date(&prof.created_at)}"
                }
                Link {
                    to: Route::ProfessionalDetail { id: prof.professional_id.clone() },
                    class: "px-3 py-1.5 bg-teal-600 text-white text-sm rounded-lg hover:bg-teal-700 transition-colors",
                    "View Details"
                }
            }
        }
    }
}
