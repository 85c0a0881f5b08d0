//! Professional detail page - view, edit and delete one record

use dioxus::prelude::*;

use crate::components::{DeleteConfirmModal, EditProfessionalModal, LoadingSpinner};
use crate::format::{display_or_fallback, experience_label, format_join_date};
use crate::routes::Route;
use crate::state::use_language;
use crate::types::{
    DeleteProfessionalResponse, GetProfessionalResponse, ProfessionalRecord, ProfessionalUpdate,
    UpdateProfessionalResponse,
};

/// Detail page for a single professional
#[component]
pub fn ProfessionalDetail(id: String) -> Element {
    let lang = use_language().get();
    let nav = use_navigator();

    let id_for_fetch = id.clone();
    let mut record = use_server_future(move || fetch_professional(id_for_fetch.clone()))?;

    let mut show_edit = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut is_saving = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut edit_error = use_signal(|| None::<String>);
    let mut delete_error = use_signal(|| None::<String>);

    let id_for_save = id.clone();
    let handle_save = move |update: ProfessionalUpdate| {
        let id = id_for_save.clone();
        spawn(async move {
            is_saving.set(true);
            edit_error.set(None);

            match update_professional(id, update).await {
                Ok(_) => {
                    show_edit.set(false);
                    record.restart();
                }
                Err(e) => edit_error.set(Some(e.to_string())),
            }

            is_saving.set(false);
        });
    };

    let id_for_delete = id.clone();
    let handle_delete = move |_| {
        let id = id_for_delete.clone();
        spawn(async move {
            is_deleting.set(true);
            delete_error.set(None);

            match delete_professional(id).await {
                Ok(_) => {
                    nav.push(Route::Directory {});
                }
                Err(e) => {
                    show_delete.set(false);
                    delete_error.set(Some(e.to_string()));
                }
            }

            is_deleting.set(false);
        });
    };

    let data = match &*record.value().read() {
        Some(Ok(response)) => response.data.clone(),
        Some(Err(e)) => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center p-6",
                    div {
                        class: "text-center max-w-md",
                        p { class: "text-4xl mb-4", "\u{26A0}\u{FE0F}" }
                        h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Professional not found" }
                        p { class: "text-gray-600 mb-4", "{e}" }
                        Link {
                            to: Route::Directory {},
                            class: "inline-block px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 transition-colors",
                            "Back to directory"
                        }
                    }
                }
            };
        }
        None => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center",
                    LoadingSpinner { message: "Loading profile..." }
                }
            };
        }
    };

    let specializations = data.specializations.clone().unwrap_or_default();
    let specializations_line = if specializations.is_empty() {
        display_or_fallback(None, lang)
    } else {
        specializations.join(", ")
    };
    let experience = experience_label(data.years_of_experience, lang);

    rsx! {
        div {
            // Hero
            div {
                class: "bg-gradient-to-br from-teal-700 via-teal-600 to-teal-700 text-white",
                div {
                    class: "max-w-7xl mx-auto px-6 py-12",
                    Link {
                        to: Route::Directory {},
                        class: "mb-8 inline-flex items-center gap-2 text-white/90 hover:text-white transition-colors",
                        "\u{2190} Back to directory"
                    }

                    div {
                        class: "flex flex-col md:flex-row items-center gap-8 mt-6",
                        div {
                            class: "w-28 h-28 rounded-full bg-white/20 flex items-center justify-center border-4 border-white/30 text-5xl",
                            "\u{1F464}"
                        }
                        div {
                            class: "flex-1 text-center md:text-start",
                            h1 { class: "text-4xl font-bold mb-2", "{data.name}" }
                            p { class: "text-xl text-white/90 mb-2", "{specializations_line}" }
                            if let Some(job_title) = &data.job_title {
                                p { class: "text-white/80", "{job_title}" }
                            }
                        }
                        div {
                            class: "flex gap-4",
                            div {
                                class: "bg-white/10 rounded-lg p-4 text-center border border-white/20",
                                p { class: "text-2xl font-bold", "{experience}" }
                                p { class: "text-sm text-white/80", "Experience" }
                            }
                            div {
                                class: "bg-white/10 rounded-lg p-4 text-center border border-white/20",
                                p { class: "text-2xl font-bold", "{data.uploaded_files.len()}" }
                                p { class: "text-sm text-white/80", "Documents" }
                            }
                        }
                    }

                    // Actions
                    div {
                        class: "flex gap-3 mt-8 justify-center md:justify-start",
                        button {
                            class: "px-4 py-2 bg-white text-teal-700 rounded-lg hover:bg-teal-50 transition-colors font-medium",
                            onclick: move |_| {
                                edit_error.set(None);
                                show_edit.set(true);
                            },
                            "\u{270F}\u{FE0F} Edit"
                        }
                        button {
                            class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors font-medium",
                            onclick: move |_| show_delete.set(true),
                            "\u{1F5D1}\u{FE0F} Delete"
                        }
                    }
                }
            }

            // Main content
            div {
                class: "max-w-7xl mx-auto px-6 py-10",

                if let Some(err) = delete_error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                        "Delete failed: {err}"
                    }
                }

                if let Some(analysis_error) = &data.analysis_error {
                    div {
                        class: "bg-amber-50 border border-amber-200 text-amber-800 p-4 rounded-lg mb-6",
                        span { class: "font-medium", "Document analysis warning: " }
                        "{analysis_error}"
                    }
                }

                div {
                    class: "grid grid-cols-1 lg:grid-cols-3 gap-8",

                    // Left column
                    div {
                        class: "lg:col-span-2 space-y-8",

                        ProfileSection { record: data.clone() }

                        if let Some(journey) = &data.professional_journey_arabic {
                            Section {
                                title: "Professional journey",
                                p { class: "text-gray-600 leading-relaxed whitespace-pre-line", dir: "rtl", "{journey}" }
                            }
                        }

                        if let Some(work_places) = &data.work_places {
                            if !work_places.is_empty() {
                                Section {
                                    title: "Work history",
                                    div {
                                        class: "space-y-4",
                                        for place in work_places.iter() {
                                            div {
                                                class: "p-4 bg-gray-50 rounded-lg",
                                                div {
                                                    class: "flex items-baseline justify-between flex-wrap gap-2",
                                                    h3 { class: "font-semibold text-gray-900", "{place.workplace_name}" }
                                                    span { class: "text-sm text-gray-500", "{place.start_date} \u{2013} {place.end_date}" }
                                                }
                                                p { class: "text-sm text-teal-700 mb-1", "{place.position}" }
                                                if !place.responsibilities.is_empty() {
                                                    p { class: "text-sm text-gray-600", "{place.responsibilities}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if let Some(courses) = &data.training_courses {
                            if !courses.is_empty() {
                                Section {
                                    title: "Training courses",
                                    div {
                                        class: "space-y-2",
                                        for course in courses.iter() {
                                            div {
                                                class: "flex items-baseline justify-between flex-wrap gap-2 p-3 bg-gray-50 rounded-lg",
                                                div {
                                                    p { class: "font-medium text-gray-900", "{course.name}" }
                                                    p { class: "text-sm text-gray-500", "{course.provider}" }
                                                }
                                                span { class: "text-sm text-gray-500", "{course.year}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        TagSection { title: "Degrees & certificates", items: data.degrees_and_certificates.clone() }
                        TagSection { title: "Certifications", items: data.certifications.clone() }
                        TagSection { title: "Skills", items: data.skills.clone() }
                        TagSection { title: "Equipment expertise", items: data.equipment_expertise.clone() }
                        TagSection { title: "Awards & recognition", items: data.awards_and_recognition.clone() }
                        TagSection { title: "Research & publications", items: data.research_and_publications.clone() }
                    }

                    // Right column
                    div {
                        class: "space-y-8",

                        Section {
                            title: "Contact",
                            div {
                                class: "space-y-3 text-sm",
                                InfoRow { label: "Email", value: display_or_fallback(data.email.as_deref(), lang) }
                                InfoRow { label: "Phone", value: display_or_fallback(data.phone.as_deref(), lang) }
                                InfoRow { label: "National ID", value: display_or_fallback(data.national_id.as_deref(), lang) }
                                InfoRow { label: "Registered", value: format_join_date(&data.created_at) }
                            }
                        }

                        if let Some(license) = &data.scfhs_license {
                            Section {
                                title: "SCFHS license",
                                div {
                                    class: "space-y-3 text-sm",
                                    InfoRow { label: "Number", value: license.license_number.clone() }
                                    InfoRow { label: "Type", value: license.license_type.clone() }
                                    InfoRow { label: "Classification", value: license.classification.clone() }
                                    InfoRow { label: "Issued", value: license.issue_date.clone() }
                                    InfoRow { label: "Expires", value: license.expiry_date.clone() }
                                }
                            }
                        }

                        if let Some(licenses) = &data.other_licenses {
                            if !licenses.is_empty() {
                                Section {
                                    title: "Other licenses",
                                    div {
                                        class: "space-y-3",
                                        for license in licenses.iter() {
                                            div {
                                                class: "p-3 bg-gray-50 rounded-lg text-sm",
                                                p { class: "font-medium text-gray-900", "{license.issuer}" }
                                                p { class: "text-gray-600", "No. {license.license_number}" }
                                                p { class: "text-gray-500", "Expires {license.expiry}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        TagSection { title: "Sub-specializations", items: data.sub_specializations.clone() }
                        TagSection { title: "Languages", items: data.languages.clone() }

                        if !data.uploaded_files.is_empty() {
                            Section {
                                title: "Uploaded documents",
                                ul {
                                    class: "space-y-2 text-sm text-gray-600",
                                    for file in data.uploaded_files.iter() {
                                        li { "\u{1F4C4} {file}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Modals
            if show_edit() {
                EditProfessionalModal {
                    record: data.clone(),
                    is_saving: is_saving(),
                    error: edit_error(),
                    on_save: handle_save,
                    on_cancel: move |_| show_edit.set(false)
                }
            }

            if show_delete() {
                DeleteConfirmModal {
                    name: data.name.clone(),
                    is_deleting: is_deleting(),
                    on_confirm: handle_delete,
                    on_cancel: move |_| show_delete.set(false)
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SectionProps {
    title: &'static str,
    children: Element,
}

#[component]
fn Section(props: SectionProps) -> Element {
    rsx! {
        section {
            class: "bg-white rounded-xl shadow-sm p-6 border border-gray-200",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "{props.title}" }
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct InfoRowProps {
    label: &'static str,
    value: String,
}

#[component]
fn InfoRow(props: InfoRowProps) -> Element {
    rsx! {
        div {
            class: "flex items-baseline justify-between gap-4",
            span { class: "text-gray-500", "{props.label}" }
            span { class: "text-gray-900 text-end", "{props.value}" }
        }
    }
}

/// Pill list for a string collection; renders nothing when absent or empty
#[derive(Props, Clone, PartialEq)]
struct TagSectionProps {
    title: &'static str,
    items: Option<Vec<String>>,
}

#[component]
fn TagSection(props: TagSectionProps) -> Element {
    let items = match &props.items {
        Some(items) if !items.is_empty() => items.clone(),
        _ => return rsx! {},
    };

    rsx! {
        Section {
            title: props.title,
            div {
                class: "flex flex-wrap gap-2",
                for item in items {
                    span {
                        class: "px-3 py-1 bg-teal-50 text-teal-700 rounded-full text-sm",
                        "{item}"
                    }
                }
            }
        }
    }
}

/// Profile facts block (type, workplace, fees, availability, summary)
#[derive(Props, Clone, PartialEq)]
struct ProfileSectionProps {
    record: ProfessionalRecord,
}

#[component]
fn ProfileSection(props: ProfileSectionProps) -> Element {
    let lang = use_language().get();
    let record = &props.record;

    rsx! {
        Section {
            title: "Professional profile",

            if let Some(summary) = &record.summary_arabic {
                div {
                    class: "mb-4 p-4 bg-gray-50 rounded-lg",
                    p { class: "text-gray-600 leading-relaxed", dir: "rtl", "{summary}" }
                }
            }

            div {
                class: "space-y-3 text-sm",
                InfoRow { label: "Type", value: record.professional_type.clone() }
                InfoRow { label: "Job title", value: display_or_fallback(record.job_title.as_deref(), lang) }
                InfoRow { label: "Current workplace", value: display_or_fallback(record.current_workplace.as_deref(), lang) }
                InfoRow { label: "Consultation fees", value: display_or_fallback(record.consultation_fees.as_deref(), lang) }
                InfoRow { label: "Availability", value: display_or_fallback(record.availability.as_deref(), lang) }
            }
        }
    }
}

#[server]
async fn fetch_professional(id: String) -> Result<GetProfessionalResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(&crate::api::professional(&id), &[])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_professional(
    id: String,
    update: ProfessionalUpdate,
) -> Result<UpdateProfessionalResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .put(&crate::api::professional(&id), &update)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "professional update failed");
            ServerFnError::new(e.to_string())
        })
}

#[server]
async fn delete_professional(id: String) -> Result<DeleteProfessionalResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .delete(&crate::api::professional(&id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "professional delete failed");
            ServerFnError::new(e.to_string())
        })
}
