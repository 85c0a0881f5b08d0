//! Edit professional modal

use dioxus::prelude::*;

use crate::types::{ProfessionalRecord, ProfessionalUpdate};

/// Props for EditProfessionalModal
#[derive(Props, Clone, PartialEq)]
pub struct EditProfessionalModalProps {
    pub record: ProfessionalRecord,
    pub is_saving: bool,
    pub error: Option<String>,
    pub on_save: EventHandler<ProfessionalUpdate>,
    pub on_cancel: EventHandler<()>,
}

/// Modal editing the basic fields of a record. Only changed-to-non-empty
/// fields are sent; the service leaves absent fields untouched.
#[component]
pub fn EditProfessionalModal(props: EditProfessionalModalProps) -> Element {
    let record = props.record.clone();

    let mut name = use_signal(|| record.name.clone());
    let mut email = use_signal(|| record.email.clone().unwrap_or_default());
    let mut phone = use_signal(|| record.phone.clone().unwrap_or_default());
    let mut job_title = use_signal(|| record.job_title.clone().unwrap_or_default());
    let mut workplace = use_signal(|| record.current_workplace.clone().unwrap_or_default());
    let mut years = use_signal(|| {
        record
            .years_of_experience
            .map(|y| y.to_string())
            .unwrap_or_default()
    });
    let mut specializations = use_signal(|| {
        record
            .specializations
            .clone()
            .unwrap_or_default()
            .join(", ")
    });

    let handle_submit = move |_| {
        let update = ProfessionalUpdate {
            name: non_empty(&name()),
            email: non_empty(&email()),
            phone: non_empty(&phone()),
            job_title: non_empty(&job_title()),
            current_workplace: non_empty(&workplace()),
            years_of_experience: years().trim().parse::<u32>().ok(),
            specializations: parse_specializations(&specializations()),
            ..Default::default()
        };
        props.on_save.call(update);
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div {
                class: "bg-white rounded-xl shadow-xl max-w-lg w-full p-6 max-h-[90vh] overflow-y-auto",

                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Edit professional" }

                if let Some(err) = &props.error {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg mb-4 text-sm",
                        "{err}"
                    }
                }

                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    Field { label: "Name",
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Email",
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Phone",
                        input {
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Job title",
                        input {
                            r#type: "text",
                            value: "{job_title}",
                            oninput: move |e| job_title.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Current workplace",
                        input {
                            r#type: "text",
                            value: "{workplace}",
                            oninput: move |e| workplace.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Years of experience",
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{years}",
                            oninput: move |e| years.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }
                    Field { label: "Specializations (comma-separated)",
                        input {
                            r#type: "text",
                            value: "{specializations}",
                            oninput: move |e| specializations.set(e.value()),
                            placeholder: "Cardiology, Internal Medicine",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                        }
                    }

                    div {
                        class: "flex justify-end gap-3 pt-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                            disabled: props.is_saving,
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 transition-colors disabled:opacity-50",
                            disabled: props.is_saving,
                            if props.is_saving { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FieldProps {
    label: &'static str,
    children: Element,
}

#[component]
fn Field(props: FieldProps) -> Element {
    rsx! {
        div {
            label {
                class: "block text-sm font-medium text-gray-700 mb-1",
                "{props.label}"
            }
            {props.children}
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_specializations(value: &str) -> Option<Vec<String>> {
    let list: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" a "), Some("a".to_string()));
    }

    #[test]
    fn test_parse_specializations() {
        assert_eq!(parse_specializations(" , ,"), None);
        assert_eq!(
            parse_specializations("Cardiology, Internal Medicine ,"),
            Some(vec![
                "Cardiology".to_string(),
                "Internal Medicine".to_string()
            ])
        );
    }
}
