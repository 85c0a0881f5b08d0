//! Registration page - upload documents to create a professional record

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::routes::Route;
use crate::types::CreateProfessionalResponse;

/// One picked file, read into memory so it can cross the server-fn boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Registration page - the service extracts the structured record from the
/// uploaded documents
#[component]
pub fn Register() -> Element {
    let mut name = use_signal(String::new);
    let mut files = use_signal(Vec::<UploadFile>::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut created = use_signal(|| None::<CreateProfessionalResponse>);

    let handle_files = move |evt: Event<FormData>| {
        spawn(async move {
            if let Some(file_engine) = evt.files() {
                let mut loaded = Vec::new();
                for file_name in file_engine.files() {
                    if let Some(bytes) = file_engine.read_file(&file_name).await {
                        loaded.push(UploadFile { file_name, bytes });
                    }
                }
                files.set(loaded);
            }
        });
    };

    let handle_submit = move |_| {
        if files().is_empty() || is_submitting() {
            return;
        }

        let name_value = name().trim().to_string();
        let files_value = files();

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let name_arg = if name_value.is_empty() {
                None
            } else {
                Some(name_value)
            };

            match create_professional(name_arg, files_value).await {
                Ok(response) => {
                    created.set(Some(response));
                    name.set(String::new());
                    files.set(Vec::new());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "p-6",
            div {
                class: "max-w-2xl mx-auto",

                div {
                    class: "mb-8",
                    h1 {
                        class: "text-2xl font-bold text-gray-900 mb-2",
                        "Register a Professional"
                    }
                    p {
                        class: "text-gray-600",
                        "Upload CVs, licenses or certificates; the directory service extracts the profile automatically."
                    }
                }

                if let Some(response) = created() {
                    SuccessBanner {
                        response: response.clone(),
                        on_dismiss: move |_| created.set(None)
                    }
                } else {
                    form {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6",
                        onsubmit: handle_submit,

                        if let Some(err) = error() {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                                "{err}"
                            }
                        }

                        // Name field (optional; the service can extract it)
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Name (optional)"
                            }
                            input {
                                r#type: "text",
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                                placeholder: "Dr. ...",
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                            }
                            p {
                                class: "mt-1 text-xs text-gray-500",
                                "Leave empty to use the name extracted from the documents"
                            }
                        }

                        // Documents field
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Documents "
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                r#type: "file",
                                multiple: true,
                                accept: ".pdf,.doc,.docx,.png,.jpg,.jpeg",
                                onchange: handle_files,
                                class: "w-full text-sm text-gray-600 file:me-4 file:px-4 file:py-2 file:rounded-lg file:border-0 file:bg-teal-50 file:text-teal-700 hover:file:bg-teal-100"
                            }
                            if !files().is_empty() {
                                ul {
                                    class: "mt-3 space-y-1 text-sm text-gray-600",
                                    for file in files() {
                                        li {
                                            "\u{1F4C4} {file.file_name} ({file.bytes.len()} bytes)"
                                        }
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full py-3 bg-teal-600 text-white rounded-lg hover:bg-teal-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: files().is_empty() || is_submitting(),
                            if is_submitting() {
                                "Uploading and analyzing..."
                            } else {
                                "Register Professional"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SuccessBannerProps {
    response: CreateProfessionalResponse,
    on_dismiss: EventHandler<()>,
}

#[component]
fn SuccessBanner(props: SuccessBannerProps) -> Element {
    let record = &props.response.data;
    let specializations = record
        .specializations
        .as_deref()
        .unwrap_or(&[])
        .join(", ");

    rsx! {
        div {
            class: "bg-green-50 border border-green-200 text-green-800 p-6 rounded-lg",
            h3 { class: "text-lg font-semibold mb-2", "Professional registered" }
            p {
                class: "mb-1",
                span { class: "font-medium", "{record.name}" }
                if !specializations.is_empty() {
                    " \u{2014} {specializations}"
                }
            }
            p { class: "text-sm mb-4", "{props.response.message}" }
            div {
                class: "flex gap-3",
                Link {
                    to: Route::ProfessionalDetail { id: props.response.professional_id.clone() },
                    class: "px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors",
                    "View Profile"
                }
                button {
                    class: "px-4 py-2 bg-white border border-green-300 text-green-700 rounded-lg hover:bg-green-100 transition-colors",
                    onclick: move |_| props.on_dismiss.call(()),
                    "Register Another"
                }
            }
        }
    }
}

#[server]
async fn create_professional(
    name: Option<String>,
    files: Vec<UploadFile>,
) -> Result<CreateProfessionalResponse, ServerFnError> {
    let client = crate::api::server_client();

    let mut form = reqwest::multipart::Form::new();
    if let Some(name) = name {
        form = form.text("name", name);
    }
    for file in files {
        form = form.part(
            "files",
            reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name),
        );
    }

    client
        .post_multipart(crate::api::UPLOAD_PROFESSIONAL, form)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "professional upload failed");
            ServerFnError::new(e.to_string())
        })
}
