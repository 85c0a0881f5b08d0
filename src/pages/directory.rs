//! Directory page - browse and search professionals
//!
//! Runs the full-directory load plus up to two independent remote searches
//! and merges whatever has arrived through [`crate::search::reconcile`]. A
//! failed search degrades to the same "absent" state as a pending one; the
//! error is surfaced in a banner while the grid keeps showing best-effort
//! results.

use dioxus::prelude::*;

use crate::components::{LoadingDots, LoadingSpinner, ProfessionalCard};
use crate::routes::Route;
use crate::search::reconcile;
use crate::types::{
    DirectoryListing, SpecializationSearchResponse, TypeCatalogResponse, TypeSearchResponse,
};

/// Directory dashboard with type and specialization search
#[component]
pub fn Directory() -> Element {
    let mut selected_type = use_signal(String::new);
    let mut specialization = use_signal(String::new);

    let mut directory = use_resource(move || async move { fetch_directory().await });
    let catalog = use_server_future(fetch_type_catalog)?;

    // Each search restarts (dropping the in-flight request) whenever its
    // filter signal changes; an empty filter resolves to None without a
    // round-trip.
    let type_search = use_resource(move || {
        let term = selected_type().trim().to_string();
        async move {
            if term.is_empty() {
                return Ok(None);
            }
            search_by_type(term).await.map(Some)
        }
    });
    let specialization_search = use_resource(move || {
        let term = specialization().trim().to_string();
        async move {
            if term.is_empty() {
                return Ok(None);
            }
            search_by_specialization(term).await.map(Some)
        }
    });

    // Initial load blocks the page, matching the service being the only
    // source of data.
    let full_directory = match &*directory.value().read() {
        Some(Ok(dir)) => dir.clone(),
        Some(Err(e)) => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center p-6",
                    div {
                        class: "text-center max-w-md",
                        p { class: "text-4xl mb-4", "\u{26A0}\u{FE0F}" }
                        h2 { class: "text-xl font-bold text-gray-900 mb-2", "Error loading professionals" }
                        p { class: "text-gray-600 mb-4", "{e}" }
                        button {
                            class: "px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 transition-colors",
                            onclick: move |_| directory.restart(),
                            "Retry"
                        }
                    }
                }
            };
        }
        None => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center",
                    LoadingSpinner { message: "Loading professionals..." }
                }
            };
        }
    };

    // A resolved result is only trusted when its echoed search key still
    // matches the live filter; anything else is treated as absent.
    let type_result: Option<TypeSearchResponse> = match &*type_search.value().read() {
        Some(Ok(Some(r)))
            if r.professional_type
                .eq_ignore_ascii_case(selected_type().trim()) =>
        {
            Some(r.clone())
        }
        _ => None,
    };
    let spec_result: Option<SpecializationSearchResponse> =
        match &*specialization_search.value().read() {
            Some(Ok(Some(r)))
                if r.specialization
                    .eq_ignore_ascii_case(specialization().trim()) =>
            {
                Some(r.clone())
            }
            _ => None,
        };

    let type_search_failed = matches!(&*type_search.value().read(), Some(Err(_)));
    let spec_search_failed = matches!(&*specialization_search.value().read(), Some(Err(_)));

    let selected = selected_type();
    let spec_term = specialization();

    let output = reconcile(
        Some(selected.as_str()),
        Some(spec_term.as_str()),
        type_result.as_ref(),
        spec_result.as_ref(),
        Some(&full_directory),
    );

    let type_options = match &*catalog.value().read() {
        Some(Ok(catalog)) => catalog.professional_types.clone(),
        _ => Vec::new(),
    };

    let has_type_filter = !selected.trim().is_empty();
    let has_spec_filter = !spec_term.trim().is_empty();
    let searching = (has_type_filter && type_result.is_none() && !type_search_failed)
        || (has_spec_filter && spec_result.is_none() && !spec_search_failed);

    rsx! {
        div {
            class: "p-6",
            div {
                class: "max-w-7xl mx-auto",

                div {
                    class: "mb-8",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Professionals Directory" }
                    p { class: "text-gray-600", "Browse and search registered healthcare staff" }
                }

                // Count badge
                div {
                    class: "mb-6 inline-flex items-center px-4 py-2 bg-white rounded-lg border border-gray-200",
                    span { class: "text-sm text-gray-500", "Total professionals" }
                    span { class: "ms-2 text-lg font-bold text-teal-600", "{output.result_count}" }
                }

                // Search inputs
                div {
                    class: "mb-6 bg-white rounded-xl shadow-sm p-6 border border-gray-200",
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",

                        // Search by type
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "\u{1F50D} Search by type"
                            }
                            div {
                                class: "flex items-center gap-2",
                                select {
                                    value: "{selected_type}",
                                    onchange: move |e| selected_type.set(e.value()),
                                    class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500 bg-white",
                                    option { value: "", "All types" }
                                    for t in type_options.iter() {
                                        option { value: "{t.value}", "{t.name}" }
                                    }
                                }
                                if has_type_filter {
                                    button {
                                        class: "px-3 py-2 bg-gray-100 text-gray-600 rounded-lg hover:bg-gray-200 transition-colors",
                                        title: "Clear type filter",
                                        onclick: move |_| selected_type.set(String::new()),
                                        "\u{2715}"
                                    }
                                }
                            }
                        }

                        // Search by specialization
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "\u{1F50D} Search by specialization"
                            }
                            div {
                                class: "flex items-center gap-2",
                                input {
                                    r#type: "text",
                                    value: "{specialization}",
                                    oninput: move |e| specialization.set(e.value()),
                                    placeholder: "e.g. cardiology, neurology...",
                                    class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-500"
                                }
                                if has_spec_filter {
                                    button {
                                        class: "px-3 py-2 bg-gray-100 text-gray-600 rounded-lg hover:bg-gray-200 transition-colors",
                                        title: "Clear specialization filter",
                                        onclick: move |_| specialization.set(String::new()),
                                        "\u{2715}"
                                    }
                                }
                            }
                        }
                    }

                    if output.is_filter_active {
                        div {
                            class: "mt-4 flex justify-end",
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-600 rounded-lg hover:bg-gray-200 transition-colors text-sm",
                                onclick: move |_| {
                                    selected_type.set(String::new());
                                    specialization.set(String::new());
                                },
                                "\u{2715} Clear all filters"
                            }
                        }
                    }

                    if type_search_failed || spec_search_failed {
                        div {
                            class: "mt-4 bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg text-sm",
                            "Search is temporarily unavailable; showing best-effort results."
                        }
                    }

                    if searching {
                        div {
                            class: "mt-4 flex items-center justify-center gap-2 text-gray-500",
                            LoadingDots {}
                            span { "Searching..." }
                        }
                    }

                    // Search status
                    if output.is_filter_active && !searching {
                        div {
                            class: "mt-4 text-sm text-gray-500 space-y-1",
                            if let Some(by_type) = &type_result {
                                div {
                                    "Type: "
                                    span { class: "font-semibold text-teal-600", "{by_type.professional_type}" }
                                    if !has_spec_filter {
                                        " \u{2014} {by_type.total} professionals"
                                    }
                                }
                            }
                            if let Some(by_spec) = &spec_result {
                                div {
                                    "Specialization: "
                                    span { class: "font-semibold text-teal-600", "{by_spec.specialization}" }
                                    if !has_type_filter {
                                        " \u{2014} {output.result_count} professionals"
                                    }
                                }
                            }
                            if has_type_filter && has_spec_filter {
                                div {
                                    class: "font-semibold text-teal-600",
                                    "Combined results: {output.result_count} professionals"
                                }
                            }
                        }
                    }
                }

                // Professionals grid
                if output.items.is_empty() {
                    div {
                        class: "text-center py-12",
                        if output.is_filter_active {
                            p { class: "text-gray-500 text-lg", "No professionals match your search." }
                        } else {
                            p { class: "text-gray-500 text-lg mb-4", "No professionals found." }
                            Link {
                                to: Route::Register {},
                                class: "inline-block px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 transition-colors",
                                "Add the first professional"
                            }
                        }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for professional in output.items.iter() {
                            ProfessionalCard {
                                key: "{professional.professional_id}",
                                professional: professional.clone()
                            }
                        }
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_directory() -> Result<DirectoryListing, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(crate::api::PROFESSIONALS, &[])
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "directory fetch failed");
            ServerFnError::new(e.to_string())
        })
}

#[server]
async fn fetch_type_catalog() -> Result<TypeCatalogResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(crate::api::TYPE_CATALOG, &[])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn search_by_type(professional_type: String) -> Result<TypeSearchResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(
            crate::api::SEARCH_BY_TYPE,
            &[("professional_type", professional_type.as_str())],
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn search_by_specialization(
    specialization: String,
) -> Result<SpecializationSearchResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(
            crate::api::SEARCH_BY_SPECIALIZATION,
            &[("specialization", specialization.as_str())],
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
