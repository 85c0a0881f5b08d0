//! Analytics page - aggregate directory statistics

use dioxus::prelude::*;

use crate::components::LoadingSpinner;
use crate::types::StatsResponse;

/// Analytics page with directory-wide metrics
#[component]
pub fn Analytics() -> Element {
    let stats = use_server_future(fetch_stats)?;

    rsx! {
        div {
            class: "p-6",
            div {
                class: "max-w-7xl mx-auto",

                div {
                    class: "mb-8",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "\u{1F4CA} Analytics" }
                    p { class: "text-gray-600", "Directory-wide statistics computed by the service" }
                }

                match &*stats.value().read() {
                    Some(Ok(stats)) => rsx! {
                        StatsView { stats: stats.clone() }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading analytics: {e}"
                        }
                    },
                    None => rsx! {
                        div {
                            class: "py-24 flex justify-center",
                            LoadingSpinner { message: "Loading analytics..." }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatsViewProps {
    stats: StatsResponse,
}

#[component]
fn StatsView(props: StatsViewProps) -> Element {
    let stats = &props.stats;
    let avg_experience = stats.average_years_of_experience.round() as i64;

    let top_specializations = sorted_desc(&stats.top_specializations, 10);
    let type_distribution = sorted_desc(&stats.by_professional_type, usize::MAX);
    let max_specialization_count = top_specializations
        .first()
        .map(|(_, count)| *count)
        .unwrap_or(1)
        .max(1);

    rsx! {
        // Key metrics
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6 mb-8",
            StatCard { title: "Total professionals", value: stats.total_professionals, icon: "\u{1F465}" }
            StatCard { title: "Specializations", value: stats.total_specializations, icon: "\u{1F3C5}" }
            StatCard { title: "Avg. years of experience", value: avg_experience as u64, icon: "\u{1F4C5}" }
            StatCard { title: "With SCFHS license", value: stats.professionals_with_scfhs_license, icon: "\u{1F6E1}\u{FE0F}" }
            StatCard { title: "With certifications", value: stats.professionals_with_certifications, icon: "\u{1F4DC}" }
        }

        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-8",

            // Top specializations
            div {
                class: "bg-white rounded-xl shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Top specializations" }
                if top_specializations.is_empty() {
                    p { class: "text-gray-500 text-sm", "No specialization data yet." }
                } else {
                    div {
                        class: "space-y-3",
                        for (name, count) in top_specializations.iter() {
                            div {
                                div {
                                    class: "flex items-baseline justify-between mb-1 text-sm",
                                    span { class: "text-gray-700", "{name}" }
                                    span { class: "text-gray-500", "{count}" }
                                }
                                div {
                                    class: "h-2 bg-gray-100 rounded-full overflow-hidden",
                                    div {
                                        class: "h-full bg-teal-500 rounded-full",
                                        style: "width: {100 * count / max_specialization_count}%"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Professional types
            div {
                class: "bg-white rounded-xl shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "By professional type" }
                if type_distribution.is_empty() {
                    p { class: "text-gray-500 text-sm", "No type data yet." }
                } else {
                    div {
                        class: "divide-y divide-gray-100",
                        for (name, count) in type_distribution.iter() {
                            div {
                                class: "flex items-center justify-between py-3",
                                span { class: "text-gray-700 capitalize", "{name}" }
                                span {
                                    class: "px-3 py-1 bg-teal-50 text-teal-700 rounded-full text-sm font-medium",
                                    "{count}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: u64,
    icon: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                span { class: "text-2xl", "{props.icon}" }
            }
        }
    }
}

/// Sort a name->count map descending by count (ties by name for stable
/// rendering) and take the first `limit` entries.
fn sorted_desc(
    counts: &std::collections::HashMap<String, u64>,
    limit: usize,
) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

#[server]
async fn fetch_stats() -> Result<StatsResponse, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get(crate::api::STATS, &[])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sorted_desc_orders_and_truncates() {
        let mut counts = HashMap::new();
        counts.insert("Cardiology".to_string(), 8);
        counts.insert("Neurology".to_string(), 5);
        counts.insert("Dermatology".to_string(), 8);
        counts.insert("Pediatrics".to_string(), 1);

        let sorted = sorted_desc(&counts, 3);
        assert_eq!(
            sorted,
            vec![
                ("Cardiology".to_string(), 8),
                ("Dermatology".to_string(), 8),
                ("Neurology".to_string(), 5),
            ]
        );
    }
}
