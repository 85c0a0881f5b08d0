//! Delete confirmation modal

use dioxus::prelude::*;

/// Props for DeleteConfirmModal
#[derive(Props, Clone, PartialEq)]
pub struct DeleteConfirmModalProps {
    /// Name shown in the confirmation text
    pub name: String,
    pub is_deleting: bool,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Modal asking the user to confirm a destructive delete
#[component]
pub fn DeleteConfirmModal(props: DeleteConfirmModalProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            div {
                class: "bg-white rounded-xl shadow-xl max-w-md w-full p-6",

                div {
                    class: "flex items-center gap-3 mb-4",
                    span { class: "text-3xl", "\u{26A0}\u{FE0F}" }
                    h2 { class: "text-lg font-semibold text-gray-900", "Delete professional" }
                }

                p {
                    class: "text-gray-600 mb-6",
                    "This will permanently remove "
                    span { class: "font-medium text-gray-900", "{props.name}" }
                    " and all extracted data from the directory. This action cannot be undone."
                }

                div {
                    class: "flex justify-end gap-3",
                    button {
                        class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                        disabled: props.is_deleting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors disabled:opacity-50",
                        disabled: props.is_deleting,
                        onclick: move |_| props.on_confirm.call(()),
                        if props.is_deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
