//! Sidebar navigation and language switcher

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_language, Language};

/// Sidebar with the main navigation links
#[component]
pub fn Sidebar() -> Element {
    let lang = use_language().get();

    rsx! {
        aside {
            class: "bg-white border-b md:border-b-0 md:border-e border-gray-200 md:w-64 md:min-h-screen flex md:flex-col items-center md:items-stretch justify-between p-4",

            div {
                div {
                    class: "hidden md:flex items-center gap-2 px-2 py-4 mb-4",
                    span { class: "text-2xl", "\u{1F3E5}" }
                    span {
                        class: "font-bold text-gray-900",
                        {heading(lang)}
                    }
                }

                nav {
                    class: "flex md:flex-col gap-1",
                    NavLink { to: Route::Register {}, icon: "\u{2795}", label: nav_label(lang, NavItem::Register) }
                    NavLink { to: Route::Directory {}, icon: "\u{1F465}", label: nav_label(lang, NavItem::Directory) }
                    NavLink { to: Route::Analytics {}, icon: "\u{1F4CA}", label: nav_label(lang, NavItem::Analytics) }
                }
            }

            LanguageSwitcher {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    icon: &'static str,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "flex items-center gap-3 px-3 py-2 rounded-lg text-gray-700 hover:bg-teal-50 hover:text-teal-700 transition-colors",
            active_class: "bg-teal-50 text-teal-700 font-medium",
            span { "{props.icon}" }
            span { class: "text-sm", "{props.label}" }
        }
    }
}

/// Toggles the interface language between English and Arabic
#[component]
fn LanguageSwitcher() -> Element {
    let language = use_language();
    let lang = language.get();

    rsx! {
        button {
            class: "flex items-center gap-2 px-3 py-2 rounded-lg text-sm text-gray-600 hover:bg-gray-100 transition-colors",
            onclick: move |_| language.toggle(),
            span { "\u{1F310}" }
            "{lang.switch_label()}"
        }
    }
}

enum NavItem {
    Register,
    Directory,
    Analytics,
}

fn heading(lang: Language) -> &'static str {
    match lang {
        Language::English => "Staff Directory",
        // دليل الكوادر
        Language::Arabic => "\u{62F}\u{644}\u{64A}\u{644} \u{627}\u{644}\u{643}\u{648}\u{627}\u{62F}\u{631}",
    }
}

fn nav_label(lang: Language, item: NavItem) -> &'static str {
    match (lang, item) {
        (Language::English, NavItem::Register) => "Register",
        (Language::English, NavItem::Directory) => "Directory",
        (Language::English, NavItem::Analytics) => "Analytics",
        // تسجيل
        (Language::Arabic, NavItem::Register) => "\u{62A}\u{633}\u{62C}\u{64A}\u{644}",
        // الدليل
        (Language::Arabic, NavItem::Directory) => "\u{627}\u{644}\u{62F}\u{644}\u{64A}\u{644}",
        // التحليلات
        (Language::Arabic, NavItem::Analytics) => "\u{627}\u{644}\u{62A}\u{62D}\u{644}\u{64A}\u{644}\u{627}\u{62A}",
    }
}
