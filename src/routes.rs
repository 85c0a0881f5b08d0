//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::pages::{Analytics, Directory, ProfessionalDetail, Register};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Register {},

        #[route("/directory")]
        Directory {},

        #[route("/professional/:id")]
        ProfessionalDetail { id: String },

        #[route("/analytics")]
        Analytics {},
}
