//! UI components

pub mod check_card;
pub mod check_form;
pub mod check_list;
pub mod dashboard;
pub mod landing;
pub mod status_badge;

use leptos::prelude::RwSignal;

use crate::controller::DashboardController;
use crate::store::DashboardState;

/// Controller bound to the dashboard's reactive state
pub type Controller = DashboardController<RwSignal<DashboardState>>;
