//! Shared UI for the workspace: authentication context, the role-gated
//! navigation state machine, and the small widgets every page composes.

mod auth;
pub use auth::{refresh_auth, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod gate;
pub use gate::{nav_items, page_allowed, resolve_gate, GateState, Page};

mod navbar;
pub use navbar::Navbar;

pub mod pickers;
pub use pickers::{month_name_ar, month_name_en, year_options, MonthSelect, YearSelect};

pub mod toast;
pub use toast::{use_toasts, ToastHost, ToastLevel, ToastProvider};

pub mod whatsapp;
