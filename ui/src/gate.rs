//! # Role-gated navigation state machine
//!
//! The app shell resolves exactly one render state from the authentication
//! context: login gate, profile setup, the subscriber claim flow, or one of
//! the two resolved shells. [`resolve_gate`] is the single place that
//! ordering lives; the shell component only maps the returned [`GateState`]
//! to markup.
//!
//! Once resolved, [`page_allowed`] decides per page: admins get the full
//! navigation, everyone else gets only their dues and an access-denied
//! screen for anything more.

use api::UserRole;

/// The pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Operations,
    Dashboard,
    Subscribers,
    Billing,
    MyDues,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Operations => "Operations",
            Page::Dashboard => "Dashboard",
            Page::Subscribers => "Subscribers",
            Page::Billing => "Monthly Billing",
            Page::MyDues => "My Dues",
        }
    }
}

/// Mutually exclusive render states of the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Auth or profile fetch still in flight; render nothing decisive.
    Loading,
    /// No authenticated session.
    LoginGate,
    /// Authenticated but no profile saved yet.
    ProfileSetup,
    /// Authenticated, no profile, and the user asked to link an existing
    /// subscription instead of creating a fresh profile.
    ClaimFlow,
    /// Resolved with the admin navigation set.
    AdminShell,
    /// Resolved with the subscriber (dues-only) navigation set.
    SubscriberShell,
}

/// Resolve the shell's render state.
///
/// `wants_claim` is the explicit user choice to enter the claim flow from
/// the profile-missing state; it is ignored in every other state.
pub fn resolve_gate(
    auth_loading: bool,
    is_authenticated: bool,
    profile_loaded: bool,
    has_profile: bool,
    is_admin: bool,
    wants_claim: bool,
) -> GateState {
    if auth_loading {
        return GateState::Loading;
    }
    if !is_authenticated {
        return GateState::LoginGate;
    }
    if !profile_loaded {
        return GateState::Loading;
    }
    if !has_profile {
        if wants_claim {
            return GateState::ClaimFlow;
        }
        return GateState::ProfileSetup;
    }
    if is_admin {
        GateState::AdminShell
    } else {
        GateState::SubscriberShell
    }
}

/// Whether a resolved role may see a page. Non-admins are confined to their
/// dues; everything else renders the access-denied screen.
pub fn page_allowed(role: UserRole, page: Page) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::User | UserRole::Guest => page == Page::MyDues,
    }
}

/// Navigation items visible to a role, in display order.
pub fn nav_items(role: UserRole) -> &'static [Page] {
    match role {
        UserRole::Admin => &[
            Page::Operations,
            Page::Dashboard,
            Page::Subscribers,
            Page::Billing,
        ],
        UserRole::User | UserRole::Guest => &[Page::MyDues],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins() {
        assert_eq!(
            resolve_gate(true, true, true, true, true, false),
            GateState::Loading
        );
        // Profile still in flight after auth resolved.
        assert_eq!(
            resolve_gate(false, true, false, false, false, false),
            GateState::Loading
        );
    }

    #[test]
    fn test_unauthenticated_hits_login_gate() {
        assert_eq!(
            resolve_gate(false, false, false, false, false, false),
            GateState::LoginGate
        );
        // wants_claim is irrelevant without a session.
        assert_eq!(
            resolve_gate(false, false, true, false, false, true),
            GateState::LoginGate
        );
    }

    #[test]
    fn test_unresolved_profile_fetch_never_forces_profile_setup() {
        // profile_loaded only flips once the fetch succeeds; until then an
        // established user (admin included) must stay in Loading rather
        // than being sent to profile setup.
        assert_eq!(
            resolve_gate(false, true, false, false, true, false),
            GateState::Loading
        );
        assert_ne!(
            resolve_gate(false, true, false, false, false, false),
            GateState::ProfileSetup
        );
    }

    #[test]
    fn test_missing_profile_forks_on_claim_choice() {
        assert_eq!(
            resolve_gate(false, true, true, false, false, false),
            GateState::ProfileSetup
        );
        assert_eq!(
            resolve_gate(false, true, true, false, false, true),
            GateState::ClaimFlow
        );
    }

    #[test]
    fn test_resolved_shells() {
        assert_eq!(
            resolve_gate(false, true, true, true, true, false),
            GateState::AdminShell
        );
        assert_eq!(
            resolve_gate(false, true, true, true, false, false),
            GateState::SubscriberShell
        );
        // A saved profile also ends the claim flow.
        assert_eq!(
            resolve_gate(false, true, true, true, false, true),
            GateState::SubscriberShell
        );
    }

    #[test]
    fn test_non_admin_sees_only_dues() {
        for role in [UserRole::User, UserRole::Guest] {
            assert!(page_allowed(role, Page::MyDues));
            assert!(!page_allowed(role, Page::Operations));
            assert!(!page_allowed(role, Page::Dashboard));
            assert!(!page_allowed(role, Page::Subscribers));
            assert!(!page_allowed(role, Page::Billing));
            assert_eq!(nav_items(role), &[Page::MyDues]);
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        for page in [
            Page::Operations,
            Page::Dashboard,
            Page::Subscribers,
            Page::Billing,
            Page::MyDues,
        ] {
            assert!(page_allowed(UserRole::Admin, page));
        }
        assert_eq!(nav_items(UserRole::Admin).len(), 4);
    }
}
