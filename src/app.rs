//! The client's route table.
//!
//! Every screen the app can navigate to is a variant of [`AppRoute`].
//! Screens that need an identifier carry it as a field, so
//! `AppRoute::RaceDetails` cannot be pushed without an `id`.

#[cfg(feature = "deep-link")]
use crate::{DeepLinkMatcher, RouteError, RouteKey};

crate::route_table! {
    /// Navigable destinations of the race-tracking client.
    pub enum AppRoute {
        Home => "/",

        // Authentication
        Login => "/auth/login",
        Register => "/auth/register",
        ForgotPassword => "/auth/forgot-password",
        ResetPassword { token } => "/auth/reset-password/[token]",

        // Event browsing
        Events => "/events",
        EventSearch => "/events/search",
        EventDetails { id } => "/events/[id]",
        EventParticipants { id } => "/events/[id]/participants",
        EventRace { id, race_id } => "/events/[id]/race/[race_id]",

        // Races and activity tracking
        RaceDetails { id } => "/race/details/[id]",
        RaceTracking { id } => "/race/tracking/[id]",
        RaceResults { id } => "/race/results/[id]",
        ActivityHistory => "/activity",
        ActivityDetails { id } => "/activity/[id]",

        // Social feed
        Feed => "/feed",
        FeedPost { id } => "/feed/post/[id]",
        FeedComments { id } => "/feed/post/[id]/comments",

        // Payments
        Checkout { event_id } => "/payments/checkout/[event_id]",
        PaymentStatus { payment_id } => "/payments/status/[payment_id]",
        PaymentHistory => "/payments/history",

        // Profile
        Profile => "/profile",
        ProfileEdit => "/profile/edit",
        UserProfile { user_id } => "/profile/user/[user_id]",
        Settings => "/profile/settings",
    }
}

#[cfg(feature = "deep-link")]
impl AppRoute {
    /// Deep-link matcher over the whole table.
    pub fn matcher() -> Result<DeepLinkMatcher, RouteError> {
        DeepLinkMatcher::from_templates(Self::TEMPLATES.iter().copied())
    }

    /// Turn an incoming link into a typed route, if it names a known screen.
    ///
    /// ```
    /// use app_routes::AppRoute;
    ///
    /// let matcher = AppRoute::matcher().unwrap();
    /// assert_eq!(
    ///     AppRoute::from_deep_link(&matcher, "/race/details/42?ref=push"),
    ///     Some(AppRoute::RaceDetails { id: "42".into() })
    /// );
    /// ```
    pub fn from_deep_link(matcher: &DeepLinkMatcher, path: &str) -> Option<Self> {
        let matched = matcher.match_path(path)?;
        let route = Self::from_parts(&matched.template, &matched.params)?;
        debug_assert_eq!(route.template(), matched.template);
        Some(route)
    }
}
