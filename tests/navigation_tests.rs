//! Integration tests for navigation actions.

mod common;

use app_routes::{
    AppRoute, MemoryHistory, NavigationDirection, NavigationPrimitive, NavigationResult,
    Navigator, RouteParams,
};
use common::{init_logging, Call, RecordingPrimitive};

#[test]
fn test_push_invokes_primitive_once_with_resolved_path() {
    init_logging();
    let mut nav = Navigator::new(RecordingPrimitive::mounted());

    let result = nav.push(AppRoute::RaceDetails { id: 7.into() });

    assert_eq!(
        result,
        NavigationResult::Dispatched {
            path: "/race/details/7".to_string()
        }
    );
    assert_eq!(nav.primitive().calls, vec![Call::Push("/race/details/7".to_string())]);
}

#[test]
fn test_replace_invokes_primitive_replace() {
    let mut nav = Navigator::new(RecordingPrimitive::mounted());
    nav.replace(AppRoute::Checkout { event_id: "city run".into() });

    assert_eq!(
        nav.primitive().calls,
        vec![Call::Replace("/payments/checkout/city%20run".to_string())]
    );
}

#[test]
fn test_dynamic_template_push() {
    let mut nav = Navigator::new(RecordingPrimitive::mounted());
    let params = RouteParams::new().with("id", 12).with("race_id", "5k");

    nav.push_path("/events/[id]/race/[race_id]", Some(&params));
    nav.replace_path("/events", None);

    assert_eq!(
        nav.primitive().calls,
        vec![
            Call::Push("/events/12/race/5k".to_string()),
            Call::Replace("/events".to_string()),
        ]
    );
}

#[test]
fn test_unresolved_placeholder_is_still_delegated() {
    let mut nav = Navigator::new(RecordingPrimitive::mounted());
    let result = nav.push_path("/race/details/[id]", None);

    assert_eq!(result.path(), Some("/race/details/[id]"));
    assert_eq!(nav.primitive().pushes(), vec!["/race/details/[id]"]);
}

#[test]
fn test_unmounted_primitive_is_a_noop() {
    let mut nav = Navigator::new(RecordingPrimitive::unmounted());

    assert!(nav.push(AppRoute::Feed).is_unavailable());
    assert!(nav.replace(AppRoute::Profile).is_unavailable());
    assert!(!nav.back());
    assert!(nav.primitive().calls.is_empty());

    nav.primitive_mut().mounted = true;
    assert!(nav.push(AppRoute::Feed).is_dispatched());
    assert_eq!(nav.primitive().pushes(), vec!["/feed"]);
}

#[test]
fn test_back_delegates_only_when_possible() {
    let mut nav = Navigator::new(RecordingPrimitive::mounted());
    assert!(!nav.back());

    nav.push(AppRoute::Events);
    nav.push(AppRoute::EventDetails { id: 3.into() });
    assert!(nav.back());
    assert!(nav.back());
    assert!(!nav.back());

    let backs = nav
        .primitive()
        .calls
        .iter()
        .filter(|call| **call == Call::Back)
        .count();
    assert_eq!(backs, 2);
}

#[test]
fn test_memory_history_round_trip() {
    let mut nav = Navigator::new(MemoryHistory::new());

    nav.push(AppRoute::Login);
    nav.replace(AppRoute::Events);
    nav.push(AppRoute::EventDetails { id: "spring-10k".into() });
    assert_eq!(nav.primitive().current_path(), "/events/spring-10k");
    assert_eq!(nav.primitive().entries(), &["/", "/events", "/events/spring-10k"]);

    assert!(nav.back());
    assert_eq!(nav.primitive().current_path(), "/events");

    let event = nav.primitive_mut().forward().unwrap();
    assert_eq!(event.to, "/events/spring-10k");
    assert_eq!(event.direction, NavigationDirection::Forward);
}

#[test]
fn test_boxed_primitive() {
    let primitive: Box<dyn NavigationPrimitive> = Box::new(MemoryHistory::new());
    let mut nav = Navigator::new(primitive);

    nav.push(AppRoute::ActivityDetails { id: 99.into() });
    assert!(nav.can_go_back());
    assert_eq!(nav.primitive().name(), "MemoryHistory");
}
