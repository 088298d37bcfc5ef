use futures::executor::block_on;
use herald::{CloseReason, NotificationEvent, NotificationId};


#[derive(Debug, Clone, PartialEq)]
struct Conversation {
    room: &'static str,
}

#[test]
fn test_action_carries_activation_token_and_correlation() {
    let (center, server) = test_utils::setup::<Conversation>();
    let handle = block_on(center.send(test_utils::request("Ana", "lunch?"))).unwrap();
    center
        .set_correlation(handle, Conversation { room: "friends" })
        .unwrap();

    let id = center.id_of(handle).unwrap();
    server.invoke_action(id, "default", Some("startup-token"));

    let mut delivered = Vec::new();
    let count = center.poll_events_with(|event, data| {
        delivered.push((event.clone(), data.cloned()));
    });

    assert_eq!(count, 1);
    assert_eq!(
        delivered,
        vec![(
            NotificationEvent::ActionInvoked {
                handle,
                action_key: "default".to_string(),
                activation_token: Some("startup-token".to_string()),
            },
            Some(Conversation { room: "friends" }),
        )]
    );
    // actions do not close the notification
    assert!(center.is_live(handle));
    assert!(center.with_correlation(handle, |data| data.is_some()));
}

#[test]
fn test_dismiss_releases_correlation() {
    let (center, server) = test_utils::setup::<Conversation>();
    let handle = block_on(center.send(test_utils::request("Ana", "hi"))).unwrap();
    center
        .set_correlation(handle, Conversation { room: "work" })
        .unwrap();

    server.dismiss(center.id_of(handle).unwrap());
    let events = center.poll_events();

    assert_eq!(
        events,
        vec![NotificationEvent::Closed {
            handle,
            reason: CloseReason::Dismissed,
        }]
    );
    assert!(center.take_correlation(handle).is_none());
}

#[test]
fn test_signals_for_unknown_ids_do_not_crash() {
    let (center, server) = test_utils::setup::<()>();
    let handle = block_on(center.send(test_utils::request("keep", ""))).unwrap();

    let bogus = NotificationId::new(4242).unwrap();
    server.invoke_action(bogus, "default", Some("token"));
    server.dismiss(bogus);

    assert!(center.poll_events().is_empty());
    assert!(center.is_live(handle));
}

#[test]
fn test_events_arrive_in_server_order() {
    let (center, server) = test_utils::setup::<()>();
    let first = block_on(center.send(test_utils::request("1", ""))).unwrap();
    let second = block_on(center.send(test_utils::request("2", ""))).unwrap();

    server.invoke_action(center.id_of(second).unwrap(), "open", None);
    server.dismiss(center.id_of(first).unwrap());

    let handles: Vec<_> = center.poll_events().iter().map(|e| e.handle()).collect();
    assert_eq!(handles, vec![second, first]);
}

#[test]
fn test_platform_does_not_persist_correlation() {
    let (center, _server) = test_utils::setup::<()>();
    assert!(!center.platform_capabilities().persists_correlation_data);
}
