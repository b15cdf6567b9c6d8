/// ROUTING SCENARIOS: one peer's message manager against an in-memory hub
///
/// Covers how `send` picks between local delivery and each transport call,
/// and how `receive` filters host-targeted envelopes by role.

use volley_shared::{
    BinaryCodec, Codec, CodecKind, Envelope, MessageManager, MessageManagerError, PayloadKind,
    ReceiveOutcome, Reliability, SessionMode, Target, TransportError, TransportTarget, Vector2,
};
use volley_test::{
    helpers::fixtures::{input, roster, transform_state},
    LocalTransportHub, Received, Recorder, SentPayload,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn manager(hub: &LocalTransportHub, mode: SessionMode, recorder: &Recorder) -> MessageManager {
    MessageManager::new(
        Box::new(mode),
        CodecKind::Binary.build(),
        Box::new(hub.connect()),
        recorder.handlers(),
    )
}

#[test]
fn local_session_delivers_input_without_producing_bytes() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Local, &recorder);

    let payload = input("P1", 5);
    manager.send(Envelope::input(Target::Local, payload.clone()), Reliability::Reliable);

    assert_eq!(recorder.received(), vec![Received::Input(payload.clone())]);
    assert_eq!(payload.move_vector, Vector2::new(1.0, 0.0));
    assert!(hub.sent().is_empty(), "Local delivery must never reach the transport");
    assert_eq!(manager.stats().sent_local, 1);
    assert_eq!(manager.stats().sent_transport, 0);
}

#[test]
fn local_session_keeps_every_target_in_process() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Local, &recorder);

    for target in [Target::All, Target::Others, Target::Host] {
        manager.send(
            Envelope::players_update(target, roster(&[("P1", "Ana")])),
            Reliability::Reliable,
        );
    }

    assert_eq!(recorder.len(), 3);
    assert!(hub.sent().is_empty());
}

#[test]
fn local_target_stays_in_process_for_networked_peers() {
    init();
    let hub = LocalTransportHub::new();
    hub.set_host(Some(0));
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Client, &recorder);

    manager.send(Envelope::input(Target::Local, input("P2", 9)), Reliability::Unreliable);

    assert_eq!(recorder.received(), vec![Received::Input(input("P2", 9))]);
    assert!(hub.sent().is_empty());
}

#[test]
fn host_resolves_learn_skill() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Host, &recorder);

    let outcome = manager.receive(Envelope::learn_skill(Target::Host, 7, "P2"));

    assert_eq!(outcome, ReceiveOutcome::Dispatched(PayloadKind::LearnSkill));
    assert_eq!(
        recorder.received(),
        vec![Received::LearnSkill {
            skill_id: 7,
            peer_id: "P2".to_string(),
        }]
    );
}

#[test]
fn non_host_ignores_host_targeted_messages() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Client, &recorder);

    let outcome = manager.receive(Envelope::learn_skill(Target::Host, 7, "P2"));

    assert_eq!(outcome, ReceiveOutcome::Filtered);
    assert!(recorder.is_empty());
    assert_eq!(manager.stats().filtered, 1);
    assert_eq!(manager.stats().total_dispatched(), 0);
}

#[test]
fn non_host_still_processes_broadcasts() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Client, &recorder);

    for target in [Target::All, Target::Others, Target::Local] {
        let outcome = manager.receive(Envelope::full_transform_state(
            target,
            transform_state(3, &["P1"]),
        ));
        assert_eq!(
            outcome,
            ReceiveOutcome::Dispatched(PayloadKind::FullTransformState)
        );
    }
    assert_eq!(manager.stats().dispatched(PayloadKind::FullTransformState), 3);
}

#[test]
fn all_target_sends_once_with_encoded_bytes() {
    init();
    let hub = LocalTransportHub::new();
    hub.set_host(Some(0));
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Host, &recorder);

    let envelope = Envelope::players_update(Target::All, roster(&[("P1", "Ana"), ("P2", "Bo")]));
    let expected_bytes = BinaryCodec.encode(&envelope).unwrap();

    manager.send(envelope, Reliability::Unreliable);

    assert_eq!(
        hub.sent(),
        vec![SentPayload {
            from: 0,
            target: TransportTarget::All,
            reliability: Reliability::Unreliable,
            bytes: expected_bytes,
        }]
    );
    // All includes the sender
    assert_eq!(hub.pending(0), 1);
    assert!(recorder.is_empty(), "Transported messages are not self-delivered by send");
}

#[test]
fn others_target_skips_the_sender() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Host, &recorder);
    let _client_a = hub.connect();
    let _client_b = hub.connect();

    manager.send(
        Envelope::transform_state_update(Target::Others, transform_state(1, &["P1", "P2"])),
        Reliability::Unreliable,
    );

    assert_eq!(hub.sent()[0].target, TransportTarget::Others);
    assert_eq!(hub.pending(0), 0);
    assert_eq!(hub.pending(1), 1);
    assert_eq!(hub.pending(2), 1);
}

#[test]
fn host_target_reaches_only_the_host() {
    init();
    let hub = LocalTransportHub::new();
    let _host = hub.connect();
    hub.set_host(Some(0));
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Client, &recorder);
    let _other_client = hub.connect();

    manager.send(Envelope::learn_skill(Target::Host, 3, "P2"), Reliability::Reliable);

    let sent = hub.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target, TransportTarget::Host);
    assert_eq!(sent[0].reliability, Reliability::Reliable);
    assert_eq!(hub.pending(0), 1);
    assert_eq!(hub.pending(1), 0);
    assert_eq!(hub.pending(2), 0);
}

#[test]
fn send_without_host_reports_transport_error() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Client, &recorder);

    let result = manager.try_send(Envelope::learn_skill(Target::Host, 3, "P2"), Reliability::Reliable);

    assert_eq!(
        result,
        Err(MessageManagerError::Transport(TransportError::NoHost))
    );
    assert_eq!(manager.stats().send_failures, 1);

    // The logging variant drops the message instead of failing
    manager.send(Envelope::learn_skill(Target::Host, 3, "P2"), Reliability::Reliable);
    assert_eq!(manager.stats().send_failures, 2);
}

#[test]
fn default_reliability_follows_payload_kind() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = manager(&hub, SessionMode::Host, &recorder);

    manager.send_default(Envelope::transform_state_update(
        Target::All,
        transform_state(1, &["P1"]),
    ));
    manager.send_default(Envelope::full_transform_state(
        Target::All,
        transform_state(1, &["P1"]),
    ));

    let reliabilities: Vec<Reliability> = hub.sent().iter().map(|sent| sent.reliability).collect();
    assert_eq!(
        reliabilities,
        vec![Reliability::Unreliable, Reliability::Reliable]
    );
}

#[test]
fn non_finite_floats_fail_to_send_with_text_codec() {
    init();
    let hub = LocalTransportHub::new();
    let recorder = Recorder::new();
    let mut manager = MessageManager::new(
        Box::new(SessionMode::Host),
        CodecKind::Text.build(),
        Box::new(hub.connect()),
        recorder.handlers(),
    );

    let mut payload = input("P1", 1);
    payload.look_vector = Vector2::new(f32::NAN, 0.0);
    let result = manager.try_send(Envelope::input(Target::All, payload), Reliability::Unreliable);

    assert!(matches!(result, Err(MessageManagerError::Encode(_))));
    assert!(hub.sent().is_empty());
}
