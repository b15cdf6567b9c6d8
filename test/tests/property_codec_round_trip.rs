/// PROPERTY-BASED TESTS: codec round trips
///
/// Uses proptest to check that decoding what a codec encoded gives back the
/// original value, for every payload kind and both codecs independently.
///
/// Floats are kept finite: the text codec rejects NaN and infinities at
/// encode time, and NaN never compares equal to itself.

use proptest::prelude::*;
use volley_shared::{
    BinaryCodec, CodecKind, EntitySnapshot, Envelope, InputPayload, LearnSkillPayload, PeerInfo,
    PlayersRosterPayload, Target, TextCodec, TransformStatePayload, Vector2,
};

fn finite_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0f32),
        Just(-0.0f32),
        Just(f32::MAX),
        Just(f32::MIN_POSITIVE),
        -1.0e6f32..1.0e6f32,
    ]
}

fn vector2() -> impl Strategy<Value = Vector2> {
    (finite_f32(), finite_f32()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn peer_id() -> impl Strategy<Value = String> {
    "\\PC{0,12}"
}

fn target() -> impl Strategy<Value = Target> {
    prop_oneof![
        Just(Target::Local),
        Just(Target::All),
        Just(Target::Others),
        Just(Target::Host),
    ]
}

fn input_payload() -> impl Strategy<Value = InputPayload> {
    (peer_id(), any::<u32>(), vector2(), vector2()).prop_map(
        |(peer_id, tick, move_vector, look_vector)| InputPayload {
            peer_id,
            tick,
            move_vector,
            look_vector,
        },
    )
}

fn entity_snapshot() -> impl Strategy<Value = EntitySnapshot> {
    (
        (peer_id(), peer_id(), any::<i32>(), any::<i32>(), any::<i32>()),
        (
            finite_f32(),
            finite_f32(),
            finite_f32(),
            finite_f32(),
            finite_f32(),
            vector2(),
        ),
    )
        .prop_map(
            |(
                (peer_id, name, max_hp, current_hp, damage),
                (move_speed, bullet_speed, shoot_frequency, shoot_range, critical_rate, position),
            )| EntitySnapshot {
                peer_id,
                name,
                max_hp,
                current_hp,
                move_speed,
                bullet_speed,
                damage,
                shoot_frequency,
                shoot_range,
                critical_rate,
                position,
            },
        )
}

fn transform_state() -> impl Strategy<Value = TransformStatePayload> {
    (any::<u32>(), prop::collection::vec(entity_snapshot(), 0..4))
        .prop_map(|(tick, entities)| TransformStatePayload { tick, entities })
}

fn roster() -> impl Strategy<Value = PlayersRosterPayload> {
    prop::collection::vec(
        (peer_id(), peer_id()).prop_map(|(id, name)| PeerInfo { id, name }),
        0..6,
    )
    .prop_map(|players| PlayersRosterPayload { players })
}

fn learn_skill() -> impl Strategy<Value = LearnSkillPayload> {
    (any::<u32>(), peer_id()).prop_map(|(skill_id, peer_id)| LearnSkillPayload { skill_id, peer_id })
}

fn envelope() -> impl Strategy<Value = Envelope> {
    prop_oneof![
        (target(), input_payload()).prop_map(|(target, input)| Envelope::input(target, input)),
        (target(), transform_state())
            .prop_map(|(target, state)| Envelope::transform_state_update(target, state)),
        (target(), transform_state())
            .prop_map(|(target, state)| Envelope::full_transform_state(target, state)),
        (target(), roster()).prop_map(|(target, roster)| Envelope::players_update(target, roster)),
        (target(), learn_skill()).prop_map(|(target, learn_skill)| {
            Envelope::learn_skill(target, learn_skill.skill_id, learn_skill.peer_id)
        }),
        (target(), transform_state())
            .prop_map(|(target, state)| Envelope::fire_rate_state_update(target, state)),
    ]
}

proptest! {
    /// Every envelope survives a trip through either codec
    #[test]
    fn prop_envelope_round_trips(envelope in envelope()) {
        for kind in [CodecKind::Binary, CodecKind::Text] {
            let codec = kind.build();
            let bytes = codec.encode(&envelope).unwrap();
            prop_assert_eq!(codec.decode(&bytes).unwrap(), envelope.clone());
        }
    }

    /// Bare payloads round trip when the caller names the type
    #[test]
    fn prop_typed_payloads_round_trip(
        input in input_payload(),
        state in transform_state(),
        roster in roster(),
        learn_skill in learn_skill(),
    ) {
        let binary = BinaryCodec;
        prop_assert_eq!(binary.decode_payload::<InputPayload>(&binary.encode_payload(&input)).unwrap(), input.clone());
        prop_assert_eq!(binary.decode_payload::<TransformStatePayload>(&binary.encode_payload(&state)).unwrap(), state.clone());
        prop_assert_eq!(binary.decode_payload::<PlayersRosterPayload>(&binary.encode_payload(&roster)).unwrap(), roster.clone());
        prop_assert_eq!(binary.decode_payload::<LearnSkillPayload>(&binary.encode_payload(&learn_skill)).unwrap(), learn_skill.clone());

        let text = TextCodec;
        prop_assert_eq!(text.decode_payload::<InputPayload>(&text.encode_payload(&input).unwrap()).unwrap(), input);
        prop_assert_eq!(text.decode_payload::<TransformStatePayload>(&text.encode_payload(&state).unwrap()).unwrap(), state);
        prop_assert_eq!(text.decode_payload::<PlayersRosterPayload>(&text.encode_payload(&roster).unwrap()).unwrap(), roster);
        prop_assert_eq!(text.decode_payload::<LearnSkillPayload>(&text.encode_payload(&learn_skill).unwrap()).unwrap(), learn_skill);
    }

    /// A truncated binary message is rejected, never misread
    #[test]
    fn prop_truncated_binary_is_rejected(envelope in envelope(), cut in 1usize..8) {
        let codec = CodecKind::Binary.build();
        let bytes = codec.encode(&envelope).unwrap();
        prop_assume!(bytes.len() > cut);
        let truncated = &bytes[..bytes.len() - cut];
        prop_assert!(codec.decode(truncated).is_err());
    }
}
