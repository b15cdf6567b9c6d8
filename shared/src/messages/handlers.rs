use crate::{
    messages::{
        envelope::{Envelope, Payload},
        outbox::Outbox,
        payloads::{InputPayload, PlayersRosterPayload, TransformStatePayload},
    },
    types::{PeerId, SkillId},
};

/// Consumes per-tick input.
pub trait InputHandler {
    fn on_input(&mut self, input: InputPayload, outbox: &mut Outbox);
}

/// Owns character and transform state.
pub trait CharacterHandler {
    fn on_transform_state_update(&mut self, state: TransformStatePayload, outbox: &mut Outbox);
    fn on_full_transform_state(&mut self, state: TransformStatePayload, outbox: &mut Outbox);
    fn on_players_update(&mut self, roster: PlayersRosterPayload, outbox: &mut Outbox);
    /// Receives the whole envelope, not just the payload
    fn on_fire_rate_state_update(&mut self, envelope: Envelope, outbox: &mut Outbox);
}

/// Resolves skill choices. Only ever reached on the host or a local session.
pub trait SkillHandler {
    fn on_learn_skill(&mut self, skill_id: SkillId, peer_id: PeerId, outbox: &mut Outbox);
}

/// Handler that ignores everything it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreHandler;

impl InputHandler for IgnoreHandler {
    fn on_input(&mut self, _: InputPayload, _: &mut Outbox) {}
}

impl CharacterHandler for IgnoreHandler {
    fn on_transform_state_update(&mut self, _: TransformStatePayload, _: &mut Outbox) {}
    fn on_full_transform_state(&mut self, _: TransformStatePayload, _: &mut Outbox) {}
    fn on_players_update(&mut self, _: PlayersRosterPayload, _: &mut Outbox) {}
    fn on_fire_rate_state_update(&mut self, _: Envelope, _: &mut Outbox) {}
}

impl SkillHandler for IgnoreHandler {
    fn on_learn_skill(&mut self, _: SkillId, _: PeerId, _: &mut Outbox) {}
}

/// The dispatch table: one handler per payload kind.
pub struct Handlers {
    input: Box<dyn InputHandler>,
    character: Box<dyn CharacterHandler>,
    skill: Box<dyn SkillHandler>,
}

impl Default for Handlers {
    fn default() -> Self {
        Self {
            input: Box::new(IgnoreHandler),
            character: Box::new(IgnoreHandler),
            skill: Box::new(IgnoreHandler),
        }
    }
}

impl Handlers {
    pub fn new(
        input: Box<dyn InputHandler>,
        character: Box<dyn CharacterHandler>,
        skill: Box<dyn SkillHandler>,
    ) -> Self {
        Self {
            input,
            character,
            skill,
        }
    }

    pub fn with_input<H: InputHandler + 'static>(mut self, handler: H) -> Self {
        self.input = Box::new(handler);
        self
    }

    pub fn with_character<H: CharacterHandler + 'static>(mut self, handler: H) -> Self {
        self.character = Box::new(handler);
        self
    }

    pub fn with_skill<H: SkillHandler + 'static>(mut self, handler: H) -> Self {
        self.skill = Box::new(handler);
        self
    }

    // Adding a payload kind breaks this match until it is routed somewhere.
    pub(crate) fn dispatch(&mut self, envelope: Envelope, outbox: &mut Outbox) {
        let target = envelope.target();
        match envelope.into_payload() {
            Payload::Input(input) => self.input.on_input(input, outbox),
            Payload::TransformStateUpdate(state) => {
                self.character.on_transform_state_update(state, outbox)
            }
            Payload::FullTransformState(state) => {
                self.character.on_full_transform_state(state, outbox)
            }
            Payload::PlayersUpdate(roster) => self.character.on_players_update(roster, outbox),
            Payload::LearnSkill(learn_skill) => {
                self.skill
                    .on_learn_skill(learn_skill.skill_id, learn_skill.peer_id, outbox)
            }
            Payload::FireRateStateUpdate(state) => self
                .character
                .on_fire_rate_state_update(Envelope::fire_rate_state_update(target, state), outbox),
        }
    }
}
