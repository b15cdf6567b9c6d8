pub mod fixtures;
pub mod test_session;

pub use recorder::{Received, Recorder};
pub use skill_resolver::{SkillResolver, FIRE_RATE_STEP};
pub use test_session::{TestPeer, TestSession};
