//! The question → celebration → final flow that decides when a burst fires.

use crate::api::types::SoundEvent;

/// Where the greeting is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Stage {
    /// The question is on screen with its two buttons.
    #[default]
    Question = 0,
    /// Answered: burst and chime are playing.
    Celebrating = 1,
    /// The closing message.
    Final = 2,
}

/// What the host must do when the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    /// Fire-and-forget; playback failures are the audio side's business.
    pub sound: SoundEvent,
}

/// Stage machine for the greeting. Time is fed in by the host.
#[derive(Debug, Clone)]
pub struct Proposal {
    stage: Stage,
    celebrate_for: f32,
    elapsed: f32,
}

impl Proposal {
    pub const DEFAULT_CELEBRATION_SECS: f32 = 3.0;

    pub fn new(celebrate_for: f32) -> Self {
        let celebrate_for = if celebrate_for.is_finite() && celebrate_for >= 0.0 {
            celebrate_for
        } else {
            Self::DEFAULT_CELEBRATION_SECS
        };
        Self {
            stage: Stage::Question,
            celebrate_for,
            elapsed: 0.0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The "yes" action. Only the first one counts.
    pub fn confirm(&mut self) -> Option<Celebration> {
        if self.stage != Stage::Question {
            return None;
        }
        self.stage = Stage::Celebrating;
        self.elapsed = 0.0;
        log::info!("proposal: accepted");
        Some(Celebration {
            sound: SoundEvent::CHIME,
        })
    }

    /// Advance the celebration timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Stage {
        if self.stage == Stage::Celebrating && dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
            if self.elapsed >= self.celebrate_for {
                self.stage = Stage::Final;
            }
        }
        self.stage
    }
}

impl Default for Proposal {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELEBRATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_question_and_waits() {
        let mut p = Proposal::default();
        assert_eq!(p.tick(100.0), Stage::Question);
    }

    #[test]
    fn confirm_requests_chime_once() {
        let mut p = Proposal::default();
        assert_eq!(p.confirm(), Some(Celebration { sound: SoundEvent::CHIME }));
        assert_eq!(p.stage(), Stage::Celebrating);
        assert_eq!(p.confirm(), None);
    }

    #[test]
    fn celebration_ends_after_timer() {
        let mut p = Proposal::new(3.0);
        p.confirm();
        assert_eq!(p.tick(1.5), Stage::Celebrating);
        assert_eq!(p.tick(1.0), Stage::Celebrating);
        assert_eq!(p.tick(0.5), Stage::Final);
        assert_eq!(p.confirm(), None);
        assert_eq!(p.tick(10.0), Stage::Final);
    }

    #[test]
    fn bad_durations_fall_back() {
        let mut p = Proposal::new(f32::NAN);
        p.confirm();
        assert_eq!(p.tick(f32::INFINITY), Stage::Celebrating);
        assert_eq!(p.tick(-1.0), Stage::Celebrating);
        assert_eq!(p.tick(3.0), Stage::Final);
    }
}
