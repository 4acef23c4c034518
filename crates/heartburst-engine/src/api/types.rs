/// Identifies one burst started on a `BurstEngine`. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BurstHandle(pub u32);

/// Lifecycle of a burst. `Terminated` is final for a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurstState {
    /// Created, no frame run yet.
    #[default]
    Idle,
    /// Particles alive and a frame is scheduled.
    Running,
    /// All particles dead, or stopped by the host.
    Terminated,
}

/// A sound request emitted by the host logic.
/// The numeric value maps to a sound the JS side knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// Ascending confirmation chime played when the question is answered.
    pub const CHIME: SoundEvent = SoundEvent(1);
}
