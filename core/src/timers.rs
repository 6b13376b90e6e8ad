/// # Timers
/// Two independent 8-bit countdowns. They are only ever decremented by `tick`,
/// which the host calls at `TIMER_HZ` regardless of how many instructions ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements each nonzero timer by one.
    /// Returns whether the tone belongs to the period that just ended, i.e. the
    /// sound timer was nonzero going into the tick.
    pub fn tick(&mut self) -> bool {
        let beeping = self.sound_active();
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
        beeping
    }

    /// A tone should be playing while the sound timer is nonzero
    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
