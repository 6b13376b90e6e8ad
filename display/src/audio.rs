use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired, AudioStatus};

/// A square wave alternating between `volume` and `-volume`
pub struct SquareWave {
    sample_index: u32,
    half_period: u32,
    volume: i16,
}

impl SquareWave {
    pub fn new(sample_rate: u32, tone: u32, volume: i16) -> Self {
        SquareWave {
            sample_index: 0,
            half_period: (sample_rate / tone.max(1) / 2).max(1),
            volume,
        }
    }
}

impl AudioCallback for SquareWave {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        for sample in out.iter_mut() {
            *sample = if (self.sample_index / self.half_period) % 2 == 1 {
                self.volume
            } else {
                -self.volume
            };
            self.sample_index = self.sample_index.wrapping_add(1);
        }
    }
}

/// # Audio
/// Plays a constant tone while the Chip-8 sound timer is nonzero
pub struct Audio {
    device: AudioDevice<SquareWave>,
}

impl Audio {
    /// Opens a mono playback device, initially paused.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to play
    /// * `tone` the frequency of the tone in Hz
    /// * `sample_rate` samples per second requested from the device
    /// * `volume` the amplitude of the wave
    pub fn new(sdl: &sdl2::Sdl, tone: u32, sample_rate: u32, volume: i16) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(sample_rate as i32),
            channels: Some(1),
            samples: Some(512),
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| {
            log::debug!("opened audio device at {} Hz", spec.freq);
            SquareWave::new(spec.freq as u32, tone, volume)
        })?;
        Ok(Audio { device })
    }

    /// Starts or stops the tone
    pub fn set_playing(&mut self, playing: bool) {
        match (playing, self.device.status()) {
            (true, AudioStatus::Playing) | (false, AudioStatus::Paused) => {}
            (true, _) => self.device.resume(),
            (false, _) => self.device.pause(),
        }
    }
}
