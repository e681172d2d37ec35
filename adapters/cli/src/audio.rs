//! Buzzer backends for the terminal adapter.
//!
//! The default backend rings the terminal bell once per burst, which keeps
//! the binary free of audio-device requirements. The `synth-audio` feature
//! swaps in a synthesized square wave at the buzzer pitch.

use anyhow::Result as AnyResult;
use platform_jumper_presentation::ToneSink;

/// Seconds of tone per square-wave pulse; one pulse toggles the square wave
/// every 500 microseconds, so this is half the 1 kHz period.
#[cfg(feature = "synth-audio")]
const SECONDS_PER_PULSE: f32 = 0.0005;

#[cfg(feature = "synth-audio")]
const SAMPLE_RATE: u32 = 44_100;

#[cfg(not(feature = "synth-audio"))]
pub(crate) struct BellTone;

#[cfg(not(feature = "synth-audio"))]
impl BellTone {
    pub(crate) fn new() -> AnyResult<Self> {
        Ok(Self)
    }
}

#[cfg(not(feature = "synth-audio"))]
impl ToneSink for BellTone {
    fn beep(&mut self, _pulses: u16) -> AnyResult<()> {
        use std::io::Write;

        let mut out = std::io::stdout();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(feature = "synth-audio")]
pub(crate) struct SynthTone {
    // Dropping the stream silences the device, so it rides along unused.
    _stream: rodio::OutputStream,
    handle: rodio::OutputStreamHandle,
}

#[cfg(feature = "synth-audio")]
impl SynthTone {
    pub(crate) fn new() -> AnyResult<Self> {
        let (stream, handle) = rodio::OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

#[cfg(feature = "synth-audio")]
impl ToneSink for SynthTone {
    fn beep(&mut self, pulses: u16) -> AnyResult<()> {
        use fundsp::hacker::*;

        let sink = rodio::Sink::try_new(&self.handle)?;
        let seconds = f32::from(pulses) * SECONDS_PER_PULSE;
        let sample_count = (SAMPLE_RATE as f32 * seconds) as usize;
        let mut wave = square_hz(1_000.0) * 0.2;
        let mut samples = Vec::with_capacity(sample_count);
        for _ in 0..sample_count {
            samples.push(wave.get_mono());
        }
        sink.append(rodio::buffer::SamplesBuffer::new(1, SAMPLE_RATE, samples));
        sink.sleep_until_end();
        Ok(())
    }
}
