use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AudioContext;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_secs: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

// Gain lands on 0.01 rather than zero: exponential ramps reject a zero target.
pub const UI_BLIP: ToneSpec = ToneSpec {
    start_hz: 800.0,
    end_hz: 400.0,
    duration_secs: 0.1,
    start_gain: 0.1,
    end_gain: 0.01,
};

pub trait ToneSink {
    fn play(&self, spec: &ToneSpec);
}

/// The sound preference gates before the sink so a muted page never
/// touches the audio stack at all.
pub fn play_if_enabled<S: ToneSink>(enabled: bool, sink: &S, spec: &ToneSpec) {
    if enabled {
        sink.play(spec);
    }
}

#[derive(Clone, Copy, Default)]
pub struct WebAudioSink;

impl ToneSink for WebAudioSink {
    fn play(&self, spec: &ToneSpec) {
        if let Err(err) = schedule_tone(spec) {
            // No audio capability is a degraded mode, not an error the user sees.
            log::debug!("feedback tone skipped: {err:?}");
        }
    }
}

fn schedule_tone(spec: &ToneSpec) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let now = ctx.current_time();
    let end = now + spec.duration_secs;
    oscillator.frequency().set_value_at_time(spec.start_hz, now)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(spec.end_hz, end)?;
    gain.gain().set_value_at_time(spec.start_gain, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(spec.end_gain, end)?;

    // Each blip owns its context; closing from the ended callback keeps
    // repeated clicks from accumulating live contexts.
    let done_ctx = ctx.clone();
    let on_ended = Closure::<dyn FnMut()>::new(move || {
        let _ = done_ctx.close();
    });
    oscillator.set_onended(Some(on_ended.as_ref().unchecked_ref()));
    on_ended.forget();

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        played: RefCell<Vec<ToneSpec>>,
    }

    impl ToneSink for RecordingSink {
        fn play(&self, spec: &ToneSpec) {
            self.played.borrow_mut().push(*spec);
        }
    }

    #[test]
    fn muted_page_never_reaches_the_sink() {
        let sink = RecordingSink::default();
        play_if_enabled(false, &sink, &UI_BLIP);
        play_if_enabled(false, &sink, &UI_BLIP);
        assert!(sink.played.borrow().is_empty());
    }

    #[test]
    fn enabled_page_requests_exactly_one_blip() {
        let sink = RecordingSink::default();
        play_if_enabled(true, &sink, &UI_BLIP);

        let played = sink.played.borrow();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].start_hz, 800.0);
        assert_eq!(played[0].end_hz, 400.0);
        assert_eq!(played[0].duration_secs, 0.1);
    }

    #[test]
    fn blip_envelope_decays() {
        assert!(UI_BLIP.start_gain > UI_BLIP.end_gain);
        assert!(UI_BLIP.end_gain > 0.0);
    }
}
