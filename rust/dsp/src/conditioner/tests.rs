use super::{Conditioner, Options};
use crate::squelch::SquelchSettings;
use crate::{Error, FilterState};
use more_asserts::{assert_gt, assert_lt};
use rtx_dsp_util::test_utils::{sine_samples, white_noise_samples};

#[test]
fn biased_silence_keeps_squelch_closed() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    for _ in 0..10 {
        let mut buffer = [8000; 256];
        conditioner.process(&mut buffer);
        assert!(buffer.iter().all(|x| *x == 0));
        assert!(!conditioner.squelch_open());
    }
    assert_eq!(conditioner.envelope(), 0);
}

#[test]
fn raw_bias_opens_squelch_without_dc_removal() {
    let mut conditioner = Conditioner::new(Options {
        remove_dc: false,
        ..Default::default()
    })
    .unwrap();
    let mut buffer = [8000; 256];
    conditioner.process(&mut buffer);
    assert_eq!(buffer, [8000; 256]);
    assert!(conditioner.squelch_open());
}

#[test]
#[cfg_attr(miri, ignore)]
fn tone_opens_squelch() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let mut signal = sine_samples(48000, 1.0 / 48.0, 10000.0, 2000.0);
    for chunk in signal.chunks_mut(128) {
        conditioner.process(chunk);
    }
    assert!(conditioner.squelch_open());
    // A 10000 peak sine has a mean power of 10000^2 / 2 >> 14, about 3050.
    assert_gt!(conditioner.envelope(), 2500);
    assert_lt!(conditioner.envelope(), 3600);

    let mut silence = [0; 4800];
    conditioner.process(&mut silence);
    assert!(!conditioner.squelch_open());
}

#[test]
fn phase_inversion() {
    let mut conditioner = Conditioner::new(Options {
        remove_dc: false,
        invert_phase: true,
        ..Default::default()
    })
    .unwrap();
    let mut buffer = [1, -2, 300, i16::MIN];
    conditioner.process(&mut buffer);
    assert_eq!(buffer, [-1, 2, -300, i16::MIN]);
}

#[test]
fn dc_removal_then_inversion() {
    let input = white_noise_samples(512, 4000);

    let mut expected = input.clone();
    let mut state = FilterState::new();
    crate::dc_removal(&mut state, &mut expected);
    crate::invert_phase(&mut expected);

    let mut conditioner = Conditioner::new(Options {
        invert_phase: true,
        ..Default::default()
    })
    .unwrap();
    let mut buffer = input;
    conditioner.process(&mut buffer);
    assert_eq!(buffer, expected);
    assert_eq!(conditioner.filter(), &state);
}

#[test]
fn rejects_invalid_options() {
    let inverted = Options {
        squelch: SquelchSettings {
            open_threshold: 100,
            close_threshold: 200,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        Conditioner::new(inverted),
        Err(Error::InvertedThresholds { .. })
    ));

    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let slow = Options {
        squelch: SquelchSettings {
            alpha: 40,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        conditioner.set_options(slow),
        Err(Error::AlphaOutOfRange { alpha: 40 })
    );
    assert_eq!(conditioner.options(), &Options::default());
}

#[test]
fn reenabling_dc_removal_restarts_filter() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let mut buffer = [100, 200, 300];
    conditioner.process(&mut buffer);
    assert!(conditioner.filter().is_initialised());

    let bypass = Options {
        remove_dc: false,
        ..Default::default()
    };
    conditioner.set_options(bypass).unwrap();
    let mut buffer = [5000; 8];
    conditioner.process(&mut buffer);
    assert_eq!(buffer, [5000; 8]);

    conditioner.set_options(Options::default()).unwrap();
    assert!(!conditioner.filter().is_initialised());
    let mut buffer = [5000, 5000];
    conditioner.process(&mut buffer);
    assert_eq!(buffer, [0, 0]);
}

#[test]
fn squelch_settings_apply_on_change() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let mut buffer = [0, 8000, -8000, 8000];
    conditioner.process(&mut buffer);
    let envelope = conditioner.envelope();

    let strict = Options {
        squelch: SquelchSettings {
            open_threshold: u16::MAX,
            close_threshold: u16::MAX,
            ..Default::default()
        },
        ..Default::default()
    };
    conditioner.set_options(strict).unwrap();
    assert_eq!(conditioner.envelope(), envelope);
    assert!(!conditioner.squelch_open());
}

#[test]
fn reset_forgets_everything() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let mut buffer = sine_samples(4800, 1.0 / 48.0, 10000.0, 0.0);
    conditioner.process(&mut buffer);
    assert!(conditioner.squelch_open());

    conditioner.reset();
    assert_eq!(conditioner.envelope(), 0);
    assert!(!conditioner.squelch().is_open());
    assert_eq!(conditioner.filter(), &FilterState::Unseeded);
}

#[test]
fn other_thresholds_on_a_copy() {
    let mut conditioner = Conditioner::new(Options::default()).unwrap();
    let mut buffer = sine_samples(4800, 1.0 / 48.0, 10000.0, 0.0);
    conditioner.process(&mut buffer);

    let mut display = *conditioner.squelch();
    assert!(!display.evaluate(10000, 9000));
    assert!(conditioner.squelch_open());
}

#[test]
fn options_deserialize_with_defaults() {
    let options: Options = serde_json::from_str(r#"{"invert_phase": true}"#).unwrap();
    assert_eq!(
        options,
        Options {
            invert_phase: true,
            ..Default::default()
        }
    );
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<Options>(&json).unwrap(), options);
}
