//! Integration tests for the IR dispatch path: receiver, resolver, repeat
//! handling and actions working together.

use ir_dispatch::{
    config::IrConfig,
    hal::{MockClock, MockDecoder, MockLight},
    remotes::codes,
    ActionType, DispatchOutcome, IrRemote, PollOutcome, RemoteType, REPEAT_CODE,
};

type TestRemote = IrRemote<MockDecoder, MockLight, MockClock>;

fn remote_for(remote: RemoteType) -> TestRemote {
    IrRemote::new(MockDecoder::new(), MockLight::new(), MockClock::new())
        .with_config(IrConfig::default().with_remote(remote))
}

/// Advance the clock by `ms`, then run one poller step.
fn tick(remote: &mut TestRemote, ms: u64) -> PollOutcome {
    remote.clock_mut().advance(ms);
    remote.poll()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn every_mapped_code_runs_its_action() {
    for remote_type in RemoteType::ALL.iter().copied().filter(|r| r.is_enabled()) {
        let profile = remote_type.profile().unwrap();
        for entry in profile.entries() {
            let mut remote = remote_for(remote_type);
            assert_eq!(
                remote.handle_code(entry.code).executed(),
                Some(entry.action),
                "{} 0x{:08X}",
                profile.name,
                entry.code
            );
            assert_eq!(remote.light().notifications, 1);
        }
    }
}

#[test]
fn unknown_code_runs_nothing_and_clears_repeat() {
    let mut remote = remote_for(RemoteType::Ir44);
    remote.handle_code(codes::IR44_BPLUS);
    let before = remote.light().clone();

    let outcome = remote.handle_code(0x0BAD_C0DE);

    assert_eq!(outcome, DispatchOutcome::Unmapped { code: 0x0BAD_C0DE });
    assert_eq!(remote.repeat_state().last(), None);
    assert_eq!(remote.light().notifications, before.notifications);
    assert_eq!(remote.light().brightness, before.brightness);
}

#[test]
fn code_from_another_remote_is_unknown() {
    let mut remote = remote_for(RemoteType::Ir24);
    assert_eq!(
        remote.handle_code(codes::IR44_RED),
        DispatchOutcome::Unmapped {
            code: codes::IR44_RED
        }
    );
}

// ============================================================================
// Debounce
// ============================================================================

#[test]
fn non_repeatable_twice_within_window_runs_once() {
    let mut remote = remote_for(RemoteType::Ir9);

    remote.handle_code(codes::IR9_POWER);
    remote.clock_mut().advance(499);
    let outcome = remote.handle_code(codes::IR9_POWER);

    assert_eq!(
        outcome,
        DispatchOutcome::Suppressed {
            action: ActionType::PowerToggle
        }
    );
    assert!(remote.light().on);
    assert_eq!(remote.light().notifications, 1);
}

#[test]
fn non_repeatable_twice_after_window_runs_twice() {
    let mut remote = remote_for(RemoteType::Ir9);

    remote.handle_code(codes::IR9_POWER);
    remote.clock_mut().advance(500);
    let outcome = remote.handle_code(codes::IR9_POWER);

    assert_eq!(
        outcome,
        DispatchOutcome::Executed {
            action: ActionType::PowerToggle,
            count: 2
        }
    );
    assert!(!remote.light().on);
    assert_eq!(remote.light().notifications, 2);
}

#[test]
fn repeatable_action_always_runs() {
    let mut remote = remote_for(RemoteType::Ir40);
    remote.light_mut().effect = 20;

    let mut last_count = 0;
    for _ in 0..8 {
        remote.clock_mut().advance(10);
        match remote.handle_code(codes::IR40_QUICK) {
            DispatchOutcome::Executed { action, count } => {
                assert_eq!(action, ActionType::SpeedUp);
                assert!(count > last_count);
                last_count = count;
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    assert_eq!(last_count, 8);
    assert_eq!(remote.light().speed, 208);
    assert_eq!(remote.light().notifications, 8);
}

#[test]
fn different_buttons_are_never_debounced() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.handle_code(codes::IR24_ON);
    remote.handle_code(codes::IR24_OFF);
    remote.handle_code(codes::IR24_ON);
    assert!(remote.light().on);
    assert_eq!(remote.light().notifications, 3);
}

// ============================================================================
// Repeat Frames
// ============================================================================

#[test]
fn repeat_frame_without_history_is_noop() {
    let mut remote = remote_for(RemoteType::Ir24);
    assert_eq!(
        remote.handle_code(REPEAT_CODE),
        DispatchOutcome::NothingToRepeat
    );
    assert_eq!(remote.light().notifications, 0);
}

#[test]
fn repeat_frame_reruns_last_action() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.handle_code(codes::IR24_BRIGHTER);
    remote.handle_code(REPEAT_CODE);
    remote.handle_code(REPEAT_CODE);

    // 128 -> 154 -> 198 -> 255
    assert_eq!(remote.light().brightness, 255);
    assert_eq!(remote.repeat_state().repeat_count(), 3);
}

#[test]
fn repeat_frame_after_unknown_code_is_noop() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.handle_code(codes::IR24_BRIGHTER);
    remote.handle_code(0x0BAD_C0DE);
    assert_eq!(
        remote.handle_code(REPEAT_CODE),
        DispatchOutcome::NothingToRepeat
    );
    assert_eq!(remote.light().brightness, 154);
}

// ============================================================================
// Receiver Lifecycle
// ============================================================================

#[test]
fn enable_then_idle_then_code() {
    let mut remote = remote_for(RemoteType::Ir24);

    assert_eq!(remote.poll(), PollOutcome::Enabled);
    for _ in 0..3 {
        assert_eq!(tick(&mut remote, 120), PollOutcome::NoSignal);
    }

    remote.decoder_mut().queue_code(codes::IR24_GREEN);
    let outcome = tick(&mut remote, 120);

    assert_eq!(
        outcome,
        PollOutcome::Dispatched {
            code: codes::IR24_GREEN,
            outcome: DispatchOutcome::Executed {
                action: ActionType::ColorGreen,
                count: 1
            },
        }
    );
    assert_eq!(remote.light().notifications, 1);
    assert_eq!(remote.repeat_state().last(), Some(ActionType::ColorGreen));
}

#[test]
fn disable_releases_on_next_tick_and_reenable_warms_up() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.poll();
    tick(&mut remote, 120);
    let attempts = remote.decoder().decode_attempts;

    remote.set_remote(0);
    assert_eq!(tick(&mut remote, 120), PollOutcome::Released);
    assert!(!remote.decoder().enabled);
    assert_eq!(remote.decoder().decode_attempts, attempts);

    assert_eq!(tick(&mut remote, 120), PollOutcome::Disabled);
    assert_eq!(remote.decoder().disable_calls, 1);

    remote.decoder_mut().queue_code(codes::IR24_ON);
    remote.set_remote(RemoteType::Ir24.selector());
    assert_eq!(tick(&mut remote, 120), PollOutcome::Enabled);
    assert!(remote.decoder().enabled);
    assert_eq!(remote.decoder().enable_calls, 2);
    assert_eq!(remote.decoder().decode_attempts, attempts);
    assert!(!remote.light().on);

    assert!(matches!(
        tick(&mut remote, 120),
        PollOutcome::Dispatched { .. }
    ));
    assert!(remote.light().on);
}

#[test]
fn failed_release_keeps_retrying_until_decoder_is_free() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.poll();
    remote.handle_code(codes::IR24_ON);
    remote.decoder_mut().fail_disable = true;
    remote.set_remote(0);

    assert_eq!(tick(&mut remote, 120), PollOutcome::DecoderFault);
    assert_eq!(tick(&mut remote, 120), PollOutcome::DecoderFault);
    assert!(remote.decoder().enabled);
    assert_eq!(remote.decoder().disable_calls, 2);
    assert_eq!(remote.repeat_state().last(), None);
    assert_eq!(
        remote.handle_code(REPEAT_CODE),
        DispatchOutcome::NothingToRepeat
    );

    remote.decoder_mut().fail_disable = false;
    assert_eq!(tick(&mut remote, 120), PollOutcome::Released);
    assert!(!remote.decoder().enabled);
    assert_eq!(tick(&mut remote, 120), PollOutcome::Disabled);
    assert_eq!(remote.decoder().disable_calls, 3);
}

#[test]
fn out_of_range_selector_releases_decoder() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.poll();
    remote.set_remote(RemoteType::COUNT as u8);
    assert_eq!(tick(&mut remote, 10), PollOutcome::Released);
    assert_eq!(remote.remote_type(), None);
}

#[test]
fn polls_closer_than_interval_decode_once() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.poll();
    remote.decoder_mut().queue_codes(&[codes::IR24_ON, codes::IR24_OFF]);

    assert!(matches!(tick(&mut remote, 200), PollOutcome::Dispatched { .. }));
    assert_eq!(tick(&mut remote, 60), PollOutcome::RateLimited);
    assert_eq!(tick(&mut remote, 59), PollOutcome::RateLimited);
    assert_eq!(remote.decoder().decode_attempts, 1);
    assert!(remote.light().on);

    assert!(matches!(tick(&mut remote, 1), PollOutcome::Dispatched { .. }));
    assert!(!remote.light().on);
}

#[test]
fn zero_code_is_discarded() {
    let mut remote = remote_for(RemoteType::Ir24);
    remote.poll();
    remote.handle_code(codes::IR24_BRIGHTER);
    remote.decoder_mut().queue_code(0);

    assert_eq!(tick(&mut remote, 120), PollOutcome::ZeroCode);
    assert_eq!(remote.decoder().resume_calls, 1);
    assert_eq!(remote.light().notifications, 1);
    assert_eq!(remote.repeat_state().last(), Some(ActionType::BrightUp));
}

#[test]
fn held_button_through_receiver() {
    let mut remote = remote_for(RemoteType::Ir44);
    remote.poll();
    remote
        .decoder_mut()
        .queue_codes(&[codes::IR44_BMINUS, REPEAT_CODE, REPEAT_CODE]);

    for _ in 0..3 {
        tick(&mut remote, 120);
    }

    // 128 -> 119 -> 93 -> 72
    assert_eq!(remote.light().brightness, 72);
    assert_eq!(remote.light().notifications, 3);
}

#[test]
fn held_toggle_through_receiver_fires_once() {
    let mut remote = remote_for(RemoteType::Ir6);
    remote.poll();
    remote
        .decoder_mut()
        .queue_codes(&[codes::IR6_POWER, REPEAT_CODE, REPEAT_CODE, REPEAT_CODE]);

    let outcomes: Vec<PollOutcome> = (0..4).map(|_| tick(&mut remote, 120)).collect();

    assert!(remote.light().on);
    assert_eq!(remote.light().notifications, 1);
    // Last repeat frame arrives 360ms after the press, still inside the window
    assert_eq!(
        outcomes[3],
        PollOutcome::Dispatched {
            code: REPEAT_CODE,
            outcome: DispatchOutcome::Suppressed {
                action: ActionType::PowerToggle
            },
        }
    );
}

// ============================================================================
// Preset Buttons
// ============================================================================

#[test]
fn preset_button_count_per_remote() {
    let mut remote = remote_for(RemoteType::Ir44);
    assert_eq!(remote.preset_buttons_configured(), 0);

    remote.set_remote(RemoteType::Squeezebox.selector());
    assert_eq!(remote.preset_buttons_configured(), 1);
    assert_eq!(remote.cached_preset_buttons(RemoteType::Squeezebox), Some(1));
}

#[test]
fn squeezebox_second_press_pages_by_one() {
    let mut remote = IrRemote::new(
        MockDecoder::new(),
        MockLight::new().with_presets(&[3, 4]),
        MockClock::new(),
    )
    .with_config(IrConfig::default().with_remote(RemoteType::Squeezebox));

    remote.handle_code(codes::IR_SQUEEZEBOX_3);
    assert_eq!(remote.light().preset, 3);

    remote.clock_mut().advance(1_000);
    remote.handle_code(codes::IR_SQUEEZEBOX_3);
    assert_eq!(remote.light().preset, 4);
    assert_eq!(remote.light().preset_requests, vec![3, 4]);
}

#[test]
fn empty_preset_slot_uses_fallback_effect() {
    let mut remote = remote_for(RemoteType::Ir44);
    remote.light_mut().palette = 12;
    remote.handle_code(codes::IR44_DIY5);

    assert_eq!(remote.light().preset_requests, vec![5]);
    assert_eq!(remote.light().effect, 9);
    assert_eq!(remote.light().palette, 0);
}
