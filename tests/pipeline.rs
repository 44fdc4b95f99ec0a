mod common;

mod tests {
    use super::common::RecordingBus;
    use mbi_lamp::config::{BRIGHTNESS_LEVELS, DEBOUNCE_DELAY, LONG_PRESS, NUM_LEDS, PWR_PRESS};
    use mbi_lamp::effect::CATALOG_LEN;
    use mbi_lamp::scheduler::TICK_DURATION;
    use mbi_lamp::{ButtonInput, Duration, Instant, Lamp, LoopStatus, Menu, TickScheduler};

    fn lamp() -> Lamp<RecordingBus, NUM_LEDS> {
        let mut lamp = Lamp::new(RecordingBus::new());
        lamp.start();
        lamp
    }

    /// One full tick: periodic context first, then the cooperative loop.
    fn step(lamp: &mut Lamp<RecordingBus, NUM_LEDS>, pressed: bool) -> LoopStatus {
        lamp.frame_tick();
        lamp.poll(pressed)
    }

    /// A complete press gesture including the debounce dead time.
    fn tap(lamp: &mut Lamp<RecordingBus, NUM_LEDS>, held_ticks: u32) {
        for _ in 0..held_ticks {
            step(lamp, true);
        }
        for _ in 0..=DEBOUNCE_DELAY {
            step(lamp, false);
        }
    }

    #[test]
    fn test_unconsumed_frame_blocks_production() {
        let mut lamp = lamp();
        assert_eq!(lamp.poll(false), LoopStatus::Running);
        assert_eq!(lamp.frame(), 1);

        // The staged frame has not been shipped yet, so the loop idles.
        assert_eq!(lamp.poll(false), LoopStatus::Running);
        assert_eq!(lamp.frame(), 1);

        lamp.frame_tick();
        assert_eq!(lamp.poll(false), LoopStatus::Running);
        assert_eq!(lamp.frame(), 2);
    }

    #[test]
    fn test_short_press_cycles_effects() {
        let mut lamp = lamp();
        let initial = lamp.active_effect();
        tap(&mut lamp, 5);
        assert_eq!(lamp.active_effect(), (initial + 1) % CATALOG_LEN);
        tap(&mut lamp, 5);
        assert_eq!(lamp.active_effect(), (initial + 2) % CATALOG_LEN);
    }

    #[test]
    fn test_brightness_menu_round_trip() {
        let mut lamp = lamp();
        let initial = lamp.active_effect();
        assert_eq!(lamp.driver().brightness(), BRIGHTNESS_LEVELS[6]);

        tap(&mut lamp, LONG_PRESS + 1);
        assert_eq!(lamp.controller().menu(), Menu::Bright);
        assert_eq!(lamp.driver().brightness(), BRIGHTNESS_LEVELS[6]);

        tap(&mut lamp, 5);
        assert_eq!(lamp.driver().brightness(), BRIGHTNESS_LEVELS[5]);

        tap(&mut lamp, LONG_PRESS + 1);
        assert_eq!(lamp.controller().menu(), Menu::Main);
        assert_eq!(lamp.active_effect(), initial);
        assert_eq!(lamp.driver().brightness(), BRIGHTNESS_LEVELS[5]);
    }

    #[test]
    fn test_power_press_enters_standby() {
        let mut lamp = lamp();
        assert!(lamp.driver().bus().gclk_on);

        let mut standby_after = None;
        for tick in 1..=(PWR_PRESS + DEBOUNCE_DELAY + 5) {
            if step(&mut lamp, true) == LoopStatus::Standby {
                standby_after = Some(tick);
                break;
            }
        }
        let ticks = standby_after.expect("never reached standby");
        assert!(ticks >= PWR_PRESS + DEBOUNCE_DELAY);
        assert!(!lamp.driver().bus().gclk_on);
    }

    struct FixedButton(bool);

    impl ButtonInput for FixedButton {
        fn is_pressed(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_scheduler_paces_at_tick_rate() {
        let mut sched = TickScheduler::new(lamp(), FixedButton(false));

        let (status, result) = sched.tick(Instant::from_millis(0));
        assert_eq!(status, LoopStatus::Running);
        assert_eq!(result.next_deadline, Instant::from_millis(0) + TICK_DURATION);
        assert_eq!(result.sleep_duration, TICK_DURATION);
        assert_eq!(sched.lamp().frame(), 1);

        let (_, result) = sched.tick(result.next_deadline);
        assert_eq!(result.sleep_duration, TICK_DURATION);
        assert_eq!(sched.lamp().frame(), 2);
    }

    #[test]
    fn test_scheduler_skips_backlog_after_stall() {
        let mut sched = TickScheduler::new(lamp(), FixedButton(false));
        let (_, result) = sched.tick(Instant::from_millis(0));

        // A one-second stall resets the schedule instead of replaying the
        // missed ticks as a burst.
        let late = result.next_deadline + Duration::from_millis(1000);
        let (_, result) = sched.tick(late);
        assert_eq!(result.next_deadline, late + TICK_DURATION);
        assert_eq!(sched.lamp().frame(), 2);
    }
}
