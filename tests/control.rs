mod tests {
    use mbi_lamp::config::{APO_FRAMES, DEBOUNCE_DELAY, LONG_PRESS, PWR_PRESS};
    use mbi_lamp::{ButtonPhase, ControlEvent, Controller, Menu};

    const CATALOG: usize = 10;

    fn fresh() -> Controller {
        Controller::new(CATALOG, 0, 6)
    }

    /// Hold the button for `held_ticks` updates, release, wait out the
    /// debounce dead time, and return the event produced by the release.
    fn tap(ctrl: &mut Controller, frame: &mut u32, held_ticks: u32) -> ControlEvent {
        for _ in 0..held_ticks {
            *frame += 1;
            ctrl.update(true, *frame);
        }
        *frame += 1;
        let release = ctrl.update(false, *frame);
        for _ in 0..DEBOUNCE_DELAY {
            *frame += 1;
            ctrl.update(false, *frame);
        }
        release
    }

    #[test]
    fn test_idle_produces_nothing() {
        let mut ctrl = fresh();
        for frame in 1..100 {
            assert_eq!(ctrl.update(false, frame), ControlEvent::None);
        }
        assert_eq!(ctrl.phase(), ButtonPhase::Waiting);
    }

    #[test]
    fn test_short_press_boundary() {
        // Exactly LONG_PRESS held ticks is still a short press.
        let mut ctrl = fresh();
        let mut frame = 0;
        assert_eq!(
            tap(&mut ctrl, &mut frame, LONG_PRESS),
            ControlEvent::NextEffect(1)
        );
        // One more tick tips it over into a long press.
        assert_eq!(
            tap(&mut ctrl, &mut frame, LONG_PRESS + 1),
            ControlEvent::EnterBrightnessMenu(6)
        );
    }

    #[test]
    fn test_hold_progress_while_pressed() {
        let mut ctrl = fresh();
        let mut frame = 0;
        for _ in 0..LONG_PRESS {
            frame += 1;
            assert_eq!(ctrl.update(true, frame), ControlEvent::None);
        }
        frame += 1;
        assert_eq!(ctrl.update(true, frame), ControlEvent::HoldProgress(1));
        frame += 1;
        assert_eq!(ctrl.update(true, frame), ControlEvent::HoldProgress(2));
    }

    #[test]
    fn test_effect_cycling_wraps() {
        let mut ctrl = fresh();
        let mut frame = 0;
        for expect in (1..CATALOG).chain([0]) {
            assert_eq!(
                tap(&mut ctrl, &mut frame, 5),
                ControlEvent::NextEffect(expect)
            );
        }
        assert_eq!(ctrl.effect_index(), 0);
    }

    #[test]
    fn test_brightness_menu_steps_down_and_wraps() {
        let mut ctrl = fresh();
        let mut frame = 0;
        assert_eq!(
            tap(&mut ctrl, &mut frame, LONG_PRESS + 1),
            ControlEvent::EnterBrightnessMenu(6)
        );
        assert_eq!(ctrl.menu(), Menu::Bright);

        for expect in [5, 4, 3, 2, 1, 0, 6, 5] {
            assert_eq!(
                tap(&mut ctrl, &mut frame, 5),
                ControlEvent::BrightnessChanged(expect)
            );
        }
        assert_eq!(ctrl.brightness_level(), 5);

        // Long press commits and re-activates the selected effect.
        assert_eq!(
            tap(&mut ctrl, &mut frame, LONG_PRESS + 1),
            ControlEvent::LeaveBrightnessMenu(0)
        );
        assert_eq!(ctrl.menu(), Menu::Main);
    }

    #[test]
    fn test_power_press_needs_no_release() {
        let mut ctrl = fresh();
        let mut frame = 0;
        let mut last = ControlEvent::None;
        for _ in 0..PWR_PRESS {
            frame += 1;
            last = ctrl.update(true, frame);
        }
        // Crossing the threshold swallows the hold feedback and arms the
        // power-off delay without waiting for a release.
        assert_eq!(last, ControlEvent::None);
        assert_eq!(ctrl.phase(), ButtonPhase::PowerOffDelay);

        for _ in 1..DEBOUNCE_DELAY {
            frame += 1;
            assert_eq!(ctrl.update(true, frame), ControlEvent::None);
        }
        frame += 1;
        assert_eq!(ctrl.update(true, frame), ControlEvent::PowerOff);
    }

    #[test]
    fn test_debounce_ignores_bounce_presses() {
        let mut ctrl = fresh();
        let mut frame = 0;
        for _ in 0..5 {
            frame += 1;
            ctrl.update(true, frame);
        }
        frame += 1;
        assert_eq!(ctrl.update(false, frame), ControlEvent::NextEffect(1));

        // Presses landing inside the dead time must not register.
        for _ in 1..DEBOUNCE_DELAY {
            frame += 1;
            assert_eq!(ctrl.update(true, frame), ControlEvent::None);
            assert_eq!(ctrl.phase(), ButtonPhase::Released);
        }
        frame += 1;
        ctrl.update(false, frame);
        assert_eq!(ctrl.phase(), ButtonPhase::Waiting);
        assert_eq!(ctrl.effect_index(), 1);
    }

    #[test]
    fn test_auto_power_off_fires_at_deadline() {
        let mut ctrl = fresh();
        assert_eq!(ctrl.update(false, APO_FRAMES - 1), ControlEvent::None);
        assert_eq!(ctrl.update(false, APO_FRAMES), ControlEvent::PowerOff);
    }

    #[test]
    fn test_press_pushes_auto_power_off_deadline() {
        let mut ctrl = fresh();
        ctrl.update(true, 10);
        // Well past the original deadline, but inside the pushed one: the
        // release is processed normally instead of powering off.
        assert_eq!(ctrl.update(false, APO_FRAMES), ControlEvent::NextEffect(1));
    }
}
