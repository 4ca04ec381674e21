//! Cross-crate flows of the enlarger timer

#[cfg(test)]
mod tests {
    use critical_section as _;
    use embassy_futures::block_on;
    use embassy_time::Duration;
    use enlarger_exposure::tone::TONE_CENTER_BIT;
    use enlarger_exposure::{
        AdjustmentIncrement, BurnDodgeEntry, ContrastFilter, ContrastGrade, ExposureMode,
        ExposureState, Pev, PevPreset,
    };
    use enlarger_timer::app::usecases::ExposureUsecases;
    use enlarger_timer::controllers::{ExposureController, Screen};
    use enlarger_timer::domain::dto::{ExposureStepKind, MenuAction, MeterEvent};
    use enlarger_timer::domain::entity::PaperProfile;
    use enlarger_timer::domain::ports::{ExposureStateReader, ExposureUsecasesPort};
    use enlarger_timer::infrastructure::repositories::StaticProfileTable;
    use enlarger_timer::infrastructure::tasks::{
        ActionChannel, ExposureTask, MeterChannel, send_action, send_meter_event,
    };

    type Table = StaticProfileTable<4>;

    fn profiles() -> Table {
        let mut table = Table::new();
        table
            .add(PaperProfile::new("Multigrade RC", ContrastFilter::Durst170M))
            .unwrap();
        table
            .add(
                PaperProfile::new("Color", ContrastFilter::Regular)
                    .with_channel_defaults([70, 55, 0]),
            )
            .unwrap();
        table
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= b.abs() * 1e-3 + 1e-3
    }

    #[test]
    fn calibrate_then_print() {
        let actions = ActionChannel::new();
        let meter = MeterChannel::new();
        let mut task = ExposureTask::new(
            ExposureController::new(ExposureUsecases::new(profiles())),
            actions.receiver(),
            meter.receiver(),
        );

        task.controller_mut().set_mode(ExposureMode::Calibration);
        assert_eq!(task.controller().screen(), Screen::Calibration);

        send_meter_event(&meter.sender(), MeterEvent::Reading(2.0));
        send_action(&actions.sender(), MenuAction::Select);
        task.drain();

        // 4 lux-seconds on 2 lux
        let state = task.controller().usecases().exposure_state();
        assert!(close(state.base_time(), 2.0));
        assert_eq!(state.calibration_pev_get_preset(), PevPreset::Base);

        send_action(&actions.sender(), MenuAction::Home);
        block_on(task.run_once());
        assert_eq!(task.controller().screen(), Screen::Exposure);

        let state = task.controller().usecases().exposure_state();
        assert_eq!(state.mode(), ExposureMode::PrintingBW);
        assert!(close(state.base_time(), 2.0));
        assert!(state.meter_readings().is_empty());

        send_action(&actions.sender(), MenuAction::Up);
        block_on(task.run_once());
        let snapshot = task.controller().usecases().snapshot();
        assert_eq!(snapshot.adjustment, 1);
        assert!(snapshot.exposure_time_ms.abs_diff(4000) <= 5);

        let mut buf = [0_u8; 512];
        let len = snapshot.encode(&mut buf).unwrap();
        assert!(core::str::from_utf8(&buf[..len]).unwrap().contains("\"adjustment\":1"));
    }

    #[test]
    fn calibrated_target_centers_printing_tones() {
        let actions = ActionChannel::new();
        let meter = MeterChannel::new();
        let mut task = ExposureTask::new(
            ExposureController::new(ExposureUsecases::new(profiles())),
            actions.receiver(),
            meter.receiver(),
        );

        task.controller_mut().set_mode(ExposureMode::Calibration);
        send_meter_event(&meter.sender(), MeterEvent::Reading(2.0));
        let sender = actions.sender();
        send_action(&sender, MenuAction::ValueInc(12));
        send_action(&sender, MenuAction::Select);
        task.drain();
        // One stop over the default target
        assert!(close(task.controller().usecases().exposure_state().base_time(), 4.0));

        send_action(&sender, MenuAction::Home);
        block_on(task.run_once());
        send_meter_event(&meter.sender(), MeterEvent::Reading(2.0));
        block_on(task.run_once());

        let state = task.controller().usecases().exposure_state();
        assert_eq!(state.mode(), ExposureMode::PrintingBW);
        assert_eq!(state.calibration_base_pev(), Pev(36));
        assert!(state.tone_graph().is_set(TONE_CENTER_BIT));
    }

    #[test]
    fn profile_selection_through_menu() {
        let actions = ActionChannel::new();
        let meter = MeterChannel::new();
        let mut task = ExposureTask::new(
            ExposureController::new(ExposureUsecases::new(profiles())),
            actions.receiver(),
            meter.receiver(),
        );

        task.controller_mut().set_mode(ExposureMode::PrintingColor);
        assert!(task.controller_mut().open_paper_profile_selector());
        let sender = actions.sender();
        send_action(&sender, MenuAction::ValueInc(1));
        send_action(&sender, MenuAction::Select);
        task.drain();

        assert!(task.controller_mut().open_color_channel(1));
        send_action(&sender, MenuAction::Down);
        task.drain();

        let usecases = task.controller().usecases();
        assert_eq!(usecases.active_paper_profile().unwrap().name.as_str(), "Color");
        assert_eq!(usecases.exposure_state().channel_values(), [70, 54, 0]);
    }

    #[test]
    fn printing_sequence_with_burn_and_dodge() {
        let mut usecases = ExposureUsecases::new(profiles());
        usecases.select_paper_profile(0).unwrap();
        usecases.exposure_state_mut().set_base_time(8.0);
        usecases
            .add_burn_dodge(BurnDodgeEntry::new(ContrastGrade::Grade5, 1, 2))
            .unwrap();
        usecases
            .add_burn_dodge(BurnDodgeEntry::new(ContrastGrade::Grade00, -1, 1))
            .unwrap();

        let sequence = usecases.printing_sequence();
        let kinds: Vec<_> = sequence.iter().map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            [ExposureStepKind::Base, ExposureStepKind::Burn, ExposureStepKind::Dodge]
        );
        assert_eq!(sequence[0].time, Duration::from_millis(8000));
        assert_eq!(sequence[2].time, Duration::from_millis(4000));
        assert_eq!(sequence[1].filter_recipe, Some("0Y+170M"));
        assert_eq!(sequence[2].filter_recipe, Some("115Y+0M"));

        // Half a stop over 8 seconds
        let burn = sequence[1].time.as_millis();
        assert!(burn.abs_diff(3314) <= 20);
    }

    #[test]
    fn adjustment_shifts_tone_graph() {
        let mut state = ExposureState::new();
        state.set_min_exposure_time(0.0);
        state.set_base_time(1.0);
        state.add_meter_reading(4.0).unwrap();

        assert!(state.tone_graph().is_set(TONE_CENTER_BIT));
        assert!(state.adjusted_tone_graph(1).is_set(TONE_CENTER_BIT + 2));
        assert!(state.adjusted_tone_graph(-1).is_set(TONE_CENTER_BIT - 2));

        state.adj_increment_set(AdjustmentIncrement::Half);
        assert!(state.adjusted_tone_graph(1).is_set(TONE_CENTER_BIT + 1));
        assert!(state.adjusted_tone_graph(20).is_upper_bound());
        assert!(state.adjusted_tone_graph(-20).is_lower_bound());
    }

    #[test]
    fn test_strip_steps_add_up() {
        let mut state = ExposureState::new();
        state.set_min_exposure_time(0.0);
        state.set_base_time(10.0);
        state.adj_increment_set(AdjustmentIncrement::Third);

        let patch_min = -3;
        let patches = 7_u32;
        let total: f32 = (0..patches)
            .map(|covered| state.test_strip_time_incremental(patch_min, covered))
            .sum();
        let last = state.test_strip_time_complete(patch_min + 6);
        assert!(close(total, last));
    }

    #[test]
    fn strip_pev_matches_exposure() {
        let mut state = ExposureState::new();
        state.set_min_exposure_time(0.0);
        state.set_base_time(2.0);
        state.add_meter_reading(2.0).unwrap();

        assert_eq!(state.test_strip_patch_pev(0), Some(Pev(24)));
        assert_eq!(state.test_strip_patch_pev(1), Some(Pev(36)));
    }
}
