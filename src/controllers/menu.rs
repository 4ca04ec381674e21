use enlarger_exposure::config::CHANNEL_COUNT;
use enlarger_exposure::math::adjust_with_rollover_u8;
use enlarger_exposure::{ExposureMode, PevPreset};

use crate::config::EDITOR;
use crate::controllers::value_editor::{EditorResult, ValueEditorU8, ValueEditorU16};
use crate::domain::dto::MenuAction;
use crate::domain::ports::{ExposureUsecaseError, ExposureUsecasesPort};

/// Screen the menu actions are applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Global adjustment and contrast grade
    Exposure,
    /// Trim of one color channel
    ColorChannel(usize),
    /// Calibration targets
    Calibration,
    /// Base time in tenths of a second
    EditBaseTime(ValueEditorU16),
    /// Hardware floor in hundredths of a second
    EditMinExposure(ValueEditorU16),
    SelectPaperProfile(ValueEditorU8),
}

/// Maps menu actions onto the exposure usecases
pub struct ExposureController<U: ExposureUsecasesPort> {
    usecases: U,
    screen: Screen,
}

impl<U: ExposureUsecasesPort> ExposureController<U> {
    pub fn new(usecases: U) -> Self {
        Self {
            usecases,
            screen: Screen::Exposure,
        }
    }

    pub fn usecases(&self) -> &U {
        &self.usecases
    }

    pub fn usecases_mut(&mut self) -> &mut U {
        &mut self.usecases
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch the job mode and show its home screen
    pub fn set_mode(&mut self, mode: ExposureMode) {
        self.usecases.exposure_state_mut().set_mode(mode);
        self.screen = Self::home_screen(mode);
    }

    /// Show the trim of a color channel, only while printing in color
    pub fn open_color_channel(&mut self, channel: usize) -> bool {
        let state = self.usecases.exposure_state();
        if state.mode() != ExposureMode::PrintingColor || channel >= CHANNEL_COUNT {
            return false;
        }
        self.screen = Screen::ColorChannel(channel);
        true
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn open_base_time_editor(&mut self) {
        let tenths = (self.usecases.exposure_state().base_time() * 10.0 + 0.5) as u16;
        let value = tenths.clamp(EDITOR.base_time_min, EDITOR.base_time_max);
        self.screen = Screen::EditBaseTime(ValueEditorU16::new(
            value,
            EDITOR.base_time_min,
            EDITOR.base_time_max,
        ));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn open_min_exposure_editor(&mut self) {
        let hundredths =
            (self.usecases.exposure_state().min_exposure_time() * 100.0 + 0.5) as u16;
        self.screen = Screen::EditMinExposure(ValueEditorU16::for_fixed_point(
            hundredths,
            EDITOR.min_exposure_min,
            EDITOR.min_exposure_max,
        ));
    }

    /// Show the profile selector, if the store has any profiles
    #[allow(clippy::cast_possible_truncation)]
    pub fn open_paper_profile_selector(&mut self) -> bool {
        let count = self.usecases.paper_profile_count().min(usize::from(u8::MAX));
        if count == 0 {
            return false;
        }
        let current = self
            .usecases
            .exposure_state()
            .active_paper_profile_index()
            .filter(|index| *index < count)
            .unwrap_or(0);
        self.screen = Screen::SelectPaperProfile(ValueEditorU8::new(
            current as u8,
            0,
            (count - 1) as u8,
        ));
        true
    }

    /// Apply one action to the current screen
    pub fn handle(&mut self, action: MenuAction) -> Result<(), ExposureUsecaseError> {
        match self.screen {
            Screen::Exposure => {
                self.handle_exposure(action);
                Ok(())
            }
            Screen::ColorChannel(channel) => {
                self.handle_color_channel(channel, action);
                Ok(())
            }
            Screen::Calibration => self.handle_calibration(action),
            Screen::EditBaseTime(mut editor) => {
                let result = editor.handle(action);
                self.screen = Screen::EditBaseTime(editor);
                if let Some(tenths) = self.finish_editor(result) {
                    self.usecases
                        .exposure_state_mut()
                        .set_base_time(f32::from(tenths) / 10.0);
                }
                Ok(())
            }
            Screen::EditMinExposure(mut editor) => {
                let result = editor.handle(action);
                self.screen = Screen::EditMinExposure(editor);
                if let Some(hundredths) = self.finish_editor(result) {
                    self.usecases
                        .exposure_state_mut()
                        .set_min_exposure_time(f32::from(hundredths) / 100.0);
                }
                Ok(())
            }
            Screen::SelectPaperProfile(mut editor) => {
                let result = editor.handle(action);
                self.screen = Screen::SelectPaperProfile(editor);
                match self.finish_editor(result) {
                    Some(index) => self.usecases.select_paper_profile(usize::from(index)),
                    None => Ok(()),
                }
            }
        }
    }

    fn home_screen(mode: ExposureMode) -> Screen {
        match mode {
            ExposureMode::Calibration => Screen::Calibration,
            _ => Screen::Exposure,
        }
    }

    fn finish_editor<T>(&mut self, result: EditorResult<T>) -> Option<T> {
        match result {
            EditorResult::Pending => None,
            EditorResult::Accepted(value) => {
                self.go_home();
                Some(value)
            }
            EditorResult::Cancelled => {
                self.go_home();
                None
            }
        }
    }

    fn go_home(&mut self) {
        self.screen = Self::home_screen(self.usecases.exposure_state().mode());
    }

    fn handle_exposure(&mut self, action: MenuAction) {
        match action {
            MenuAction::Up => self.usecases.exposure_state_mut().adj_increase(),
            MenuAction::Down => self.usecases.exposure_state_mut().adj_decrease(),
            MenuAction::ValueInc(count) => {
                for _ in 0..count {
                    self.usecases.exposure_state_mut().adj_increase();
                }
            }
            MenuAction::ValueDec(count) => {
                for _ in 0..count {
                    self.usecases.exposure_state_mut().adj_decrease();
                }
            }
            MenuAction::Next => self.usecases.contrast_increase(),
            MenuAction::Prev => self.usecases.contrast_decrease(),
            MenuAction::Select => self.usecases.exposure_state_mut().adj_increment_increase(),
            MenuAction::Home => self.usecases.exposure_state_mut().adj_set(0),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn handle_color_channel(&mut self, channel: usize, action: MenuAction) {
        let state = self.usecases.exposure_state_mut();
        match action {
            MenuAction::Up => state.channel_increase(channel, 1),
            MenuAction::Down => state.channel_decrease(channel, 1),
            MenuAction::ValueInc(count) => state.channel_increase(channel, count),
            MenuAction::ValueDec(count) => state.channel_decrease(channel, count),
            MenuAction::Next | MenuAction::Prev => {
                let delta = if action == MenuAction::Next { 1 } else { -1 };
                let next =
                    adjust_with_rollover_u8(channel as u8, delta, 0, (CHANNEL_COUNT - 1) as u8);
                self.screen = Screen::ColorChannel(usize::from(next));
            }
            MenuAction::Select => {
                let wide_mode = state.channel_wide_mode();
                state.set_channel_wide_mode(!wide_mode);
            }
            MenuAction::Home => self.go_home(),
        }
    }

    fn handle_calibration(&mut self, action: MenuAction) -> Result<(), ExposureUsecaseError> {
        let state = self.usecases.exposure_state_mut();
        match action {
            MenuAction::Up => state.calibration_pev_increase(),
            MenuAction::Down => state.calibration_pev_decrease(),
            MenuAction::ValueInc(count) => {
                for _ in 0..count {
                    state.calibration_pev_increase();
                }
            }
            MenuAction::ValueDec(count) => {
                for _ in 0..count {
                    state.calibration_pev_decrease();
                }
            }
            MenuAction::Next | MenuAction::Prev => {
                let preset = match state.calibration_pev_get_preset() {
                    PevPreset::Base => PevPreset::Strip,
                    PevPreset::Strip => PevPreset::Base,
                };
                state.calibration_pev_set_preset(preset);
            }
            MenuAction::Select => {
                self.usecases.apply_calibration()?;
            }
            MenuAction::Home => {
                // Calibrated base time carries over to printing
                let base_time = state.base_time();
                self.set_mode(ExposureMode::PrintingBW);
                self.usecases.exposure_state_mut().set_base_time(base_time);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use enlarger_exposure::{ContrastFilter, ContrastGrade};

    use super::*;
    use crate::app::usecases::ExposureUsecases;
    use crate::domain::entity::PaperProfile;
    use crate::domain::ports::{ExposureStateReader, PaperProfileStore};

    struct Profiles;

    impl PaperProfileStore for Profiles {
        fn profile(&self, index: usize) -> Option<PaperProfile> {
            match index {
                0 => Some(PaperProfile::new("Fiber", ContrastFilter::Kodak)),
                1 => Some(
                    PaperProfile::new("Color", ContrastFilter::Regular)
                        .with_channel_defaults([120, 80, 0]),
                ),
                _ => None,
            }
        }

        fn count(&self) -> usize {
            2
        }
    }

    fn controller() -> ExposureController<ExposureUsecases<Profiles>> {
        ExposureController::new(ExposureUsecases::new(Profiles))
    }

    #[test]
    fn exposure_keys_adjust_time_and_contrast() {
        let mut controller = controller();
        controller.handle(MenuAction::Up).unwrap();
        controller.handle(MenuAction::ValueInc(2)).unwrap();
        assert_eq!(controller.usecases().exposure_state().adj_get(), 3);
        controller.handle(MenuAction::ValueDec(1)).unwrap();
        assert_eq!(controller.usecases().exposure_state().adj_get(), 2);

        controller.handle(MenuAction::Next).unwrap();
        assert_eq!(
            controller.usecases().exposure_state().contrast_grade(),
            ContrastGrade::Grade2.harder().unwrap()
        );

        controller.handle(MenuAction::Home).unwrap();
        assert_eq!(controller.usecases().exposure_state().adj_get(), 0);
    }

    #[test]
    fn select_cycles_increment() {
        let mut controller = controller();
        let before = controller.usecases().exposure_state().adj_increment_get();
        controller.handle(MenuAction::Select).unwrap();
        assert_eq!(
            controller.usecases().exposure_state().adj_increment_get(),
            before.next()
        );
    }

    #[test]
    fn color_channel_needs_color_mode() {
        let mut controller = controller();
        assert!(!controller.open_color_channel(0));

        controller.set_mode(ExposureMode::PrintingColor);
        assert!(!controller.open_color_channel(CHANNEL_COUNT));
        assert!(controller.open_color_channel(0));

        controller.handle(MenuAction::ValueInc(5)).unwrap();
        controller.handle(MenuAction::Prev).unwrap();
        assert_eq!(controller.screen(), Screen::ColorChannel(CHANNEL_COUNT - 1));
        controller.handle(MenuAction::Select).unwrap();
        controller.handle(MenuAction::Up).unwrap();

        let state = controller.usecases().exposure_state();
        assert_eq!(state.channel_value(0), Some(5));
        assert_eq!(state.channel_value(CHANNEL_COUNT - 1), Some(10));
        assert!(state.channel_wide_mode());

        controller.handle(MenuAction::Home).unwrap();
        assert_eq!(controller.screen(), Screen::Exposure);
    }

    #[test]
    fn base_time_editor_commits_on_select() {
        let mut controller = controller();
        controller.open_base_time_editor();
        controller.handle(MenuAction::Next).unwrap();
        controller.handle(MenuAction::Down).unwrap();
        assert!(matches!(controller.screen(), Screen::EditBaseTime(_)));

        controller.handle(MenuAction::Select).unwrap();
        assert_eq!(controller.screen(), Screen::Exposure);
        assert!((controller.usecases().exposure_state().base_time() - 15.9).abs() < 1e-4);
    }

    #[test]
    fn editor_cancel_keeps_value() {
        let mut controller = controller();
        controller.open_min_exposure_editor();
        controller.handle(MenuAction::ValueInc(25)).unwrap();
        controller.handle(MenuAction::Home).unwrap();
        assert_eq!(controller.screen(), Screen::Exposure);
        assert_eq!(controller.usecases().exposure_state().min_exposure_time(), 0.5);
    }

    #[test]
    fn min_exposure_editor_in_hundredths() {
        let mut controller = controller();
        controller.open_min_exposure_editor();
        controller.handle(MenuAction::ValueInc(25)).unwrap();
        controller.handle(MenuAction::Select).unwrap();
        assert!((controller.usecases().exposure_state().min_exposure_time() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn profile_selector_applies_choice() {
        let mut controller = controller();
        assert!(controller.open_paper_profile_selector());
        controller.handle(MenuAction::Down).unwrap();
        controller.handle(MenuAction::Select).unwrap();

        let usecases = controller.usecases();
        assert_eq!(usecases.exposure_state().active_paper_profile_index(), Some(1));
        assert_eq!(usecases.exposure_state().channel_values(), [120, 80, 0]);
    }

    #[test]
    fn calibration_screen_follows_mode() {
        let mut controller = controller();
        controller.set_mode(ExposureMode::Calibration);
        assert_eq!(controller.screen(), Screen::Calibration);

        let before = controller.usecases().exposure_state().calibration_pev();
        controller.handle(MenuAction::Up).unwrap();
        assert_eq!(
            controller.usecases().exposure_state().calibration_pev().value(),
            before.value() + 1
        );

        controller.handle(MenuAction::Next).unwrap();
        assert_eq!(
            controller.usecases().exposure_state().calibration_pev_get_preset(),
            PevPreset::Strip
        );

        assert_eq!(
            controller.handle(MenuAction::Select),
            Err(ExposureUsecaseError::NoReadings)
        );

        controller.handle(MenuAction::Home).unwrap();
        assert_eq!(controller.screen(), Screen::Exposure);
        assert_eq!(
            controller.usecases().exposure_state().mode(),
            ExposureMode::PrintingBW
        );
    }
}
