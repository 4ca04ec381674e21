use enlarger_exposure::{BurnDodgeEntry, ContrastFilter, ExposureState, PevPreset};

use crate::{
    config::EXPOSURE,
    domain::{
        dto::{ExposureSnapshot, ExposureStep, ExposureStepKind, seconds_to_duration},
        entity::PaperProfile,
        ports::{
            ExposureStateReader, ExposureUsecaseError, ExposureUsecasesPort, PaperProfileStore,
            PrintingSequence,
        },
    },
};

/// Exposure job of one print, bound to the paper profile store
pub struct ExposureUsecases<S: PaperProfileStore> {
    state: ExposureState,
    profiles: S,
}

impl<S: PaperProfileStore> ExposureUsecases<S> {
    pub fn new(profiles: S) -> Self {
        Self::with_state(ExposureState::with_config(EXPOSURE), profiles)
    }

    pub fn with_state(state: ExposureState, profiles: S) -> Self {
        Self { state, profiles }
    }

    pub fn profiles(&self) -> &S {
        &self.profiles
    }

    fn constrain_grade(&mut self) {
        if let Some(profile) = self.active_paper_profile() {
            let grade = profile.constrain_grade(self.state.contrast_grade());
            self.state.set_contrast_grade(grade);
        }
    }
}

impl<S: PaperProfileStore> ExposureStateReader for ExposureUsecases<S> {
    fn exposure_state(&self) -> &ExposureState {
        &self.state
    }

    fn active_paper_profile(&self) -> Option<PaperProfile> {
        self.state
            .active_paper_profile_index()
            .and_then(|index| self.profiles.profile(index))
    }

    fn paper_profile_count(&self) -> usize {
        self.profiles.count()
    }

    fn contrast_filter(&self) -> ContrastFilter {
        self.active_paper_profile()
            .map(|profile| profile.contrast_filter)
            .unwrap_or_default()
    }

    fn current_filter_recipe(&self) -> Option<&'static str> {
        self.contrast_filter().recipe(self.state.contrast_grade())
    }

    fn snapshot(&self) -> ExposureSnapshot {
        ExposureSnapshot::capture(&self.state, self.current_filter_recipe())
    }

    fn printing_sequence(&self) -> PrintingSequence {
        let filter = self.contrast_filter();
        let exposure_time = self.state.exposure_time();
        let mut sequence = PrintingSequence::new();

        let base = ExposureStep {
            kind: ExposureStepKind::Base,
            contrast_grade: self.state.contrast_grade(),
            filter_recipe: filter.recipe(self.state.contrast_grade()),
            time: seconds_to_duration(exposure_time),
        };
        let _ = sequence.push(base);

        for entry in self.state.burn_dodge().iter() {
            let total = self.state.burn_dodge_exposure_time(entry);
            let (kind, time) = if entry.is_burn() {
                (ExposureStepKind::Burn, total - exposure_time)
            } else if entry.is_dodge() {
                (ExposureStepKind::Dodge, exposure_time - total)
            } else {
                continue;
            };
            let _ = sequence.push(ExposureStep {
                kind,
                contrast_grade: entry.contrast_grade,
                filter_recipe: filter.recipe(entry.contrast_grade),
                time: seconds_to_duration(time),
            });
        }

        sequence
    }
}

impl<S: PaperProfileStore> ExposureUsecasesPort for ExposureUsecases<S> {
    fn exposure_state_mut(&mut self) -> &mut ExposureState {
        &mut self.state
    }

    fn select_paper_profile(&mut self, index: usize) -> Result<(), ExposureUsecaseError> {
        let profile = self
            .profiles
            .profile(index)
            .ok_or(ExposureUsecaseError::ProfileNotFound)?;
        if !self.state.set_active_paper_profile_index(index) {
            return Err(ExposureUsecaseError::ProfileNotFound);
        }

        for (channel, value) in profile.channel_defaults.iter().enumerate() {
            self.state.set_channel_default_value(channel, *value);
        }
        self.state
            .set_contrast_grade(profile.constrain_grade(self.state.contrast_grade()));

        #[cfg(feature = "log")]
        log::info!("exposure: paper profile {} ({})", index, profile.name.as_str());

        Ok(())
    }

    fn clear_paper_profile(&mut self) {
        self.state.clear_active_paper_profile();
    }

    fn contrast_increase(&mut self) {
        self.state.contrast_increase();
        self.constrain_grade();
    }

    fn contrast_decrease(&mut self) {
        self.state.contrast_decrease();
        self.constrain_grade();
    }

    fn add_meter_reading(&mut self, lux: f32) -> Result<u8, ExposureUsecaseError> {
        Ok(self.state.add_meter_reading(lux)?)
    }

    fn add_burn_dodge(&mut self, entry: BurnDodgeEntry) -> Result<usize, ExposureUsecaseError> {
        let index = self.state.burn_dodge_count();
        self.state.burn_dodge_set(entry, index)?;
        Ok(index)
    }

    fn apply_calibration(&mut self) -> Result<f32, ExposureUsecaseError> {
        if self.state.meter_readings().is_empty() {
            return Err(ExposureUsecaseError::NoReadings);
        }
        let time = self
            .state
            .calibration_preset_exposure_time(PevPreset::Base)
            .ok_or(ExposureUsecaseError::CalibrationOutOfRange)?;
        if !self.state.set_base_time(time) {
            return Err(ExposureUsecaseError::CalibrationOutOfRange);
        }

        #[cfg(feature = "log")]
        log::info!("exposure: calibrated base time {}s", time);

        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use embassy_time::Duration;
    use enlarger_exposure::{ContrastGrade, ExposureMode, PevPreset};

    use super::*;

    struct Profiles([PaperProfile; 2]);

    impl PaperProfileStore for Profiles {
        fn profile(&self, index: usize) -> Option<PaperProfile> {
            self.0.get(index).cloned()
        }

        fn count(&self) -> usize {
            self.0.len()
        }
    }

    fn usecases() -> ExposureUsecases<Profiles> {
        ExposureUsecases::new(Profiles([
            PaperProfile::new("Multigrade", ContrastFilter::Durst170M)
                .with_channel_defaults([60, 45, 0]),
            PaperProfile::new("Graded 3", ContrastFilter::Meopta)
                .with_grade_range(ContrastGrade::Grade3, ContrastGrade::Grade3),
        ]))
    }

    #[test]
    fn no_profile_uses_regular_filter() {
        let usecases = usecases();
        assert!(usecases.active_paper_profile().is_none());
        assert_eq!(usecases.contrast_filter(), ContrastFilter::Regular);
        assert!(usecases.current_filter_recipe().is_none());
    }

    #[test]
    fn selecting_profile_seeds_channels() {
        let mut usecases = usecases();
        usecases.select_paper_profile(0).unwrap();

        assert_eq!(usecases.exposure_state().active_paper_profile_index(), Some(0));
        assert_eq!(usecases.exposure_state().channel_values(), [60, 45, 0]);
        assert_eq!(usecases.contrast_filter(), ContrastFilter::Durst170M);
        assert!(usecases.current_filter_recipe().is_some());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let mut usecases = usecases();
        assert_eq!(
            usecases.select_paper_profile(5),
            Err(ExposureUsecaseError::ProfileNotFound)
        );
        assert!(usecases.exposure_state().active_paper_profile_index().is_none());
    }

    #[test]
    fn graded_paper_pins_contrast() {
        let mut usecases = usecases();
        usecases.select_paper_profile(1).unwrap();
        assert_eq!(usecases.exposure_state().contrast_grade(), ContrastGrade::Grade3);

        usecases.contrast_increase();
        assert_eq!(usecases.exposure_state().contrast_grade(), ContrastGrade::Grade3);
        usecases.contrast_decrease();
        assert_eq!(usecases.exposure_state().contrast_grade(), ContrastGrade::Grade3);

        usecases.clear_paper_profile();
        usecases.contrast_increase();
        assert!(usecases.exposure_state().contrast_grade() > ContrastGrade::Grade3);
    }

    #[test]
    fn sequence_without_adjustments_is_base_only() {
        let mut usecases = usecases();
        usecases.exposure_state_mut().set_base_time(10.0);

        let sequence = usecases.printing_sequence();
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence[0].kind, ExposureStepKind::Base);
        assert_eq!(sequence[0].time, Duration::from_millis(10_000));
    }

    #[test]
    fn sequence_lists_burn_and_dodge_steps() {
        let mut usecases = usecases();
        usecases.select_paper_profile(0).unwrap();
        usecases.exposure_state_mut().set_base_time(10.0);

        let burn = BurnDodgeEntry::new(ContrastGrade::Grade4, 1, 1);
        let dodge = BurnDodgeEntry::new(ContrastGrade::Grade1, -1, 1);
        assert_eq!(usecases.add_burn_dodge(burn), Ok(0));
        assert_eq!(usecases.add_burn_dodge(dodge), Ok(1));

        let sequence = usecases.printing_sequence();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence[1].kind, ExposureStepKind::Burn);
        assert_eq!(sequence[1].time, Duration::from_millis(10_000));
        assert_eq!(sequence[1].contrast_grade, ContrastGrade::Grade4);
        assert_eq!(
            sequence[1].filter_recipe,
            ContrastFilter::Durst170M.recipe(ContrastGrade::Grade4)
        );
        assert_eq!(sequence[2].kind, ExposureStepKind::Dodge);
        assert_eq!(sequence[2].time, Duration::from_millis(5_000));
    }

    #[test]
    fn burn_dodge_list_fills_up() {
        let mut usecases = usecases();
        let entry = BurnDodgeEntry::new(ContrastGrade::Grade2, 1, 2);
        for index in 0..enlarger_exposure::config::BURN_DODGE_MAX {
            assert_eq!(usecases.add_burn_dodge(entry), Ok(index));
        }
        assert!(matches!(
            usecases.add_burn_dodge(entry),
            Err(ExposureUsecaseError::BurnDodge(_))
        ));
    }

    #[test]
    fn calibration_needs_readings() {
        let mut usecases = usecases();
        assert_eq!(
            usecases.apply_calibration(),
            Err(ExposureUsecaseError::NoReadings)
        );
    }

    #[test]
    fn calibration_sets_base_time() {
        let mut usecases = usecases();
        usecases.exposure_state_mut().set_mode(ExposureMode::Calibration);
        usecases
            .exposure_state_mut()
            .calibration_pev_set_preset(PevPreset::Base);
        usecases.add_meter_reading(2.0).unwrap();

        // PEV 24 is 4 lux-seconds
        let time = usecases.apply_calibration().unwrap();
        assert!((time - 2.0).abs() < 0.05);
        assert_eq!(usecases.exposure_state().base_time(), time);
    }

    #[test]
    fn calibration_ignores_strip_target() {
        let mut usecases = usecases();
        usecases.exposure_state_mut().set_mode(ExposureMode::Calibration);
        usecases.add_meter_reading(2.0).unwrap();
        let state = usecases.exposure_state_mut();
        state.calibration_pev_set_preset(PevPreset::Strip);
        for _ in 0..6 {
            state.calibration_pev_increase();
        }

        let time = usecases.apply_calibration().unwrap();
        assert!((time - 2.0).abs() < 0.05);
        assert_eq!(usecases.exposure_state().base_time(), time);
    }

    #[test]
    fn invalid_reading_is_reported() {
        let mut usecases = usecases();
        assert!(matches!(
            usecases.add_meter_reading(-1.0),
            Err(ExposureUsecaseError::Reading(_))
        ));
    }

    #[test]
    fn snapshot_carries_filter_recipe() {
        let mut usecases = usecases();
        usecases.select_paper_profile(0).unwrap();
        let snapshot = usecases.snapshot();
        assert_eq!(snapshot.paper_profile, Some(0));
        assert_eq!(snapshot.filter_recipe, usecases.current_filter_recipe());
    }
}
