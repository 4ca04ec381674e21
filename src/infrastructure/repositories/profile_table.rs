use heapless::Vec;

use crate::domain::{entity::PaperProfile, ports::PaperProfileStore};

/// Paper profile store held in memory
///
/// Stands in for the device's profile storage, which is filled by the
/// board support code at boot.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileTable<const N: usize> {
    profiles: Vec<PaperProfile, N>,
}

impl<const N: usize> StaticProfileTable<N> {
    pub const fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Append a profile and return its index
    ///
    /// Hands the profile back when the table is full.
    pub fn add(&mut self, profile: PaperProfile) -> Result<usize, PaperProfile> {
        let index = self.profiles.len();
        self.profiles.push(profile)?;
        Ok(index)
    }

    /// Replace the profile at `index`
    pub fn replace(&mut self, index: usize, profile: PaperProfile) -> bool {
        match self.profiles.get_mut(index) {
            Some(slot) => {
                *slot = profile;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.profiles.clear();
    }
}

impl<const N: usize> PaperProfileStore for StaticProfileTable<N> {
    fn profile(&self, index: usize) -> Option<PaperProfile> {
        self.profiles.get(index).cloned()
    }

    fn count(&self) -> usize {
        self.profiles.len()
    }
}
