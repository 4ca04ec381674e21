use crate::domain::entity::PaperProfile;

/// Reader interface for the external paper profile store
pub trait PaperProfileStore {
    /// Get the profile stored at `index`
    fn profile(&self, index: usize) -> Option<PaperProfile>;

    /// Number of stored profiles
    fn count(&self) -> usize;
}

impl<T: PaperProfileStore + ?Sized> PaperProfileStore for &T {
    fn profile(&self, index: usize) -> Option<PaperProfile> {
        (**self).profile(index)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}
