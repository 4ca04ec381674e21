mod exposure;

pub use exposure::ExposureUsecases;
