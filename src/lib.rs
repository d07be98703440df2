pub mod application;
pub mod connector;
pub mod domain;
pub mod tui;

pub use application::{AnalysisService, AnalyzeProductUseCase};

pub use connector::{HttpAnalysisClient, MockAnalysisClient, DEFAULT_BASE_URL};

pub use domain::{
    AnalysisReport, DomainError, ProductProfile, ProfileField, ValidationError,
};
