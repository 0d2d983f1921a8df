// src/models/mod.rs
//! Typed rows and closed vocabularies for everything the service persists.

pub mod application;
pub mod assessment;
pub mod geo;
pub mod job;
pub mod profile;
pub mod resource;

pub use application::{
    Application, ApplicationStatus, ApplicationWithOffer, DashboardStats, KanbanBoard,
    KanbanColumn,
};
pub use assessment::{EnneagramQuestion, EnneagramResult, RiasecQuestion, RiasecResult};
pub use geo::{Canton, Commune, Sector};
pub use job::{JobOffer, JobSearchFilters};
pub use profile::{
    Availability, AutomationLevel, ContractType, ExperienceLevel, ProfileUpdate,
    SubscriptionType, UserProfile,
};
pub use resource::{InterviewResource, ResourceType};
