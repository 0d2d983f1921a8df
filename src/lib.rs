//! Emploi Romand — backend for a job-search service aimed at Swiss
//! francophone job seekers: profiles, job search, an application tracking
//! board, two psychometric self-assessments and interview preparation.

pub mod admin_cli;
pub mod auth;
pub mod config;
pub mod database;
pub mod interview;
pub mod models;
pub mod repositories;
pub mod scoring;
pub mod utils;
pub mod web;

pub use config::ConfigManager;
pub use database::Database;
pub use web::start_web_server;
