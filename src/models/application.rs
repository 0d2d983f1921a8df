// src/models/application.rs
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::profile::ContractType;

/// Where an application sits on the tracking board.
///
/// The set is a convention, not a state machine: a drag action may move an
/// application from any status to any other, and the service does not
/// enforce a legal-transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Applied,
    InterviewScheduled,
    InterviewDone,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    /// Board columns in display order. Withdrawn applications are kept in
    /// storage but not shown on the board.
    pub const BOARD: [ApplicationStatus; 6] = [
        ApplicationStatus::Draft,
        ApplicationStatus::Applied,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::InterviewDone,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// French column title shown above each board column.
    pub fn title(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Brouillons",
            ApplicationStatus::Applied => "Envoyées",
            ApplicationStatus::InterviewScheduled => "Entretien prévu",
            ApplicationStatus::InterviewDone => "Entretien passé",
            ApplicationStatus::Accepted => "Acceptées",
            ApplicationStatus::Rejected => "Refusées",
            ApplicationStatus::Withdrawn => "Retirées",
        }
    }
}

/// One application a user tracks against a job offer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub job_offer_id: String,
    pub status: ApplicationStatus,
    /// Position within the status column; recomputed to the drop index on
    /// every move. Concurrent movers are last-write-wins.
    pub kanban_position: i64,
    pub generated_cv_url: Option<String>,
    pub generated_cover_letter_url: Option<String>,
    pub custom_cv_url: Option<String>,
    pub custom_cover_letter_url: Option<String>,
    pub additional_documents: Json<Vec<String>>,
    pub application_sent_at: Option<DateTime<Utc>>,
    pub interview_date: Option<DateTime<Utc>>,
    pub interview_notes: Option<String>,
    pub feedback: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub auto_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application joined with the headline fields of its offer, as shown on a
/// board card.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ApplicationWithOffer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: Application,
    pub job_title: String,
    pub job_company: String,
    pub job_location: Option<String>,
    pub job_contract_type: ContractType,
}

#[derive(Debug, Clone, Serialize)]
pub struct KanbanColumn {
    pub status: ApplicationStatus,
    pub title: &'static str,
    pub applications: Vec<ApplicationWithOffer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    /// Group applications into board columns, preserving the incoming
    /// per-column order (callers fetch ordered by kanban position).
    pub fn build(applications: Vec<ApplicationWithOffer>) -> Self {
        let mut columns: Vec<KanbanColumn> = ApplicationStatus::BOARD
            .iter()
            .map(|&status| KanbanColumn {
                status,
                title: status.title(),
                applications: Vec::new(),
            })
            .collect();

        for app in applications {
            if let Some(column) = columns
                .iter_mut()
                .find(|c| c.status == app.application.status)
            {
                column.applications.push(app);
            }
        }

        Self { columns }
    }
}

/// Headline numbers for the dashboard, derived from the user's
/// applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_applications: i64,
    pub applications_this_month: i64,
    pub interviews_scheduled: i64,
    pub success_rate: i64,
}

impl DashboardStats {
    pub fn from_applications(applications: &[Application], now: DateTime<Utc>) -> Self {
        let total = applications.len() as i64;
        let this_month = applications
            .iter()
            .filter(|a| {
                a.created_at.year() == now.year() && a.created_at.month() == now.month()
            })
            .count() as i64;
        let interviews = applications
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    ApplicationStatus::InterviewScheduled | ApplicationStatus::InterviewDone
                )
            })
            .count() as i64;
        let accepted = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .count();
        let success_rate = if applications.is_empty() {
            0
        } else {
            (accepted as f64 / applications.len() as f64 * 100.0).round() as i64
        };

        Self {
            total_applications: total,
            applications_this_month: this_month,
            interviews_scheduled: interviews,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn application(status: ApplicationStatus, created_at: DateTime<Utc>) -> Application {
        Application {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "user-1".to_string(),
            job_offer_id: "job-1".to_string(),
            status,
            kanban_position: 0,
            generated_cv_url: None,
            generated_cover_letter_url: None,
            custom_cv_url: None,
            custom_cover_letter_url: None,
            additional_documents: Json(Vec::new()),
            application_sent_at: None,
            interview_date: None,
            interview_notes: None,
            feedback: None,
            follow_up_date: None,
            auto_generated: false,
            created_at,
            updated_at: created_at,
        }
    }

    fn card(status: ApplicationStatus, position: i64) -> ApplicationWithOffer {
        let mut app = application(status, Utc::now());
        app.kanban_position = position;
        ApplicationWithOffer {
            application: app,
            job_title: "Infirmier diplômé".to_string(),
            job_company: "CHUV".to_string(),
            job_location: Some("Lausanne".to_string()),
            job_contract_type: ContractType::Cdi,
        }
    }

    #[test]
    fn test_board_has_six_columns_in_display_order() {
        let board = KanbanBoard::build(Vec::new());
        assert_eq!(board.columns.len(), 6);
        assert_eq!(board.columns[0].status, ApplicationStatus::Draft);
        assert_eq!(board.columns[5].status, ApplicationStatus::Rejected);
        assert!(board.columns.iter().all(|c| c.applications.is_empty()));
    }

    #[test]
    fn test_board_groups_by_status_preserving_order() {
        let board = KanbanBoard::build(vec![
            card(ApplicationStatus::Applied, 0),
            card(ApplicationStatus::Draft, 0),
            card(ApplicationStatus::Applied, 1),
        ]);
        let applied = &board.columns[1];
        assert_eq!(applied.applications.len(), 2);
        assert_eq!(applied.applications[0].application.kanban_position, 0);
        assert_eq!(applied.applications[1].application.kanban_position, 1);
        assert_eq!(board.columns[0].applications.len(), 1);
    }

    #[test]
    fn test_board_hides_withdrawn_applications() {
        let board = KanbanBoard::build(vec![card(ApplicationStatus::Withdrawn, 0)]);
        assert!(board.columns.iter().all(|c| c.applications.is_empty()));
    }

    #[test]
    fn test_dashboard_stats() {
        let now = Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap();
        let last_month = Utc.with_ymd_and_hms(2026, 7, 2, 12, 0, 0).unwrap();
        let apps = vec![
            application(ApplicationStatus::Accepted, now),
            application(ApplicationStatus::InterviewScheduled, now),
            application(ApplicationStatus::InterviewDone, last_month),
            application(ApplicationStatus::Rejected, last_month),
        ];

        let stats = DashboardStats::from_applications(&apps, now);
        assert_eq!(stats.total_applications, 4);
        assert_eq!(stats.applications_this_month, 2);
        assert_eq!(stats.interviews_scheduled, 2);
        assert_eq!(stats.success_rate, 25);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = DashboardStats::from_applications(&[], Utc::now());
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_status_tags() {
        let json = serde_json::to_string(&ApplicationStatus::InterviewScheduled).unwrap();
        assert_eq!(json, "\"interview_scheduled\"");
        assert!(serde_json::from_str::<ApplicationStatus>("\"on_hold\"").is_err());
    }
}
