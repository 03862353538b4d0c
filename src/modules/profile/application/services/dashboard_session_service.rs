use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::profile::application::{
    domain::{
        form::FormEvent,
        policies::attachment_policy::AttachmentPolicy,
        session::{DashboardSession, DashboardView, PROFILE_SAVED_NOTICE},
    },
    ports::incoming::use_cases::{
        DashboardSessionError, DashboardSessionUseCase, ListProfilesUseCase, SaveProfileCommand,
        SaveProfileUseCase,
    },
};

/// Owns the single dashboard session and drives save/list through the use cases.
pub struct DashboardSessionService {
    session: Mutex<DashboardSession>,
    save_profile: Arc<dyn SaveProfileUseCase + Send + Sync>,
    list_profiles: Arc<dyn ListProfilesUseCase + Send + Sync>,
    policy: AttachmentPolicy,
}

impl DashboardSessionService {
    pub fn new(
        save_profile: Arc<dyn SaveProfileUseCase + Send + Sync>,
        list_profiles: Arc<dyn ListProfilesUseCase + Send + Sync>,
        policy: AttachmentPolicy,
    ) -> Self {
        Self {
            session: Mutex::new(DashboardSession::default()),
            save_profile,
            list_profiles,
            policy,
        }
    }

    async fn render(
        &self,
        session: &DashboardSession,
        notice: Option<String>,
    ) -> Result<DashboardView, DashboardSessionError> {
        let saved = if session.show_saved {
            Some(self.list_profiles.execute().await?)
        } else {
            None
        };

        Ok(session.render(notice, saved.as_deref()))
    }

    async fn handle(
        &self,
        session: &mut DashboardSession,
        event: FormEvent,
    ) -> Result<Option<String>, DashboardSessionError> {
        match event {
            FormEvent::SaveProfile => {
                let command = SaveProfileCommand::new(&session.form, &self.policy)?;
                self.save_profile.execute(command).await?;
                return Ok(Some(PROFILE_SAVED_NOTICE.to_string()));
            }
            FormEvent::ShowSavedProfiles(show) => session.show_saved = show,
            FormEvent::SetTheme(theme) => session.theme = theme,
            edit => session.form.apply(edit, &self.policy)?,
        }
        Ok(None)
    }
}

#[async_trait]
impl DashboardSessionUseCase for DashboardSessionService {
    async fn dispatch(&self, event: FormEvent) -> Result<DashboardView, DashboardSessionError> {
        let mut session = self.session.lock().await;
        let kind = event.kind();
        debug!(event = kind, "Dispatching dashboard event");

        let notice = self
            .handle(&mut session, event)
            .await
            .inspect_err(|e| warn!(event = kind, error = %e, "Dashboard event rejected"))?;

        self.render(&session, notice).await
    }

    async fn view(&self) -> Result<DashboardView, DashboardSessionError> {
        let session = self.session.lock().await;
        self.render(&session, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::profile::{
        adapter::outgoing::InMemoryProfileStore,
        application::{
            domain::{
                entities::{Skill, StagedAttachment},
                form::FormError,
                session::Theme,
            },
            ports::outgoing::ProfileStore,
            services::{ListProfilesService, SaveProfileService},
        },
    };

    // ============================================================
    // Helpers
    // ============================================================

    fn service_with_store() -> (DashboardSessionService, InMemoryProfileStore) {
        let store = InMemoryProfileStore::new();
        let service = DashboardSessionService::new(
            Arc::new(SaveProfileService::new(store.clone())),
            Arc::new(ListProfilesService::new(store.clone())),
            AttachmentPolicy::default(),
        );
        (service, store)
    }

    async fn dispatch_all(service: &DashboardSessionService, events: Vec<FormEvent>) {
        for event in events {
            service.dispatch(event).await.unwrap();
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[tokio::test]
    async fn initial_view_is_empty_form() {
        let (service, _) = service_with_store();

        let view = service.view().await.unwrap();

        assert_eq!(view.form.date_of_birth.to_string(), "2000-01-01");
        assert!(view.notice.is_none());
        assert!(view.saved_profiles.is_none());
        assert_eq!(view.theme, Theme::Light);
    }

    #[tokio::test]
    async fn edits_are_reflected_in_summary() {
        let (service, _) = service_with_store();

        dispatch_all(
            &service,
            vec![
                FormEvent::SetName("Asha".to_string()),
                FormEvent::SelectSkills(vec![Skill::Python]),
            ],
        )
        .await;
        let view = service
            .dispatch(FormEvent::SetProjectDescription("A tracker app".to_string()))
            .await
            .unwrap();

        assert_eq!(view.summary.name, "Asha");
        assert_eq!(view.summary.skill_bars[0].label, "Python: 5/10");
        assert_eq!(view.summary.project.word_count, 3);
    }

    #[tokio::test]
    async fn save_appends_snapshot_and_shows_notice_once() {
        let (service, store) = service_with_store();
        dispatch_all(
            &service,
            vec![
                FormEvent::SetName("Asha".to_string()),
                FormEvent::SetDateOfBirth(NaiveDate::from_ymd_opt(2001, 5, 1).unwrap()),
            ],
        )
        .await;

        let saved_view = service.dispatch(FormEvent::SaveProfile).await.unwrap();
        assert_eq!(saved_view.notice.as_deref(), Some(PROFILE_SAVED_NOTICE));

        let next_view = service
            .dispatch(FormEvent::SetBio("bio".to_string()))
            .await
            .unwrap();
        assert!(next_view.notice.is_none());

        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[0].bio, "");
        assert_eq!(records[0].certificate_name.as_str(), "None");
    }

    #[tokio::test]
    async fn later_edits_do_not_touch_saved_records() {
        let (service, store) = service_with_store();
        dispatch_all(
            &service,
            vec![
                FormEvent::SetName("A".to_string()),
                FormEvent::SaveProfile,
            ],
        )
        .await;
        let first = store.list_all().await.unwrap()[0].clone();

        dispatch_all(
            &service,
            vec![
                FormEvent::SetName("B".to_string()),
                FormEvent::SelectSkills(vec![Skill::Java]),
                FormEvent::SaveProfile,
            ],
        )
        .await;

        let records = store.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records[1].name, "B");
    }

    #[tokio::test]
    async fn saved_table_follows_toggle() {
        let (service, _) = service_with_store();
        dispatch_all(&service, vec![FormEvent::SaveProfile, FormEvent::SaveProfile]).await;

        let shown = service
            .dispatch(FormEvent::ShowSavedProfiles(true))
            .await
            .unwrap();
        assert_eq!(shown.saved_profiles.map(|t| t.len()), Some(2));

        let hidden = service
            .dispatch(FormEvent::ShowSavedProfiles(false))
            .await
            .unwrap();
        assert!(hidden.saved_profiles.is_none());
    }

    #[tokio::test]
    async fn rejected_event_keeps_state() {
        let (service, _) = service_with_store();

        let result = service
            .dispatch(FormEvent::SetSkillLevel {
                skill: Skill::Sql,
                level: 4,
            })
            .await;

        assert!(matches!(
            result,
            Err(DashboardSessionError::Form(FormError::SkillNotSelected(Skill::Sql)))
        ));
        assert!(service.view().await.unwrap().form.skills.is_empty());
    }

    #[tokio::test]
    async fn staged_certificate_name_is_saved() {
        let (service, store) = service_with_store();
        dispatch_all(
            &service,
            vec![
                FormEvent::StageCertificate(StagedAttachment {
                    file_name: "aws.png".to_string(),
                    content_type: "image/png".to_string(),
                    size_bytes: 1024,
                }),
                FormEvent::SaveProfile,
            ],
        )
        .await;

        let records = store.list_all().await.unwrap();
        assert_eq!(records[0].certificate_name.as_str(), "aws.png");
    }

    #[tokio::test]
    async fn theme_is_echoed() {
        let (service, _) = service_with_store();
        let view = service
            .dispatch(FormEvent::SetTheme(Theme::Dark))
            .await
            .unwrap();
        assert_eq!(view.theme, Theme::Dark);
    }
}
