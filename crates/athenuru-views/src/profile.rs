//! Profile form state
//!
//! Local to the session: saving replaces the shown profile and returns a
//! confirmation [`Notice`], nothing is persisted.

use std::time::Duration;

use athenuru_model::Role;
use serde::Serialize;

use crate::error::ProfileError;

/// Editable personal information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub department: String,
    pub bio: String,
}

impl Profile {
    /// Seed profile for a role; agents have none
    #[must_use]
    pub fn seed(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(Self {
                name: "Admin User".into(),
                email: "admin@athenuru.com".into(),
                phone: "+1 (555) 123-4567".into(),
                company: "Athenuru".into(),
                department: "Administration".into(),
                bio: "System administrator with full access to manage users, leads, and system settings.".into(),
            }),
            Role::Manager => Some(Self {
                name: "Manager User".into(),
                email: "manager@athenuru.com".into(),
                phone: "+1 (555) 234-5678".into(),
                company: "Athenuru".into(),
                department: "Sales Management".into(),
                bio: "Experienced sales manager responsible for team performance and lead assignment strategies.".into(),
            }),
            Role::Agent => None,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Company => &mut self.company,
            ProfileField::Department => &mut self.department,
            ProfileField::Bio => &mut self.bio,
        }
    }
}

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Company,
    Department,
    Bio,
}

/// Transient confirmation shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

impl Notice {
    #[must_use]
    pub fn profile_updated() -> Self {
        Self {
            title: "Profile Updated",
            description: "Your profile information has been saved successfully.",
            duration: Duration::from_millis(3000),
        }
    }
}

/// View/edit state machine over a [`Profile`]
///
/// Viewing shows the saved profile. [`edit`](Self::edit) opens a draft copy;
/// [`save`](Self::save) commits it and [`cancel`](Self::cancel) drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    saved: Profile,
    draft: Option<Profile>,
}

impl ProfileEditor {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            saved: profile,
            draft: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Profile as currently shown
    #[inline]
    #[must_use]
    pub fn shown(&self) -> &Profile {
        self.draft.as_ref().unwrap_or(&self.saved)
    }

    /// Last saved profile
    #[inline]
    #[must_use]
    pub fn saved(&self) -> &Profile {
        &self.saved
    }

    /// Enter edit mode; no-op if already editing
    pub fn edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    /// Change one field of the draft
    ///
    /// # Errors
    /// Returns [`ProfileError::NotEditing`] outside edit mode
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> Result<(), ProfileError> {
        let draft = self.draft.as_mut().ok_or(ProfileError::NotEditing)?;
        *draft.field_mut(field) = value.into();
        Ok(())
    }

    /// Commit the draft and leave edit mode
    ///
    /// Returns `None` when not editing.
    pub fn save(&mut self) -> Option<Notice> {
        let draft = self.draft.take()?;
        self.saved = draft;
        tracing::info!(name = %self.saved.name, "profile updated");
        Some(Notice::profile_updated())
    }

    /// Drop the draft and leave edit mode
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// The single edit/save button: enters edit mode, or saves if editing
    pub fn toggle(&mut self) -> Option<Notice> {
        if self.is_editing() {
            self.save()
        } else {
            self.edit();
            None
        }
    }
}
