#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub school: String,
}

impl ProfileRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            school: school.into(),
        }
    }
}

/// Field selector for draft updates. Unknown field names are a compile
/// error instead of a runtime lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    School,
}

/// Staged editing over a committed [`ProfileRecord`].
///
/// The committed record is the only value the rest of the app ever reads.
/// `Some` draft means edit mode is active; the draft starts as a full copy
/// of the committed record and nothing leaks back until `save`.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    committed: ProfileRecord,
    draft: Option<ProfileRecord>,
}

impl ProfileEditor {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            committed: record,
            draft: None,
        }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.committed
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Enters edit mode. No-op if already editing.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.committed.clone());
        }
    }

    /// Overwrites one draft field. No-op outside edit mode.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            match field {
                ProfileField::Name => draft.name = value.into(),
                ProfileField::Email => draft.email = value.into(),
                ProfileField::School => draft.school = value.into(),
            }
        }
    }

    pub fn draft(&self) -> Option<&ProfileRecord> {
        self.draft.as_ref()
    }

    /// Mutable draft access for edit-mode input widgets.
    pub fn draft_mut(&mut self) -> Option<&mut ProfileRecord> {
        self.draft.as_mut()
    }

    /// Commits the draft wholesale and leaves edit mode. No-op outside edit mode.
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.committed = draft;
        }
    }

    /// Discards the draft and leaves edit mode. No-op outside edit mode.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arjun() -> ProfileRecord {
        ProfileRecord::new("Arjun", "a@x.edu", "DPS")
    }

    #[test]
    fn cancel_restores_committed_record() {
        let mut editor = ProfileEditor::new(arjun());
        editor.begin_edit();
        editor.set_field(ProfileField::Email, "new@x.edu");
        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(editor.profile(), &arjun());
    }

    #[test]
    fn save_commits_written_field_and_keeps_the_rest() {
        let mut editor = ProfileEditor::new(arjun());
        editor.begin_edit();
        editor.set_field(ProfileField::School, "New School");
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(
            editor.profile(),
            &ProfileRecord::new("Arjun", "a@x.edu", "New School")
        );
    }

    #[test]
    fn last_write_per_field_wins_on_save() {
        let mut editor = ProfileEditor::new(arjun());
        editor.begin_edit();
        editor.set_field(ProfileField::Name, "Priya");
        editor.set_field(ProfileField::Name, "Priya Sharma");
        editor.set_field(ProfileField::Email, "p@x.edu");
        editor.save();
        assert_eq!(
            editor.profile(),
            &ProfileRecord::new("Priya Sharma", "p@x.edu", "DPS")
        );
    }

    #[test]
    fn committed_record_is_untouched_while_editing() {
        let mut editor = ProfileEditor::new(arjun());
        editor.begin_edit();
        editor.set_field(ProfileField::Name, "Someone Else");
        assert_eq!(editor.profile(), &arjun());
        assert_eq!(editor.draft().unwrap().name, "Someone Else");
    }

    #[test]
    fn edit_operations_outside_edit_mode_are_noops() {
        let mut editor = ProfileEditor::new(arjun());
        editor.set_field(ProfileField::Name, "Ignored");
        editor.save();
        editor.cancel();
        assert_eq!(editor.profile(), &arjun());
        assert!(!editor.is_editing());
    }

    #[test]
    fn begin_edit_twice_keeps_first_draft() {
        let mut editor = ProfileEditor::new(arjun());
        editor.begin_edit();
        editor.set_field(ProfileField::Name, "Changed");
        editor.begin_edit();
        assert_eq!(editor.draft().unwrap().name, "Changed");
    }
}
