//! Local state of the admin users screen.
//!
//! The list is owned exclusively by the screen. Every mutation goes through
//! the methods below, which keep two invariants: user ids are unique within
//! the list, and each row has a [`LocalKey`] that never changes for as long
//! as the row exists. The key is only a render key and is never sent to the
//! server.

use log::{debug, info, warn};
use std::collections::HashSet;
use warden_model::{User, UserDraft, UserId};

/// Render key for a row, unique for the lifetime of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalKey(u64);

impl LocalKey {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// How a row relates to what the server holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Came from the server, or the server confirmed it
    Synced,
    /// Added locally; the create call has not answered yet
    Pending,
    /// Added locally; the create call failed
    Unsynced,
    /// Remote delete issued; the row goes away once it answers
    Removing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntry {
    pub key: LocalKey,
    pub user: User,
    pub sync: SyncState,
}

impl UserEntry {
    /// Whether the server knows this row under its current id.
    pub fn is_persisted(&self) -> bool {
        self.sync == SyncState::Synced && !self.user.id.is_provisional()
    }
}

/// Initial fetch lifecycle: `NotLoaded -> Loading -> (Loaded | Failed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadState::NotLoaded | LoadState::Loading)
    }
}

/// Editable fields of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserFormState {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_default(),
            role: user.role.clone().unwrap_or_default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Draft for a new user. Blank fields are left out.
    pub fn to_draft(&self) -> UserDraft {
        fn filled(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        UserDraft {
            name: filled(&self.name),
            email: filled(&self.email),
            role: filled(&self.role),
            ..UserDraft::default()
        }
    }

    /// Draft replacing every form field of an existing user. A blank email
    /// or role is sent as an empty string, which clears it on merge.
    pub fn to_edit_draft(&self) -> UserDraft {
        UserDraft {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            ..UserDraft::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        /// Row being edited; `None` means the form adds a new user
        editing: Option<LocalKey>,
        form: UserFormState,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Merged into the edited row. `applied` is false when that row was
    /// removed while the modal was open.
    Edited { applied: bool },
    /// Appended a pending row; the caller must send `draft` to the server.
    Created { key: LocalKey, draft: UserDraft },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveAction {
    /// The server knows the user; call the remote delete.
    Remote(UserId),
    /// The row never reached the server and has already been dropped.
    LocalOnly,
    /// A remote delete for this row is already in flight.
    AlreadyRemoving,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Confirmed,
    Failed,
    /// The server created a user whose row was removed in the meantime.
    Orphaned(UserId),
}

#[derive(Debug, Default)]
pub struct UserManagementState {
    entries: Vec<UserEntry>,
    error: Option<String>,
    load_state: LoadState,
    modal: ModalState,
    next_key: u64,
}

impl UserManagementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UserEntry] {
        &self.entries
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().map(|entry| &entry.user)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    pub fn form(&self) -> Option<&UserFormState> {
        match &self.modal {
            ModalState::Open { form, .. } => Some(form),
            ModalState::Closed => None,
        }
    }

    /// The user the open modal is editing, if any.
    pub fn editing_user(&self) -> Option<&User> {
        match &self.modal {
            ModalState::Open {
                editing: Some(key), ..
            } => self.entry_by_key(*key).map(|entry| &entry.user),
            _ => None,
        }
    }

    pub fn entry_by_id(&self, id: &UserId) -> Option<&UserEntry> {
        self.entries.iter().find(|entry| &entry.user.id == id)
    }

    pub fn entry_by_key(&self, key: LocalKey) -> Option<&UserEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    fn mint_key(&mut self) -> LocalKey {
        self.next_key += 1;
        LocalKey(self.next_key)
    }

    /// Move to `Loading` if the fetch has not been issued yet.
    ///
    /// Returns false when a fetch was already issued for this screen.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::NotLoaded {
            debug!("User list already requested ({:?}), skipping", self.load_state);
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Apply the result of the initial fetch.
    pub fn apply_loaded(&mut self, result: Result<Vec<User>, String>) {
        match result {
            Ok(users) => {
                let mut seen = HashSet::with_capacity(users.len());
                let mut entries = Vec::with_capacity(users.len());

                for user in users {
                    if !seen.insert(user.id.clone()) {
                        warn!("Dropping duplicate user id {} from server list", user.id);
                        continue;
                    }
                    let key = self.mint_key();
                    entries.push(UserEntry {
                        key,
                        user,
                        sync: SyncState::Synced,
                    });
                }

                info!("Loaded {} users", entries.len());
                self.entries = entries;
                self.load_state = LoadState::Loaded;
            }
            Err(error) => {
                warn!("Failed to load users: {}", error);
                self.entries.clear();
                self.error = Some(error);
                self.load_state = LoadState::Failed;
            }
        }
    }

    pub fn open_create(&mut self) {
        self.modal = ModalState::Open {
            editing: None,
            form: UserFormState::default(),
        };
    }

    /// Open the modal for `id`; an unknown id opens an empty form.
    pub fn begin_edit(&mut self, id: &UserId) {
        self.modal = match self.entry_by_id(id) {
            Some(entry) => ModalState::Open {
                editing: Some(entry.key),
                form: UserFormState::from_user(&entry.user),
            },
            None => {
                debug!("Edit requested for unknown user {}, opening empty form", id);
                ModalState::Open {
                    editing: None,
                    form: UserFormState::default(),
                }
            }
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn update_form(&mut self, edit: impl FnOnce(&mut UserFormState)) {
        if let ModalState::Open { form, .. } = &mut self.modal {
            edit(form);
        }
    }

    /// Submit the open form. Returns `None` when the modal is closed or the
    /// form is not submittable.
    pub fn submit_form(&mut self) -> Option<SubmitOutcome> {
        let draft = match &self.modal {
            ModalState::Open {
                form,
                editing: Some(_),
            } if form.can_submit() => form.to_edit_draft(),
            ModalState::Open {
                form,
                editing: None,
            } if form.can_submit() => form.to_draft(),
            _ => return None,
        };
        Some(self.submit(draft))
    }

    /// Edit the target row in place, or append a new pending row. The modal
    /// is closed either way.
    pub fn submit(&mut self, draft: UserDraft) -> SubmitOutcome {
        let editing = match &self.modal {
            ModalState::Open { editing, .. } => *editing,
            ModalState::Closed => None,
        };
        self.close_modal();

        match editing {
            Some(key) => {
                let entry = self.entries.iter_mut().find(|entry| entry.key == key);
                let applied = match entry {
                    Some(entry) => {
                        entry.user.merge(draft);
                        true
                    }
                    None => {
                        warn!("Edited user disappeared before submit; discarding changes");
                        false
                    }
                };
                SubmitOutcome::Edited { applied }
            }
            None => {
                let key = self.mint_key();
                let user = User::from_draft(UserId::provisional(), draft.clone());
                self.entries.push(UserEntry {
                    key,
                    user,
                    sync: SyncState::Pending,
                });
                SubmitOutcome::Created { key, draft }
            }
        }
    }

    /// Fold the server's answer to a create call into the pending row.
    ///
    /// On success the row adopts the server-assigned identity and keeps its
    /// position; edits made while the call was in flight are preserved.
    pub fn reconcile_created(
        &mut self,
        key: LocalKey,
        result: Result<User, String>,
    ) -> ReconcileOutcome {
        let Some(index) = self.entries.iter().position(|entry| entry.key == key) else {
            return match result {
                Ok(user) => {
                    warn!("Created user {} has no row anymore", user.id);
                    ReconcileOutcome::Orphaned(user.id)
                }
                Err(_) => ReconcileOutcome::Failed,
            };
        };

        match result {
            Ok(server_user) => {
                if self
                    .entries
                    .iter()
                    .any(|entry| entry.key != key && entry.user.id == server_user.id)
                {
                    warn!(
                        "Server id {} already listed; dropping duplicate row",
                        server_user.id
                    );
                    self.entries.remove(index);
                    return ReconcileOutcome::Confirmed;
                }

                let entry = &mut self.entries[index];
                let User {
                    id,
                    created_at,
                    extra,
                    ..
                } = server_user;
                entry.user.id = id;
                entry.user.created_at = created_at;
                for (field, value) in extra {
                    entry.user.extra.entry(field).or_insert(value);
                }
                entry.sync = SyncState::Synced;
                info!("User {} confirmed by server", entry.user.id);
                ReconcileOutcome::Confirmed
            }
            Err(error) => {
                warn!("Failed to add user: {}", error);
                self.entries[index].sync = SyncState::Unsynced;
                ReconcileOutcome::Failed
            }
        }
    }

    /// Decide how to remove `id`. Rows the server never confirmed are
    /// dropped immediately; persisted rows are marked until the delete
    /// answers, so a repeat request does not issue a second delete.
    pub fn request_remove(&mut self, id: &UserId) -> RemoveAction {
        let Some(entry) = self.entries.iter_mut().find(|entry| &entry.user.id == id) else {
            return RemoveAction::NotFound;
        };

        if entry.sync == SyncState::Removing {
            return RemoveAction::AlreadyRemoving;
        }

        if entry.is_persisted() {
            entry.sync = SyncState::Removing;
            RemoveAction::Remote(id.clone())
        } else {
            self.entries.retain(|entry| &entry.user.id != id);
            self.error = None;
            RemoveAction::LocalOnly
        }
    }

    /// Apply the answer of a remote delete. The row is dropped whether or
    /// not the call succeeded; the error message reflects the outcome.
    pub fn apply_removed(&mut self, id: &UserId, result: Result<(), String>) {
        match result {
            Ok(()) => self.error = None,
            Err(error) => {
                warn!("Failed to remove user {}: {}", id, error);
                self.error = Some(error);
            }
        }
        self.entries.retain(|entry| &entry.user.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(users: Vec<User>) -> UserManagementState {
        let mut state = UserManagementState::new();
        assert!(state.begin_load());
        state.apply_loaded(Ok(users));
        state
    }

    fn names(state: &UserManagementState) -> Vec<&str> {
        state.users().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn load_happens_once() {
        let mut state = UserManagementState::new();
        assert!(state.is_loading());
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.apply_loaded(Ok(vec![]));
        assert!(!state.begin_load());
        assert!(!state.is_loading());
    }

    #[test]
    fn duplicate_ids_from_server_are_dropped() {
        let state = loaded(vec![
            User::new("1", "Ann"),
            User::new("1", "Impostor"),
            User::new("2", "Bo"),
        ]);
        assert_eq!(names(&state), ["Ann", "Bo"]);
    }

    #[test]
    fn keys_are_unique_across_load_and_add() {
        let mut state = loaded(vec![User::new("1", "Ann"), User::new("2", "Bo")]);
        state.open_create();
        state.submit(UserDraft::default().with_name("Cy"));

        let keys: HashSet<_> = state.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn edit_of_missing_row_is_discarded() {
        let mut state = loaded(vec![User::new("1", "Ann")]);
        state.begin_edit(&UserId::new("1"));
        state.apply_removed(&UserId::new("1"), Ok(()));

        let outcome = state.submit(UserDraft::default().with_name("Ghost"));
        assert_eq!(outcome, SubmitOutcome::Edited { applied: false });
        assert!(state.is_empty());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn form_with_blank_name_cannot_submit() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.update_form(|form| form.email = "x@example.com".into());
        assert!(state.submit_form().is_none());
        assert!(state.is_modal_open());
        assert!(state.is_empty());
    }

    #[test]
    fn form_draft_skips_blank_fields() {
        let form = UserFormState {
            name: "  Dee ".into(),
            email: String::new(),
            role: "manager".into(),
        };
        let draft = form.to_draft();
        assert_eq!(draft.name.as_deref(), Some("Dee"));
        assert_eq!(draft.email, None);
        assert_eq!(draft.role.as_deref(), Some("manager"));
    }

    #[test]
    fn edit_draft_clears_blank_fields() {
        let mut state = loaded(vec![User {
            email: Some("ann@example.com".into()),
            role: Some("manager".into()),
            ..User::new("1", "Ann")
        }]);
        state.begin_edit(&UserId::new("1"));
        state.update_form(|form| {
            form.email = "  ".into();
            form.role = String::new();
        });

        assert_eq!(
            state.submit_form(),
            Some(SubmitOutcome::Edited { applied: true })
        );
        let user = &state.entries()[0].user;
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, None);
        assert_eq!(user.role, None);
    }

    #[test]
    fn reconcile_adopts_server_identity_and_keeps_local_edits() {
        let mut state = loaded(vec![]);
        state.open_create();
        let SubmitOutcome::Created { key, .. } = state.submit(UserDraft::default().with_name("Dee"))
        else {
            panic!("expected a created row");
        };

        let provisional = state.entries()[0].user.id.clone();
        state.begin_edit(&provisional);
        state.submit(UserDraft::default().with_name("Dee Renamed"));

        let server = User::new("srv-9", "Dee");
        assert_eq!(
            state.reconcile_created(key, Ok(server)),
            ReconcileOutcome::Confirmed
        );

        let entry = &state.entries()[0];
        assert_eq!(entry.key, key);
        assert_eq!(entry.user.id.as_str(), "srv-9");
        assert_eq!(entry.user.name, "Dee Renamed");
        assert_eq!(entry.sync, SyncState::Synced);
    }

    #[test]
    fn failed_create_keeps_row_unsynced_without_error() {
        let mut state = loaded(vec![]);
        state.open_create();
        let SubmitOutcome::Created { key, .. } = state.submit(UserDraft::default().with_name("Eve"))
        else {
            panic!("expected a created row");
        };

        assert_eq!(
            state.reconcile_created(key, Err("boom".into())),
            ReconcileOutcome::Failed
        );
        assert_eq!(state.entries()[0].sync, SyncState::Unsynced);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn removing_unconfirmed_row_is_local_only() {
        let mut state = loaded(vec![]);
        state.open_create();
        state.submit(UserDraft::default().with_name("Fay"));
        let id = state.entries()[0].user.id.clone();

        assert_eq!(state.request_remove(&id), RemoveAction::LocalOnly);
        assert!(state.is_empty());
        assert_eq!(state.request_remove(&id), RemoveAction::NotFound);
    }

    #[test]
    fn repeat_remove_while_in_flight_is_ignored() {
        let mut state = loaded(vec![User::new("1", "Ann")]);
        let id = UserId::new("1");

        assert_eq!(state.request_remove(&id), RemoveAction::Remote(id.clone()));
        assert_eq!(state.entries()[0].sync, SyncState::Removing);
        assert_eq!(state.request_remove(&id), RemoveAction::AlreadyRemoving);

        state.apply_removed(&id, Ok(()));
        assert!(state.is_empty());
        assert_eq!(state.request_remove(&id), RemoveAction::NotFound);
    }

    #[test]
    fn local_only_remove_clears_previous_error() {
        let mut state = UserManagementState::new();
        state.begin_load();
        state.apply_loaded(Err("offline".into()));
        state.open_create();
        state.submit(UserDraft::default().with_name("Hal"));
        let id = state.entries()[0].user.id.clone();

        assert_eq!(state.request_remove(&id), RemoveAction::LocalOnly);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn orphaned_create_is_reported() {
        let mut state = loaded(vec![]);
        state.open_create();
        let SubmitOutcome::Created { key, .. } = state.submit(UserDraft::default().with_name("Gus"))
        else {
            panic!("expected a created row");
        };
        let id = state.entries()[0].user.id.clone();
        state.request_remove(&id);

        assert_eq!(
            state.reconcile_created(key, Ok(User::new("srv-1", "Gus"))),
            ReconcileOutcome::Orphaned(UserId::new("srv-1"))
        );
    }

    #[test]
    fn successful_remove_clears_previous_error() {
        let mut state = UserManagementState::new();
        state.begin_load();
        state.apply_loaded(Err("offline".into()));
        assert_eq!(state.error(), Some("offline"));

        state.apply_removed(&UserId::new("nope"), Ok(()));
        assert_eq!(state.error(), None);
    }
}
