// Create/Edit User dialog
// Opens empty for a new user or pre-filled for an existing one, validates the
// form locally and only then calls the API.

use std::collections::BTreeMap;

use super::UserForm;
use crate::api::{ApiError, UserService};
use crate::users::User;

pub const MSG_USER_CREATED: &str = "User created successfully!";
pub const MSG_USER_UPDATED: &str = "User updated successfully!";
pub const MSG_SAVE_FAILED: &str = "An error occurred while saving the user";

/// Result of pressing "save"
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed; carries the first field error
    Invalid(String),
    /// The API accepted the user; the modal is closed
    Saved { message: &'static str, user: User },
    /// The API rejected the payload with per-field messages
    Rejected(BTreeMap<String, String>),
    /// Any other API failure
    Failed(String),
}

pub struct UserModal<S> {
    service: S,
    form: UserForm,
    user: Option<User>,
    visible: bool,
    loading: bool,
}

impl<S: UserService> UserModal<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            form: UserForm::new(),
            user: None,
            visible: false,
            loading: false,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Show the dialog, pre-filled when editing
    pub fn open(&mut self, user: Option<User>) {
        self.form.reset();
        if let Some(user) = &user {
            self.form.load_user(user);
        }
        self.user = user;
        self.visible = true;
    }

    /// Hide the dialog and drop any edits
    pub fn close(&mut self) {
        self.visible = false;
        self.user = None;
        self.form.reset();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Editing means an existing user with a server id
    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit User"
        } else {
            "Create New User"
        }
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    fn editing_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id).filter(|id| *id != 0)
    }

    /// Validate, then create or update through the service
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.form.validate_form() {
            let first = self.form.first_error().unwrap_or_default().to_string();
            return SubmitOutcome::Invalid(first);
        }

        self.loading = true;
        let result = match self.editing_id() {
            Some(id) => {
                let request = self.form.update_request();
                self.service
                    .update_user(id, &request)
                    .await
                    .map(|user| (MSG_USER_UPDATED, user))
            }
            None => match self.form.create_request() {
                Some(request) => self
                    .service
                    .create_user(&request)
                    .await
                    .map(|user| (MSG_USER_CREATED, user)),
                None => {
                    self.loading = false;
                    return SubmitOutcome::Invalid("Date of birth is required".to_string());
                }
            },
        };
        self.loading = false;

        match result {
            Ok((message, user)) => {
                log::info!("{} (id {})", message, user.id);
                self.close();
                SubmitOutcome::Saved { message, user }
            }
            Err(ApiError::Validation { message, details }) => {
                log::warn!("Save rejected: {}", message);
                SubmitOutcome::Rejected(details)
            }
            Err(e) => {
                log::error!("Error saving user: {}", e);
                SubmitOutcome::Failed(MSG_SAVE_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserSearchParams};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeService {
        created: Mutex<Vec<CreateUserRequest>>,
        updated: Mutex<Vec<(u64, UpdateUserRequest)>>,
        reject_with: Option<BTreeMap<String, String>>,
        server_down: bool,
    }

    impl FakeService {
        fn failure(&self) -> Option<ApiError> {
            if let Some(details) = &self.reject_with {
                return Some(ApiError::Validation {
                    message: "Validation failed".to_string(),
                    details: details.clone(),
                });
            }
            self.server_down.then(|| ApiError::Server {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        }
    }

    impl UserService for FakeService {
        async fn list_users(&self, _params: &UserSearchParams) -> Result<UserListResponse, ApiError> {
            Ok(UserListResponse::default())
        }

        async fn get_user(&self, id: u64) -> Result<User, ApiError> {
            Err(ApiError::NotFound(format!("User {} not found", id)))
        }

        async fn create_user(&self, user: &CreateUserRequest) -> Result<User, ApiError> {
            if let Some(err) = self.failure() {
                return Err(err);
            }
            self.created.lock().unwrap().push(user.clone());
            Ok(User {
                id: 100,
                name: user.name.clone(),
                email: user.email.clone(),
                date_of_birth: Some(user.date_of_birth.clone()),
                ..Default::default()
            })
        }

        async fn update_user(&self, id: u64, user: &UpdateUserRequest) -> Result<User, ApiError> {
            if let Some(err) = self.failure() {
                return Err(err);
            }
            self.updated.lock().unwrap().push((id, user.clone()));
            Ok(User {
                id,
                name: user.name.clone().unwrap_or_default(),
                ..Default::default()
            })
        }

        async fn delete_user(&self, _id: u64) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn fill_valid(modal: &mut UserModal<FakeService>) {
        let form = modal.form_mut();
        form.set_name("Ana Souza");
        form.set_email("ana@example.com");
        form.set_date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 5));
    }

    fn existing_user() -> User {
        User {
            id: 7,
            name: "Bruno Lima".to_string(),
            email: "bruno@example.com".to_string(),
            date_of_birth: Some("1985-06-20".to_string()),
            phone: Some("+5511912345678".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let mut modal = UserModal::new(FakeService::default());
        modal.open(None);
        assert!(modal.is_visible());
        assert!(!modal.is_editing());
        assert_eq!(modal.title(), "Create New User");

        fill_valid(&mut modal);
        let outcome = modal.submit().await;

        match outcome {
            SubmitOutcome::Saved { message, user } => {
                assert_eq!(message, "User created successfully!");
                assert_eq!(user.id, 100);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!modal.is_visible());
        assert!(!modal.is_loading());

        let created = modal.service().created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].date_of_birth, "1990-01-05");
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_api() {
        let mut modal = UserModal::new(FakeService::default());
        modal.open(None);
        modal.form_mut().set_email("not-an-email");

        let outcome = modal.submit().await;
        assert_eq!(outcome, SubmitOutcome::Invalid("Name is required".to_string()));
        assert!(modal.is_visible());
        assert!(modal.service().created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_user_sends_update() {
        let mut modal = UserModal::new(FakeService::default());
        modal.open(Some(existing_user()));
        assert!(modal.is_editing());
        assert_eq!(modal.title(), "Edit User");
        assert_eq!(modal.form().data().name, "Bruno Lima");

        modal.form_mut().set_name("Bruno L. Lima");
        let outcome = modal.submit().await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Saved { message: "User updated successfully!", .. }
        ));

        let updated = modal.service().updated.lock().unwrap();
        assert_eq!(updated[0].0, 7);
        assert_eq!(updated[0].1.name.as_deref(), Some("Bruno L. Lima"));
        assert_eq!(updated[0].1.phone.as_deref(), Some("+5511912345678"));
    }

    #[tokio::test]
    async fn test_user_without_id_is_created() {
        let mut modal = UserModal::new(FakeService::default());
        let user = User {
            id: 0,
            ..existing_user()
        };
        modal.open(Some(user));
        assert!(!modal.is_editing());

        let outcome = modal.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Saved { message: "User created successfully!", .. }));
    }

    #[tokio::test]
    async fn test_server_validation_details() {
        let details = BTreeMap::from([("Email".to_string(), "Email already exists".to_string())]);
        let service = FakeService {
            reject_with: Some(details.clone()),
            ..Default::default()
        };
        let mut modal = UserModal::new(service);
        modal.open(None);
        fill_valid(&mut modal);

        assert_eq!(modal.submit().await, SubmitOutcome::Rejected(details));
        assert!(modal.is_visible());
        assert!(!modal.is_loading());
    }

    #[tokio::test]
    async fn test_generic_failure() {
        let service = FakeService {
            server_down: true,
            ..Default::default()
        };
        let mut modal = UserModal::new(service);
        modal.open(None);
        fill_valid(&mut modal);

        assert_eq!(
            modal.submit().await,
            SubmitOutcome::Failed("An error occurred while saving the user".to_string())
        );
        assert!(modal.is_visible());
    }

    #[test]
    fn test_close_discards_edits() {
        let mut modal = UserModal::new(FakeService::default());
        modal.open(Some(existing_user()));
        modal.close();
        assert!(!modal.is_visible());
        assert!(!modal.is_editing());
        assert_eq!(modal.form().data().name, "");
    }
}
