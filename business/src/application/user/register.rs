use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUser, Role, User};
use crate::domain::user::password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Registering user: {}", params.username));

        if params.password != params.confirm_password {
            return Err(UserError::PasswordsDoNotMatch);
        }
        password::validate_strength(&params.password)?;

        if self
            .repository
            .find_by_username(&params.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken);
        }

        let role = params.role.unwrap_or(Role::User);
        let password_hash = password::hash_password(&params.password)?;
        let candidate = NewUser::new(params.username, params.email, password_hash, role)?;

        // The pre-check above can lose a race; the unique index has the
        // final word.
        let id = match self.repository.insert(&candidate).await {
            Ok(id) => id,
            Err(RepositoryError::Duplicated) => return Err(UserError::UsernameTaken),
            Err(other) => return Err(other.into()),
        };

        self.logger.info(&format!("User registered with id: {id}"));
        Ok(User::from_repository(
            id,
            candidate.username,
            candidate.email,
            candidate.password_hash,
            candidate.role,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
            async fn insert(&self, user: &NewUser) -> Result<i64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(username: &str) -> RegisterUserParams {
        RegisterUserParams {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn should_register_user_with_default_role_when_valid() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .withf(|user| user.role == Role::User && user.password_hash.starts_with("$argon2id$"))
            .returning(|_| Ok(3));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case.execute(params("alice")).await.unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::User);
        // The plaintext never reaches the stored record.
        assert_ne!(user.password_hash, "hunter2hunter2");
    }

    #[tokio::test]
    async fn should_reject_mismatched_passwords() {
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        let mut request = params("alice");
        request.confirm_password = "different-password".to_string();

        let result = use_case.execute(request).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::PasswordsDoNotMatch
        ));
    }

    #[tokio::test]
    async fn should_reject_taken_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|username| {
            Ok(Some(User::from_repository(
                1,
                username.to_string(),
                "taken@example.com".to_string(),
                "$argon2id$stub".to_string(),
                Role::User,
                Utc::now(),
            )))
        });

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice")).await;
        assert!(matches!(result.unwrap_err(), UserError::UsernameTaken));
    }

    #[tokio::test]
    async fn should_map_duplicate_insert_to_username_taken() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice")).await;
        assert!(matches!(result.unwrap_err(), UserError::UsernameTaken));
    }

    #[tokio::test]
    async fn should_reject_short_password() {
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        let mut request = params("alice");
        request.password = "short".to_string();
        request.confirm_password = "short".to_string();

        let result = use_case.execute(request).await;
        assert!(matches!(result.unwrap_err(), UserError::PasswordTooShort));
    }

    #[tokio::test]
    async fn should_honor_requested_admin_role() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .withf(|user| user.role == Role::Admin)
            .returning(|_| Ok(1));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut request = params("root");
        request.role = Some(Role::Admin);

        let user = use_case.execute(request).await.unwrap();
        assert_eq!(user.role, Role::Admin);
    }
}
