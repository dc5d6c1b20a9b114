use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_username(&params.username).await? else {
            self.logger
                .warn(&format!("Login failed for unknown user: {}", params.username));
            return Err(UserError::InvalidCredentials);
        };

        if !password::verify_password(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Login failed for user: {}", params.username));
            return Err(UserError::InvalidCredentials);
        }

        self.logger
            .info(&format!("User logged in: {}", user.username));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::user::model::{NewUser, Role};
    use chrono::Utc;
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

    fn stored_user(username: &str, password: &str) -> User {
        User::from_repository(
            1,
            username.to_string(),
            format!("{username}@example.com"),
            password::hash_password(password).unwrap(),
            Role::Admin,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_return_user_when_credentials_match() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|username| Ok(Some(stored_user(username, "hunter2hunter2"))));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(LoginParams {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn should_reject_wrong_password_with_invalid_credentials() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_username()
            .returning(|username| Ok(Some(stored_user(username, "hunter2hunter2"))));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn should_answer_unknown_user_with_same_invalid_credentials() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_username().returning(|_| Ok(None));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "nobody".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }
}
