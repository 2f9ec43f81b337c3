use chrono::Utc;
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_otp_code, services::Service},
    detection::ports::{DetectionRecordRepository, DiseaseInfoRepository, ImageClassifier},
    health::ports::HealthCheckRepository,
    marketplace::ports::{CategoryRepository, CropListingRepository},
    otp::{
        entities::OtpRequest,
        ports::{OtpRepository, OtpService, SmsSender},
        value_objects::{RequestOtpInput, VerifyOtpInput},
    },
    storage::ports::ObjectStoragePort,
    user::ports::{PasswordHasher, TokenIssuer, UserRepository},
};

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> OtpService
    for Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
where
    U: UserRepository,
    O: OtpRepository,
    D: DetectionRecordRepository,
    DI: DiseaseInfoRepository,
    HC: HealthCheckRepository,
    MR: CropListingRepository,
    CT: CategoryRepository,
    H: PasswordHasher,
    CL: ImageClassifier,
    SM: SmsSender,
    OS: ObjectStoragePort,
    TI: TokenIssuer,
{
    async fn request_otp(&self, input: RequestOtpInput) -> Result<(), CoreError> {
        let user = self
            .user_repository
            .get_by_phone(input.phone.clone())
            .await?
            .ok_or(CoreError::PhoneNotRegistered)?;

        let code = generate_otp_code();

        // Supersede the previous code before storing the new one. Only the
        // most recent row is removed; stale rows older than that survive.
        self.otp_repository
            .delete_latest_by_phone(input.phone.clone())
            .await?;

        let request = OtpRequest::new(input.phone.clone(), code.clone());
        self.otp_repository.create(request).await?;

        self.sms_sender.send_otp(&input.phone, &code).await?;

        info!(user_id = %user.id, "issued password-reset OTP");

        Ok(())
    }

    async fn verify_otp(&self, input: VerifyOtpInput) -> Result<(), CoreError> {
        let user = self
            .user_repository
            .get_by_phone(input.phone.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let request = self
            .otp_repository
            .find_latest_by_phone_and_code(input.phone.clone(), input.code.clone())
            .await?
            .ok_or(CoreError::IncorrectOtp)?;

        if !request.is_valid(Utc::now()) {
            return Err(CoreError::OtpExpired);
        }

        // The matched row is deliberately left in place; see DESIGN.md on
        // single-use enforcement.
        let password_hash = self.hasher.hash_password(&input.new_password)?;
        self.user_repository
            .update_password(user.id, password_hash)
            .await?;

        info!(user_id = %user.id, "password reset via OTP");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::{
        common::test_config,
        detection::ports::{
            MockDetectionRecordRepository, MockDiseaseInfoRepository, MockImageClassifier,
        },
        health::ports::MockHealthCheckRepository,
        marketplace::ports::{MockCategoryRepository, MockCropListingRepository},
        otp::ports::{MockOtpRepository, MockSmsSender},
        storage::ports::MockObjectStoragePort,
        user::{
            entities::{PreferredLanguage, User},
            ports::{MockPasswordHasher, MockTokenIssuer, MockUserRepository},
        },
    };

    const PHONE: &str = "+9779800000000";

    type TestService = Service<
        MockUserRepository,
        MockOtpRepository,
        MockDetectionRecordRepository,
        MockDiseaseInfoRepository,
        MockHealthCheckRepository,
        MockCropListingRepository,
        MockCategoryRepository,
        MockPasswordHasher,
        MockImageClassifier,
        MockSmsSender,
        MockObjectStoragePort,
        MockTokenIssuer,
    >;

    fn service(
        user_repository: MockUserRepository,
        otp_repository: MockOtpRepository,
        hasher: MockPasswordHasher,
        sms_sender: MockSmsSender,
    ) -> TestService {
        Service::new(
            user_repository,
            otp_repository,
            MockDetectionRecordRepository::new(),
            MockDiseaseInfoRepository::new(),
            MockHealthCheckRepository::new(),
            MockCropListingRepository::new(),
            MockCategoryRepository::new(),
            hasher,
            MockImageClassifier::new(),
            sms_sender,
            MockObjectStoragePort::new(),
            MockTokenIssuer::new(),
            test_config(),
        )
    }

    fn registered_user() -> User {
        User::new(
            PHONE.into(),
            "$argon2id$stub".into(),
            "Sita".into(),
            "Sharma".into(),
            None,
            None,
            None,
            None,
            None,
            PreferredLanguage::Np,
        )
    }

    fn otp_row_aged(seconds: i64) -> OtpRequest {
        let mut row = OtpRequest::new(PHONE.into(), "482913".into());
        row.created_at = Utc::now() - Duration::seconds(seconds);
        row
    }

    #[tokio::test]
    async fn request_otp_for_unregistered_phone_creates_nothing() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(None) }));
        otp_repository.expect_create().times(0);
        otp_repository.expect_delete_latest_by_phone().times(0);

        let service = service(
            user_repository,
            otp_repository,
            MockPasswordHasher::new(),
            MockSmsSender::new(),
        );

        let result = service
            .request_otp(RequestOtpInput {
                phone: "+9779899999999".into(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::PhoneNotRegistered);
    }

    #[tokio::test]
    async fn request_otp_supersedes_latest_row_and_sends_code() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();
        let mut sms_sender = MockSmsSender::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(Some(registered_user())) }));
        otp_repository
            .expect_delete_latest_by_phone()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        otp_repository
            .expect_create()
            .times(1)
            .withf(|row| {
                row.phone == PHONE && row.code.len() == 6 && !row.code.starts_with('0')
            })
            .returning(|row| Box::pin(async move { Ok(row) }));
        sms_sender
            .expect_send_otp()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let service = service(
            user_repository,
            otp_repository,
            MockPasswordHasher::new(),
            sms_sender,
        );

        service
            .request_otp(RequestOtpInput {
                phone: PHONE.into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn verify_otp_unknown_phone_is_not_found() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(
            user_repository,
            MockOtpRepository::new(),
            MockPasswordHasher::new(),
            MockSmsSender::new(),
        );

        let result = service
            .verify_otp(VerifyOtpInput {
                phone: "+9779899999999".into(),
                code: "123456".into(),
                new_password: "newpass".into(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn verify_otp_without_matching_row_is_incorrect() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(Some(registered_user())) }));
        otp_repository
            .expect_find_latest_by_phone_and_code()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = service(
            user_repository,
            otp_repository,
            MockPasswordHasher::new(),
            MockSmsSender::new(),
        );

        let result = service
            .verify_otp(VerifyOtpInput {
                phone: PHONE.into(),
                code: "000000".into(),
                new_password: "newpass".into(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::IncorrectOtp);
    }

    #[tokio::test]
    async fn verify_otp_expired_after_130_seconds() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(Some(registered_user())) }));
        otp_repository
            .expect_find_latest_by_phone_and_code()
            .returning(|_, _| Box::pin(async { Ok(Some(otp_row_aged(130))) }));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash_password().times(0);

        let service = service(user_repository, otp_repository, hasher, MockSmsSender::new());

        let result = service
            .verify_otp(VerifyOtpInput {
                phone: PHONE.into(),
                code: "482913".into(),
                new_password: "newpass".into(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::OtpExpired);
    }

    #[tokio::test]
    async fn verify_otp_inside_window_updates_password() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();
        let mut hasher = MockPasswordHasher::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(Some(registered_user())) }));
        otp_repository
            .expect_find_latest_by_phone_and_code()
            .returning(|_, _| Box::pin(async { Ok(Some(otp_row_aged(30))) }));
        hasher
            .expect_hash_password()
            .returning(|_| Ok("$argon2id$new".to_string()));
        user_repository
            .expect_update_password()
            .times(1)
            .withf(|_, hash| hash == "$argon2id$new")
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let service = service(
            user_repository,
            otp_repository,
            hasher,
            MockSmsSender::new(),
        );

        service
            .verify_otp(VerifyOtpInput {
                phone: PHONE.into(),
                code: "482913".into(),
                new_password: "newpass".into(),
            })
            .await
            .unwrap();
    }

    // Documents current behavior: the matched row survives verification, so
    // a second verify inside the window also succeeds. Single-use
    // enforcement is an open product question, not an invariant.
    #[tokio::test]
    async fn verify_otp_replay_inside_window_currently_succeeds() {
        let mut user_repository = MockUserRepository::new();
        let mut otp_repository = MockOtpRepository::new();
        let mut hasher = MockPasswordHasher::new();

        user_repository
            .expect_get_by_phone()
            .returning(|_| Box::pin(async { Ok(Some(registered_user())) }));
        otp_repository
            .expect_find_latest_by_phone_and_code()
            .times(2)
            .returning(|_, _| Box::pin(async { Ok(Some(otp_row_aged(30))) }));
        hasher
            .expect_hash_password()
            .returning(|_| Ok("$argon2id$new".to_string()));
        user_repository
            .expect_update_password()
            .times(2)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let service = service(
            user_repository,
            otp_repository,
            hasher,
            MockSmsSender::new(),
        );

        for _ in 0..2 {
            service
                .verify_otp(VerifyOtpInput {
                    phone: PHONE.into(),
                    code: "482913".into(),
                    new_password: "newpass".into(),
                })
                .await
                .unwrap();
        }
    }

    // Runs the reset against the real argon2 adapter: the hash written by
    // verify_otp must be the one that login later verifies against.
    #[tokio::test]
    async fn password_reset_then_login_with_new_password() {
        use std::sync::{Arc, Mutex};

        use crate::{
            domain::user::{
                entities::AuthToken,
                ports::UserService,
                value_objects::LoginInput,
            },
            infrastructure::crypto::argon2_hasher::Argon2Hasher,
        };

        let stored_hash: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let mut user_repository = MockUserRepository::new();
        let hash_sink = stored_hash.clone();
        user_repository
            .expect_update_password()
            .times(1)
            .returning(move |_, hash| {
                *hash_sink.lock().unwrap() = Some(hash);
                Box::pin(async { Ok(()) })
            });
        let hash_source = stored_hash.clone();
        user_repository.expect_get_by_phone().returning(move |_| {
            let mut user = registered_user();
            if let Some(hash) = hash_source.lock().unwrap().clone() {
                user.password_hash = hash;
            }
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut otp_repository = MockOtpRepository::new();
        otp_repository
            .expect_find_latest_by_phone_and_code()
            .returning(|_, _| Box::pin(async { Ok(Some(otp_row_aged(10))) }));

        let mut token_issuer = MockTokenIssuer::new();
        token_issuer.expect_issue().returning(|_| {
            Ok(AuthToken {
                access_token: "token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            })
        });

        let service = Service::new(
            user_repository,
            otp_repository,
            MockDetectionRecordRepository::new(),
            MockDiseaseInfoRepository::new(),
            MockHealthCheckRepository::new(),
            MockCropListingRepository::new(),
            MockCategoryRepository::new(),
            Argon2Hasher,
            MockImageClassifier::new(),
            MockSmsSender::new(),
            MockObjectStoragePort::new(),
            token_issuer,
            test_config(),
        );

        service
            .verify_otp(VerifyOtpInput {
                phone: PHONE.into(),
                code: "482913".into(),
                new_password: "freshpass".into(),
            })
            .await
            .unwrap();

        let wrong = service
            .login(LoginInput {
                phone: PHONE.into(),
                password: "oldpass".into(),
            })
            .await;
        assert_eq!(wrong.unwrap_err(), CoreError::InvalidCredentials);

        service
            .login(LoginInput {
                phone: PHONE.into(),
                password: "freshpass".into(),
            })
            .await
            .unwrap();
    }
}
