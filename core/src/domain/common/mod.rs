use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SmartKhetiConfig {
    pub database: DatabaseConfig,
    pub classifier: ClassifierConfig,
    pub object_storage: ObjectStorageConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Location of the on-disk classifier assets. The label file is newline
/// delimited and its line order must match the model's output vector order.
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub input_width: u32,
    pub input_height: u32,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub use_ssl: bool,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Six digit one-time code, 100000..=999999 as issued by the original
/// password-reset flow. Codes with a leading zero are never produced.
pub fn generate_otp_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
pub(crate) fn test_config() -> SmartKhetiConfig {
    SmartKhetiConfig {
        database: DatabaseConfig {
            host: "localhost".into(),
            port: 5432,
            username: "postgres".into(),
            password: "postgres".into(),
            name: "smartkheti_test".into(),
        },
        classifier: ClassifierConfig {
            model_path: PathBuf::from("model.onnx"),
            labels_path: PathBuf::from("labels.txt"),
            input_width: 224,
            input_height: 224,
        },
        object_storage: ObjectStorageConfig {
            endpoint: "http://localhost:9000".into(),
            region: "us-east-1".into(),
            access_key: "test".into(),
            secret_key: "test".into(),
            bucket: "smartkheti-test".into(),
            use_ssl: false,
        },
        auth: AuthConfig {
            jwt_secret: "secret".into(),
            token_ttl_seconds: 3600,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::generate_otp_code;

    #[test]
    fn otp_code_is_six_digits_without_leading_zero() {
        for _ in 0..1000 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(!code.starts_with('0'));
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
