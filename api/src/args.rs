use std::path::PathBuf;

use clap::Parser;
use smartkheti_core::domain::common::{
    AuthConfig, ClassifierConfig, DatabaseConfig, ObjectStorageConfig, SmartKhetiConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "smartkheti", about = "Crop disease detection backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value = "5432")]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "smartkheti")]
    pub database_name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct ClassifierArgs {
    #[arg(long, env = "MODEL_PATH", default_value = "models/plant_disease.onnx")]
    pub model_path: PathBuf,

    #[arg(long, env = "LABELS_PATH", default_value = "models/labels.txt")]
    pub labels_path: PathBuf,

    #[arg(long, env = "MODEL_INPUT_WIDTH", default_value = "224")]
    pub model_input_width: u32,

    #[arg(long, env = "MODEL_INPUT_HEIGHT", default_value = "224")]
    pub model_input_height: u32,
}

#[derive(Debug, Clone, Parser)]
pub struct StorageArgs {
    #[arg(long, env = "MINIO_ENDPOINT", default_value = "http://localhost:9000")]
    pub minio_endpoint: String,

    #[arg(long, env = "MINIO_REGION", default_value = "us-east-1")]
    pub minio_region: String,

    #[arg(long, env = "MINIO_ACCESS_KEY", default_value = "minioadmin")]
    pub minio_access_key: String,

    #[arg(long, env = "MINIO_SECRET_KEY", default_value = "minioadmin")]
    pub minio_secret_key: String,

    #[arg(long, env = "MINIO_BUCKET", default_value = "smartkheti-media")]
    pub minio_bucket: String,

    #[arg(long, env = "MINIO_USE_SSL", default_value = "false")]
    pub minio_use_ssl: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET", default_value = "change-me")]
    pub jwt_secret: String,

    #[arg(long, env = "TOKEN_TTL_SECONDS", default_value = "86400")]
    pub token_ttl_seconds: i64,
}

impl From<Args> for SmartKhetiConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            classifier: ClassifierConfig {
                model_path: args.classifier.model_path,
                labels_path: args.classifier.labels_path,
                input_width: args.classifier.model_input_width,
                input_height: args.classifier.model_input_height,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.minio_endpoint,
                region: args.storage.minio_region,
                access_key: args.storage.minio_access_key,
                secret_key: args.storage.minio_secret_key,
                bucket: args.storage.minio_bucket,
                use_ssl: args.storage.minio_use_ssl,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_seconds: args.auth.token_ttl_seconds,
            },
        }
    }
}
