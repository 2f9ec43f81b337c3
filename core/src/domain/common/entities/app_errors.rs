use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("phone number is not registered")]
    PhoneNotRegistered,

    #[error("incorrect OTP")]
    IncorrectOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("could not decode image: {0}")]
    ImageDecode(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("classifier output does not match label list: {0}")]
    ShapeMismatch(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Invalid(String),

    #[error("object storage error: {0}")]
    ObjectStorage(String),

    #[error("external service error: {0}")]
    ExternalService(String),

    #[error("internal server error")]
    InternalServerError,
}
