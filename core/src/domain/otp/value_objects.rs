#[derive(Debug, Clone)]
pub struct RequestOtpInput {
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct VerifyOtpInput {
    pub phone: String,
    pub code: String,
    pub new_password: String,
}
