use utoipa::OpenApi;

use crate::application::http::{
    detection::router::DetectionApiDoc, marketplace::router::MarketplaceApiDoc,
    otp::router::OtpApiDoc, user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartKheti API"
    ),
    nest(
        (path = "/detection", api = DetectionApiDoc),
        (path = "/marketplace", api = MarketplaceApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/users", api = OtpApiDoc),
    )
)]
pub struct ApiDoc;
