use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            phone: model.phone.clone(),
            password_hash: model.password_hash.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            citizenship_number: model.citizenship_number.clone(),
            province: model.province.clone(),
            district: model.district.clone(),
            municipality: model.municipality.clone(),
            ward_number: model.ward_number,
            profile_photo_key: model.profile_photo_key.clone(),
            preferred_language: model.preferred_language.as_str().into(),
            is_staff: model.is_staff,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
