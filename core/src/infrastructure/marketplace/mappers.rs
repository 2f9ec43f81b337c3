use crate::{
    domain::marketplace::entities::{Category, CropListing},
    entity::{categories, crop_images, crop_listings, users},
};

impl From<&categories::Model> for Category {
    fn from(model: &categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self::from(&model)
    }
}

/// Assembles a domain listing from its row plus the loaded relations.
pub fn listing_from_rows(
    model: &crop_listings::Model,
    farmer: Option<&users::Model>,
    category: Option<&categories::Model>,
    images: &[crop_images::Model],
) -> CropListing {
    let farmer_name = farmer
        .map(|f| format!("{} {}", f.first_name, f.last_name).trim().to_string())
        .unwrap_or_default();

    CropListing {
        id: model.id,
        farmer_id: model.farmer_id,
        farmer_name,
        crop_name: model.crop_name.clone(),
        category_id: model.category_id,
        category: category.map(|c| c.name.clone()),
        quantity: model.quantity.clone(),
        rate: model.rate,
        location: model.location.clone(),
        contact_number: model.contact_number.clone(),
        optional_contact: model.optional_contact.clone(),
        description: model.description.clone(),
        image_keys: images.iter().map(|i| i.image_key.clone()).collect(),
        posted_at: model.posted_at.to_utc(),
    }
}
