//! Table mapping for eye-care products.

use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{EyeProduct, EyeProductPatch, NewEyeProduct};
use crate::domain::repository::DeletePolicy;
use crate::infrastructure::persistence::resource::PgResource;

impl PgResource for EyeProduct {
    type New = NewEyeProduct;
    type Patch = EyeProductPatch;

    const TABLE: &'static str = "eye_products";
    const FILTER_COLUMNS: &'static [&'static str] =
        &["category", "brand", "is_available", "is_active"];
    const DELETE: DeletePolicy = DeletePolicy::Deactivate { flag: "is_active" };

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, input: &NewEyeProduct) {
        qb.push(
            "(name, description, category, brand, price, image_url, \
             stock_quantity, is_available) VALUES (",
        );
        {
            let mut values = qb.separated(", ");
            values.push_bind(input.name.clone());
            values.push_bind(input.description.clone());
            values.push_bind(input.category.clone());
            values.push_bind(input.brand.clone());
            values.push_bind(input.price.clone());
            values.push_bind(input.image_url.clone());
            values.push_bind(input.stock_quantity);
            values.push_bind(input.is_available);
        }
        qb.push(")");
    }

    fn push_update(
        assignments: &mut Separated<'_, '_, Postgres, &'static str>,
        patch: &EyeProductPatch,
    ) {
        if let Some(name) = &patch.name {
            assignments.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &patch.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(category) = &patch.category {
            assignments
                .push("category = ")
                .push_bind_unseparated(category.clone());
        }
        if let Some(brand) = &patch.brand {
            assignments
                .push("brand = ")
                .push_bind_unseparated(brand.clone());
        }
        if let Some(price) = &patch.price {
            assignments
                .push("price = ")
                .push_bind_unseparated(price.clone());
        }
        if let Some(image_url) = &patch.image_url {
            assignments
                .push("image_url = ")
                .push_bind_unseparated(image_url.clone());
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            assignments
                .push("stock_quantity = ")
                .push_bind_unseparated(stock_quantity);
        }
        if let Some(is_available) = patch.is_available {
            assignments
                .push("is_available = ")
                .push_bind_unseparated(is_available);
        }
        if let Some(is_active) = patch.is_active {
            assignments
                .push("is_active = ")
                .push_bind_unseparated(is_active);
        }
    }
}
