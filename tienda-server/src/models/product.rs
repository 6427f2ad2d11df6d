//! Product input validation

use serde::Deserialize;

use super::validation::{NumericInput, RequiredFields, ValidationError};

/// Body of `POST /api/productos`
///
/// Numbers may arrive as JSON numbers or as numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct ProductInput {
    pub nombre: Option<String>,
    pub marca: Option<String>,
    pub precio: Option<NumericInput<f64>>,
    pub stock: Option<NumericInput<i32>>,
    pub categoria_id: Option<NumericInput<i32>>,
}

/// A product that passed validation and can be inserted.
///
/// `category_id` is not checked here; the store's foreign key decides
/// whether the category exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

impl TryFrom<ProductInput> for NewProduct {
    type Error = ValidationError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let fields = (
            required.text("nombre", input.nombre),
            required.number("precio", input.precio),
            required.number("stock", input.stock),
            required.number("categoria_id", input.categoria_id),
        );

        match fields {
            (Some(name), Some(price), Some(stock), Some(category_id)) => Ok(Self {
                name,
                brand: input.marca,
                price,
                stock,
                category_id,
            }),
            _ => Err(required.into_error()),
        }
    }
}
