//! Supplier input validation

use serde::Deserialize;

use super::validation::{RequiredFields, ValidationError};

/// Body of `POST /api/proveedores`
#[derive(Debug, Default, Deserialize)]
pub struct SupplierInput {
    pub nombre: Option<String>,
    pub calle: Option<String>,
    pub numero: Option<String>,
    pub colonia: Option<String>,
    pub cp: Option<String>,
    pub telefono: Option<String>,
}

/// A supplier plus the phone row that must be written with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub street: Option<String>,
    pub number: Option<String>,
    pub colony: Option<String>,
    pub postal_code: Option<String>,
    pub phone: String,
}

impl TryFrom<SupplierInput> for NewSupplier {
    type Error = ValidationError;

    fn try_from(input: SupplierInput) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let fields = (
            required.text("nombre", input.nombre),
            required.text("telefono", input.telefono),
        );

        match fields {
            (Some(name), Some(phone)) => Ok(Self {
                name,
                street: input.calle,
                number: input.numero,
                colony: input.colonia,
                postal_code: input.cp,
                phone,
            }),
            _ => Err(required.into_error()),
        }
    }
}
