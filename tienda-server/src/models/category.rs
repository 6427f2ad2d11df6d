//! Category input validation

use serde::Deserialize;

use super::validation::{RequiredFields, ValidationError};

/// Body of `POST /api/categorias`
#[derive(Debug, Default, Deserialize)]
pub struct CategoryInput {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

/// A category that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<CategoryInput> for NewCategory {
    type Error = ValidationError;

    fn try_from(input: CategoryInput) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        match required.text("nombre", input.nombre) {
            Some(name) => Ok(Self {
                name,
                description: input.descripcion,
            }),
            None => Err(required.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let err = NewCategory::try_from(CategoryInput {
            nombre: None,
            descripcion: Some("sin nombre".into()),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "nombre is required");
    }

    #[test]
    fn description_is_optional() {
        let category = NewCategory::try_from(CategoryInput {
            nombre: Some("Ropa".into()),
            descripcion: None,
        })
        .unwrap();
        assert_eq!(category.name, "Ropa");
        assert_eq!(category.description, None);
    }
}
