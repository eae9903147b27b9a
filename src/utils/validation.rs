//! Utilidades de validación
//!
//! Funciones helper para validar los campos de los formularios de la
//! consola antes de tocar el estado.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar capacidad de pasajeros: positiva y dentro de un rango sensato
pub fn validate_capacity(value: u32) -> Result<(), ValidationError> {
    if value == 0 || value > 150 {
        let mut error = ValidationError::new("capacity");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar placa: entre 5 y 12 caracteres alfanuméricos con guiones
pub fn validate_plate_number(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    let shape_ok = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ');

    if !(5..=12).contains(&len) || !shape_ok {
        let mut error = ValidationError::new("plate_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("OA-101").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(45).is_ok());
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(200).is_err());
    }

    #[test]
    fn test_validate_plate_number() {
        assert!(validate_plate_number("UVW-823").is_ok());
        assert!(validate_plate_number("A").is_err());
        assert!(validate_plate_number("PLAKA#823").is_err());
    }
}
