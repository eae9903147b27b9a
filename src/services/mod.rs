//! Servicios de la aplicación

pub mod auth_service;
pub mod jwt_service;
