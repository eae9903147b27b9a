//! Modelos del sistema
//!
//! Este módulo contiene las formas canónicas de los registros de la
//! consola, independientes del backend de datos que los origine.

pub mod auth;
pub mod bus;
pub mod request;
