//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno y los switches
//! de origen de datos del sistema.

pub mod environment;

pub use environment::*;
