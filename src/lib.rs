//! Backend de la consola de administración de flota de buses.
//!
//! Vistas con estado explícito (tabla de buses y tabla de solicitudes de
//! activación) sobre un núcleo puro de consola, con persistencia
//! intercambiable entre un almacén local de blobs y un almacén remoto de
//! documentos.

pub mod config;
pub mod console;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
