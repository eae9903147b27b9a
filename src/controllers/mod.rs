//! Controladores MVC

pub mod auth_controller;
pub mod bus_controller;
pub mod request_controller;
