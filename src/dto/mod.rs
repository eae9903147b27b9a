//! DTOs de la API

pub mod bus_dto;
pub mod request_dto;
pub mod selection_dto;
