// Shared type definitions - request/response models for the OpenAPI surface

pub mod dto;
