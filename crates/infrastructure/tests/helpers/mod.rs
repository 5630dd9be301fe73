#![allow(dead_code)]

pub mod http_gateway_mock;

pub use http_gateway_mock::{GatewayRoutes, MockHttpGateway};
