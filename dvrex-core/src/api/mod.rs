//! HTTP surface of the remote DVR server: route constants and the
//! reqwest adapter implementing the collaborator ports.

pub mod client;
pub mod routes;

pub use client::RemoteDvrService;
