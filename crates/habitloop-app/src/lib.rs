// Application layer - use-case orchestration over the domain
// Transport (HTTP, IPC) is a consumer of this crate, not part of it

pub mod application;
