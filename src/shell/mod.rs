// Composition root for the activities service.
//
// Responsibilities
// - Instantiate the in-memory registry and wire it into the use case handlers.
// - Expose the HTTP router and the server loop to the binary.

pub mod http;
pub mod server;
pub mod state;
