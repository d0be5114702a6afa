pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokenStore;

pub use token::{TokenStore, SESSION_TOKEN_KEY};
