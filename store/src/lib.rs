pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::FeeDeskConfig;
pub use session::{SessionStore, TOKEN_KEY, USER_KEY};
