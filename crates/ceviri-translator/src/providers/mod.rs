mod libre;
mod mymemory;

pub use libre::{DEFAULT_LIBRETRANSLATE_URL, LibreTranslate};
pub use mymemory::{DEFAULT_MYMEMORY_URL, MyMemory};
