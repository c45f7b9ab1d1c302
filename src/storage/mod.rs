pub mod assets;
pub mod dirs;

pub use assets::copy_dir_into;
pub use dirs::ensure_dir;
