pub use common::*;
pub use traits::*;

mod common;
pub mod mock;
mod traits;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_os = "macos")] {
        mod macos;
        pub type Platform = macos::MacOSPlatform;
    } else {
        mod unsupported;
        pub type Platform = unsupported::UnsupportedPlatform;
    }
}
