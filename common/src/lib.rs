pub mod buffer2;
pub mod log_setup;
pub mod test_utils;

pub use buffer2::Buffer2;

pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}
