//! # Minv Cache
//!
//! 逆矩陣記憶化快取模組

pub mod cached_matrix;
pub mod compute;

// Re-export 主要類型
pub use cached_matrix::CachedMatrix;
pub use compute::compute_inverse;
