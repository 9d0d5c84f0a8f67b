//! # Minv
//!
//! 記憶化逆矩陣快取引擎
//!
//! 提供一個持有矩陣與其逆矩陣快取的 [`CachedMatrix`]，
//! 以及記憶化求逆入口 [`compute_inverse`]：
//! 首次呼叫計算並快取，重複呼叫直接返回快取值，
//! 替換矩陣時快取自動失效

// Re-export 主要類型
pub use minv_cache::{compute_inverse, CachedMatrix};
pub use minv_calc::{InversionCalculator, PIVOT_EPSILON};
pub use minv_core::{Matrix, MinvError, Result};
