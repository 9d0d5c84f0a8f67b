//! # Minv Calculation Engine
//!
//! 數值計算引擎：逆矩陣與行列式求解

pub mod inversion;

// Re-export 主要類型
pub use inversion::{InversionCalculator, PIVOT_EPSILON};
