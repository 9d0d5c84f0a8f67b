//! # Minv Core
//!
//! 核心資料模型與類型定義

pub mod matrix;

// Re-export 主要類型
pub use matrix::Matrix;

/// 矩陣運算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MinvError {
    #[error("矩陣不是方陣: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("奇異矩陣，逆矩陣不存在")]
    SingularMatrix,

    #[error("維度不匹配: {left_rows}x{left_cols} 無法與 {right_rows}x{right_cols} 相乘")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("無效的矩陣: {0}")]
    InvalidMatrix(String),
}

pub type Result<T> = std::result::Result<T, MinvError>;
