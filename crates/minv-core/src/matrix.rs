//! 矩陣模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::MinvError;

/// 稠密矩陣
///
/// 以 row-major 方式扁平存儲，元素透過 `(row, col)` 元組索引存取
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    /// 元素（扁平存儲: row * cols + col）
    data: Vec<f64>,

    /// 列數（rows）
    rows: usize,

    /// 行數（columns）
    cols: usize,
}

impl Matrix {
    /// 從巢狀 Vec 創建矩陣
    ///
    /// 輸入為空或各列長度不一致時返回 `InvalidMatrix`
    pub fn from_rows(rows: Vec<Vec<f64>>) -> crate::Result<Self> {
        if rows.is_empty() {
            return Err(MinvError::InvalidMatrix("矩陣不能為空".to_string()));
        }

        let cols = rows[0].len();
        if cols == 0 {
            return Err(MinvError::InvalidMatrix("矩陣的列不能為空".to_string()));
        }

        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(MinvError::InvalidMatrix(format!(
                "各列長度不一致: 期望 {}，實際 {}",
                cols,
                bad.len()
            )));
        }

        let row_count = rows.len();
        let data = rows.into_iter().flatten().collect();

        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// 創建全零矩陣
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// 創建 n 階單位矩陣
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = 1.0;
        }
        matrix
    }

    /// 列數（rows）
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 行數（columns）
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 檢查是否為方陣
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// 交換兩列
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// 矩陣乘法
    ///
    /// 內側維度不一致時返回 `DimensionMismatch`
    pub fn multiply(&self, other: &Matrix) -> crate::Result<Matrix> {
        if self.cols != other.rows {
            return Err(MinvError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self[(i, k)];
                for j in 0..other.cols {
                    result[(i, j)] += lhs * other[(k, j)];
                }
            }
        }

        Ok(result)
    }

    /// 逐元素容差比較
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// 內部輔助: (row, col) 轉扁平索引
    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.rows && c < self.cols, "矩陣索引越界");
        r * self.cols + c
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (r, c) = index;
        &self.data[self.idx(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (r, c) = index;
        let idx = self.idx(r, c);
        &mut self.data[idx]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
