//! 逆矩陣計算

use minv_core::{Matrix, MinvError};

/// 選主元的奇異判定閾值
///
/// 消去過程中主元絕對值低於此值即視為奇異矩陣
pub const PIVOT_EPSILON: f64 = 1e-12;

/// 逆矩陣計算器
pub struct InversionCalculator;

impl InversionCalculator {
    /// 計算方陣的逆矩陣
    ///
    /// 對增廣矩陣 [A | I] 執行部分選主元的高斯-約旦消去，
    /// 消去完成後右半部即為 A 的逆矩陣
    ///
    /// # 錯誤
    /// * `NotSquare` - 輸入不是方陣
    /// * `SingularMatrix` - 矩陣奇異，逆矩陣不存在
    pub fn invert(matrix: &Matrix) -> minv_core::Result<Matrix> {
        if !matrix.is_square() {
            return Err(MinvError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        tracing::debug!("開始計算 {}x{} 矩陣的逆矩陣", n, n);
        let start_time = std::time::Instant::now();

        // 構造增廣矩陣 [A | I]
        let mut augmented = Matrix::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                augmented[(i, j)] = matrix[(i, j)];
            }
            augmented[(i, n + i)] = 1.0;
        }

        for col in 0..n {
            // 部分選主元：取該行絕對值最大的元素
            let mut pivot_row = col;
            for row in (col + 1)..n {
                if augmented[(row, col)].abs() > augmented[(pivot_row, col)].abs() {
                    pivot_row = row;
                }
            }

            if augmented[(pivot_row, col)].abs() < PIVOT_EPSILON {
                tracing::debug!("第 {} 行主元過小，判定為奇異矩陣", col);
                return Err(MinvError::SingularMatrix);
            }

            augmented.swap_rows(pivot_row, col);

            // 歸一化主元列
            let pivot = augmented[(col, col)];
            for j in 0..2 * n {
                augmented[(col, j)] /= pivot;
            }

            // 消去其他列的該行元素
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = augmented[(row, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..2 * n {
                    let value = augmented[(col, j)];
                    augmented[(row, j)] -= factor * value;
                }
            }
        }

        // 提取右半部
        let mut inverse = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inverse[(i, j)] = augmented[(i, n + j)];
            }
        }

        tracing::debug!("逆矩陣計算完成，耗時 {:?}", start_time.elapsed());

        Ok(inverse)
    }

    /// 計算方陣的行列式
    ///
    /// 部分選主元的高斯消去，行列式 = 主元乘積 × 置換符號。
    /// 消去中出現過小主元時直接返回 0
    pub fn determinant(matrix: &Matrix) -> minv_core::Result<f64> {
        if !matrix.is_square() {
            return Err(MinvError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        let mut work = matrix.clone();
        let mut determinant = 1.0;

        for col in 0..n {
            let mut pivot_row = col;
            for row in (col + 1)..n {
                if work[(row, col)].abs() > work[(pivot_row, col)].abs() {
                    pivot_row = row;
                }
            }

            if work[(pivot_row, col)].abs() < PIVOT_EPSILON {
                return Ok(0.0);
            }

            if pivot_row != col {
                work.swap_rows(pivot_row, col);
                determinant = -determinant;
            }

            let pivot = work[(col, col)];
            determinant *= pivot;

            for row in (col + 1)..n {
                let factor = work[(row, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for j in col..n {
                    let value = work[(col, j)];
                    work[(row, j)] -= factor * value;
                }
            }
        }

        Ok(determinant)
    }
}
