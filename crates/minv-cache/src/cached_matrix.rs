//! 逆矩陣快取持有者

use minv_core::Matrix;

/// 快取矩陣
///
/// 持有一個矩陣與其惰性計算的逆矩陣快取。
/// 替換矩陣時快取無條件失效，這是唯一的失效途徑；
/// 快取存在時恆為當前矩陣的逆矩陣（由失效規則維護，不另行驗證）
#[derive(Debug, Clone)]
pub struct CachedMatrix {
    /// 當前矩陣
    matrix: Matrix,

    /// 快取的逆矩陣（None 表示尚未計算或已失效）
    inverse: Option<Matrix>,

    /// 快取命中次數
    hits: u64,
}

impl CachedMatrix {
    /// 從初始矩陣創建，快取為空
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            inverse: None,
            hits: 0,
        }
    }

    /// 替換矩陣，並無條件清除逆矩陣快取
    pub fn set_matrix(&mut self, new_matrix: Matrix) {
        tracing::debug!("矩陣已替換，清除逆矩陣快取");
        self.matrix = new_matrix;
        self.inverse = None;
    }

    /// 獲取當前矩陣
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// 存入逆矩陣快取，覆蓋原有值
    ///
    /// 不驗證 `inverse` 是否為當前矩陣的逆矩陣，
    /// 呼叫方必須在計算後、下一次 `set_matrix` 前立即存入
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// 獲取快取的逆矩陣，尚未快取時返回 None
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// 檢查快取是否有效
    pub fn has_cached_inverse(&self) -> bool {
        self.inverse.is_some()
    }

    /// 累計快取命中次數
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// 記錄一次快取命中
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }
}
