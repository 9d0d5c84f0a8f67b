//! 記憶化逆矩陣計算

use minv_calc::InversionCalculator;
use minv_core::Matrix;

use crate::CachedMatrix;

/// 記憶化求逆
///
/// 快取命中時發出通知並直接返回快取值，不呼叫計算引擎；
/// 未命中時計算逆矩陣、存入快取後返回。
///
/// 計算失敗時錯誤原樣向上傳遞，且不快取失敗結果，
/// 下一次呼叫會重新嘗試計算
pub fn compute_inverse(cached: &mut CachedMatrix) -> minv_core::Result<Matrix> {
    if let Some(inverse) = cached.inverse() {
        let inverse = inverse.clone();
        cached.record_hit();
        tracing::info!("快取命中，返回已快取的逆矩陣");
        return Ok(inverse);
    }

    let inverse = InversionCalculator::invert(cached.matrix())?;
    cached.set_inverse(inverse.clone());

    Ok(inverse)
}
