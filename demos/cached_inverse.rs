//! 記憶化求逆示例

use minv::{compute_inverse, CachedMatrix, InversionCalculator, Matrix};

fn main() -> anyhow::Result<()> {
    // 初始化日誌，快取命中通知以 INFO 級別輸出
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 記憶化求逆示例 ===\n");

    let matrix = Matrix::from_rows(vec![
        vec![1.0, 3.0, 3.0],
        vec![1.0, 4.0, 3.0],
        vec![1.0, 3.0, 4.0],
    ])?;

    println!("矩陣 A:\n{}", matrix);
    println!(
        "det(A) = {}",
        InversionCalculator::determinant(&matrix)?
    );

    let mut cached = CachedMatrix::new(matrix);

    // 第一次求逆：執行計算並存入快取
    let inverse = compute_inverse(&mut cached)?;
    println!("\nA⁻¹（首次計算）:\n{}", inverse);

    // 第二次求逆：命中快取，觀察 INFO 日誌
    let again = compute_inverse(&mut cached)?;
    println!("A⁻¹（快取命中，累計命中 {} 次）:\n{}", cached.hit_count(), again);

    // 序列化計算結果
    println!("JSON: {}\n", serde_json::to_string(&again)?);

    // 替換矩陣後快取失效，重新計算
    cached.set_matrix(Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?);
    let fresh = compute_inverse(&mut cached)?;
    println!("替換後的 A⁻¹（重新計算）:\n{}", fresh);

    Ok(())
}
