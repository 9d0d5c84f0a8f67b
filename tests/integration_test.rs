//! 集成測試

use approx::assert_abs_diff_eq;
use minv_cache::{compute_inverse, CachedMatrix};
use minv_calc::InversionCalculator;
use minv_core::{Matrix, MinvError};

#[test]
fn test_memoized_inversion_end_to_end() {
    // 測試完整的記憶化求逆流程
    // 場景：首次計算 → 快取命中 → 結果逐位相同

    // 1. 以初始矩陣構造快取
    let matrix = Matrix::from_rows(vec![
        vec![1.0, 3.0, 3.0],
        vec![1.0, 4.0, 3.0],
        vec![1.0, 3.0, 4.0],
    ])
    .unwrap();
    let mut cached = CachedMatrix::new(matrix.clone());
    assert!(!cached.has_cached_inverse());

    // 2. 第一次求逆：執行計算，無命中
    let first = compute_inverse(&mut cached).unwrap();
    assert_eq!(cached.hit_count(), 0);

    let expected = Matrix::from_rows(vec![
        vec![7.0, -3.0, -3.0],
        vec![-1.0, 1.0, 0.0],
        vec![-1.0, 0.0, 1.0],
    ])
    .unwrap();
    assert!(first.approx_eq(&expected, 1e-9));

    // 3. 第二次求逆：命中快取，結果逐位相同
    let second = compute_inverse(&mut cached).unwrap();
    assert_eq!(cached.hit_count(), 1);
    assert_eq!(second, first);

    // 4. 驗證 A × A⁻¹ = I
    let product = matrix.multiply(&first).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_set_matrix_invalidates_and_recomputes() {
    // 測試失效流程
    // 場景：構造 → 求逆 → 替換矩陣 → 快取清空 → 重新計算新矩陣的逆

    let matrix = Matrix::from_rows(vec![
        vec![1.0, 3.0, 3.0],
        vec![1.0, 4.0, 3.0],
        vec![1.0, 3.0, 4.0],
    ])
    .unwrap();
    let mut cached = CachedMatrix::new(matrix);
    compute_inverse(&mut cached).unwrap();
    assert!(cached.has_cached_inverse());

    // 替換矩陣是唯一的失效途徑
    let new_matrix = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    cached.set_matrix(new_matrix.clone());
    assert!(cached.inverse().is_none());

    // 重新計算：無命中，得到新矩陣的逆
    let inverse = compute_inverse(&mut cached).unwrap();
    assert_eq!(cached.hit_count(), 0);

    let product = new_matrix.multiply(&inverse).unwrap();
    assert!(product.approx_eq(&Matrix::identity(2), 1e-9));
}

#[test]
fn test_singular_matrix_fails_every_call() {
    // 測試失敗不被快取
    // 場景：奇異矩陣每次求逆都返回相同錯誤，不會出現過期或錯誤的結果

    let singular = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![1.0, 0.0, 1.0],
    ])
    .unwrap();
    let mut cached = CachedMatrix::new(singular);

    for _ in 0..3 {
        let result = compute_inverse(&mut cached);
        assert!(matches!(result, Err(MinvError::SingularMatrix)));
        assert!(cached.inverse().is_none());
    }
    assert_eq!(cached.hit_count(), 0);
}

#[test]
fn test_failed_then_replaced_with_invertible() {
    // 場景：奇異矩陣求逆失敗後，替換為可逆矩陣即可成功

    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let mut cached = CachedMatrix::new(singular);
    assert!(compute_inverse(&mut cached).is_err());

    cached.set_matrix(Matrix::identity(2));
    let inverse = compute_inverse(&mut cached).unwrap();
    assert!(inverse.approx_eq(&Matrix::identity(2), 1e-12));
}

#[test]
fn test_non_square_error_propagates_unchanged() {
    let mut cached = CachedMatrix::new(Matrix::zeros(3, 2));

    let result = compute_inverse(&mut cached);
    assert!(matches!(
        result,
        Err(MinvError::NotSquare { rows: 3, cols: 2 })
    ));
}

#[test]
fn test_determinant_agrees_with_invertibility() {
    // 行列式非零的矩陣可逆，行列式為零的矩陣不可逆

    let invertible = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    assert_abs_diff_eq!(
        InversionCalculator::determinant(&invertible).unwrap(),
        10.0,
        epsilon = 1e-9
    );
    assert!(InversionCalculator::invert(&invertible).is_ok());

    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    assert_abs_diff_eq!(
        InversionCalculator::determinant(&singular).unwrap(),
        0.0,
        epsilon = 1e-12
    );
    assert!(InversionCalculator::invert(&singular).is_err());
}
