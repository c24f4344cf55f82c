// 公開ライブラリAPIの統合テスト
use adder::{
    adder::{create_adder, CheckedAdder, WrappingAdder},
    add, sum_all, wrapping_add, AddError, Adder, OverflowPolicy,
};

#[test]
fn test_add_literal_scenarios() {
    assert_eq!(add(2, 3), Ok(5));
    assert_eq!(add(-2, 3), Ok(1));
    assert_eq!(add(0, 0), Ok(0));
    assert_eq!(add(-5, -7), Ok(-12));
}

#[test]
fn test_add_is_idempotent() {
    for _ in 0..3 {
        assert_eq!(add(123_456, -654_321), Ok(-530_865));
        assert_eq!(add(i32::MAX, 1), Err(AddError::overflow(i32::MAX, 1)));
    }
}

#[test]
fn test_overflow_policy_is_consistent_across_interface() {
    // 主要API、Checked加算器、sum_allが同じ結果を返す
    let expected = Err(AddError::overflow(i32::MAX, 1));
    assert_eq!(add(i32::MAX, 1), expected);
    assert_eq!(CheckedAdder::new().add(i32::MAX, 1), expected);
    assert_eq!(sum_all(&CheckedAdder::new(), &[i32::MAX, 1]), expected);
    assert_eq!(create_adder(OverflowPolicy::default()).add(i32::MAX, 1), expected);
}

#[test]
fn test_wrapping_is_explicit_opt_in() {
    assert_eq!(wrapping_add(i32::MAX, 1), i32::MIN);
    assert_eq!(WrappingAdder::new().add(i32::MAX, 1), Ok(i32::MIN));
    assert_eq!(sum_all(&WrappingAdder::new(), &[i32::MIN, -1]), Ok(i32::MAX));
}

#[test]
fn test_concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || add(i, 1000)))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as i32 + 1000));
    }
}

#[test]
fn test_shared_boxed_adder_across_threads() {
    let adder = std::sync::Arc::new(create_adder(OverflowPolicy::Checked));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let adder = std::sync::Arc::clone(&adder);
            std::thread::spawn(move || adder.add(i, i))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(2 * i as i32));
    }
}
