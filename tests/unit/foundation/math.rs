use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
}

#[test]
fn unpremul_inverts_premultiplication() {
    assert_eq!(unpremul_u8(0, 0), 0);
    assert_eq!(unpremul_u8(200, 255), 200);
    // 200 * 128 / 255 ~= 100
    assert_eq!(unpremul_u8(100, 128), 199);
}

#[test]
fn lerp_range_hits_bounds() {
    assert_eq!(lerp_range([40.0, 80.0], 0.0), 40.0);
    assert_eq!(lerp_range([40.0, 80.0], 0.5), 60.0);
    assert!(lerp_range([40.0, 80.0], 0.999_999) < 80.0);
}
