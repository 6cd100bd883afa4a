mod tests {
    use dress_light::math8::{clamp8, ease_in_out_quad, quadwave8, scale8, triwave8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_triwave8() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(64), 128);
        assert_eq!(triwave8(127), 254);
        assert_eq!(triwave8(128), 254);
        assert_eq!(triwave8(255), 0);
    }

    #[test]
    fn test_ease_in_out_quad() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(30), 6);
        assert_eq!(ease_in_out_quad(255), 255);
    }

    #[test]
    fn test_quadwave8() {
        assert_eq!(quadwave8(0), 0);
        assert_eq!(quadwave8(64), 129);
        assert_eq!(quadwave8(128), 255);
        assert_eq!(quadwave8(192), 124);
        assert_eq!(quadwave8(255), 0);
    }

    #[test]
    fn test_quadwave8_rises_over_first_quarter() {
        for x in 0..63u8 {
            assert!(quadwave8(x) <= quadwave8(x + 1), "x = {x}");
        }
    }

    #[test]
    fn test_clamp8() {
        assert_eq!(clamp8(0, 24, 248), 24);
        assert_eq!(clamp8(255, 24, 248), 248);
        assert_eq!(clamp8(100, 24, 248), 100);
        assert_eq!(clamp8(24, 24, 248), 24);
    }
}
