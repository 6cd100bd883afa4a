mod tests {
    use dress_light::Random8;
    use dress_light::color::HueRange;

    #[test]
    fn test_random8_sequence_is_reproducible() {
        let mut rng = Random8::new(1337);
        assert_eq!(rng.random8(), 78);
        assert_eq!(rng.random8(), 134);
        assert_eq!(rng.random8(), 37);

        let mut a = Random8::default();
        let mut b = Random8::new(1337);
        for _ in 0..32 {
            assert_eq!(a.random8(), b.random8());
        }
    }

    #[test]
    fn test_random8_between_stays_in_range() {
        let mut rng = Random8::new(42);
        for _ in 0..1000 {
            let value = rng.random8_between(1, 24);
            assert!((1..24).contains(&value), "value = {value}");
        }
    }

    #[test]
    fn test_random8_empty_ranges() {
        let mut rng = Random8::new(7);
        assert_eq!(rng.random8_below(0), 0);
        assert_eq!(rng.random8_between(5, 5), 5);
        assert_eq!(rng.random8_between(9, 3), 9);
    }

    #[test]
    fn test_hue_range_pick() {
        let mut rng = Random8::new(99);
        for _ in 0..500 {
            let hue = HueRange::FIRE.pick(&mut rng);
            assert!(HueRange::FIRE.contains(hue), "hue = {hue}");
        }
    }
}
