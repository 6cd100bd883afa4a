mod tests {
    use dress_light::Random8;
    use dress_light::color::{HueRange, Rgb, hsv2rgb, saturated};
    use dress_light::effect::{
        BRIGHTNESS_CEILING, BRIGHTNESS_FLOOR, ColorUpdate, Effect, FireConfig, FireEffect,
        PixelContext,
    };

    fn pixel(phase: u8, speed: u8, freq: u8) -> PixelContext {
        PixelContext {
            index: 0,
            brightness: 124,
            color: 10,
            phase,
            freq,
            speed,
            toggled_color: false,
        }
    }

    #[test]
    fn test_new_pixel_context() {
        let mut rng = Random8::new(1337);
        for index in 0..50 {
            let ctx = PixelContext::new(index, 124, 17, &mut rng);
            assert_eq!(ctx.index, index);
            assert_eq!(ctx.brightness, 124);
            assert_eq!(ctx.color, 17);
            assert!(ctx.phase < 24);
            assert!((1..24).contains(&ctx.speed));
            assert!((1..24).contains(&ctx.freq));
            assert!(!ctx.toggled_color);
        }
    }

    #[test]
    fn test_phase_wraps_at_256() {
        let mut ctx = pixel(250, 10, 1);
        ctx.step_wave();
        assert_eq!(ctx.phase, 4);
    }

    #[test]
    fn test_brightness_sequence() {
        let mut ctx = pixel(0, 5, 3);
        let mut trace = [0u8; 3];
        for brightness in &mut trace {
            ctx.step_wave();
            *brightness = ctx.brightness;
        }
        assert_eq!(trace, [24, 28, 62]);
    }

    #[test]
    fn test_brightness_stays_in_working_range() {
        for phase in 0..=255u8 {
            for freq in 0..=255u8 {
                let mut ctx = pixel(phase, 0, freq);
                ctx.step_wave();
                assert!(
                    (BRIGHTNESS_FLOOR..=BRIGHTNESS_CEILING).contains(&ctx.brightness),
                    "phase = {phase}, freq = {freq}, brightness = {}",
                    ctx.brightness
                );
            }
        }
    }

    #[test]
    fn test_color_toggles_once_per_trough() {
        let config = FireConfig::DEFAULT;
        let mut rng = Random8::new(5);
        let mut ctx = pixel(0, 5, 3);
        ctx.brightness = config.change_color;

        let ColorUpdate::Changed(hue) = ctx.update_color(&config, &mut rng) else {
            panic!("expected a hue change in the trough");
        };
        assert!(HueRange::FIRE.contains(hue));
        assert_eq!(ctx.color, hue);
        assert!(ctx.toggled_color);
        assert!((1..24).contains(&ctx.speed));
        assert!((1..24).contains(&ctx.freq));

        // Still in the trough on the next tick: re-arm instead of re-rolling
        assert_eq!(ctx.update_color(&config, &mut rng), ColorUpdate::Kept);
        assert!(!ctx.toggled_color);
        assert_eq!(ctx.color, hue);
    }

    #[test]
    fn test_color_kept_above_threshold() {
        let config = FireConfig::DEFAULT;
        let mut rng = Random8::new(5);
        let mut ctx = pixel(0, 5, 3);
        ctx.brightness = config.change_color + 1;

        assert_eq!(ctx.update_color(&config, &mut rng), ColorUpdate::Kept);
        assert_eq!(ctx.color, 10);
        assert_eq!(ctx.speed, 5);
        assert_eq!(ctx.freq, 3);
        assert!(!ctx.toggled_color);
    }

    #[test]
    fn test_pixel_rgb_uses_full_saturation() {
        let mut ctx = pixel(0, 5, 3);
        ctx.brightness = 200;
        assert_eq!(ctx.rgb(), hsv2rgb(saturated(10, 200)));
    }

    #[test]
    fn test_fire_effect_renders_every_pixel() {
        let mut effect = FireEffect::<4>::new(FireConfig::DEFAULT);
        let mut leds = [Rgb::default(); 4];
        effect.render(&mut leds);

        for (index, ctx) in effect.pixels().iter().enumerate() {
            assert_eq!(usize::from(ctx.index), index);
            assert_eq!(leds[index], ctx.rgb());
            assert!((BRIGHTNESS_FLOOR..=BRIGHTNESS_CEILING).contains(&ctx.brightness));
        }
    }

    #[test]
    fn test_fire_effect_is_reproducible_for_a_seed() {
        let mut a = FireEffect::<3>::new(FireConfig::DEFAULT);
        let mut b = FireEffect::<3>::new(FireConfig::DEFAULT);
        let mut leds_a = [Rgb::default(); 3];
        let mut leds_b = [Rgb::default(); 3];
        for _ in 0..100 {
            a.render(&mut leds_a);
            b.render(&mut leds_b);
            assert_eq!(leds_a, leds_b);
        }
    }

    #[test]
    fn test_fire_effect_hues_stay_in_palette() {
        let mut effect = FireEffect::<2>::new(FireConfig::DEFAULT);
        let mut leds = [Rgb::default(); 2];
        for _ in 0..500 {
            effect.render(&mut leds);
            for ctx in effect.pixels() {
                assert!(HueRange::FIRE.contains(ctx.color), "hue = {}", ctx.color);
            }
        }
    }

    #[test]
    fn test_fire_effect_reset_reseeds_pixels() {
        let mut effect = FireEffect::<1>::new(FireConfig::DEFAULT);
        let mut leds = [Rgb::default(); 1];
        for _ in 0..10 {
            effect.render(&mut leds);
        }
        effect.reset();
        let ctx = effect.pixels()[0];
        assert_eq!(ctx.brightness, FireConfig::DEFAULT.default_brightness);
        assert!(!ctx.toggled_color);
        assert!(ctx.phase < 24);
    }
}
