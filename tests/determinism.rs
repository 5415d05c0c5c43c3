use recoil::{Spring1D, Spring2D, SpringConfig, Vec2};

#[test]
fn spring_1d_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let mut spring: Spring1D<f32> = Spring1D::new(
            SpringConfig::wobbly().with_from_value(-40.0).with_to_value(250.0),
        ).unwrap();
        spring.attach();
        let mut trace = Vec::with_capacity(120);
        for frame in 0..120 {
            // Irregular frame pacing, including a dropped frame.
            let dt = if frame % 17 == 0 { 48.0 } else { 16.0 + (frame % 3) as f32 };
            spring.step(dt);
            trace.push((spring.current_value(), spring.current_velocity()));
        }
        trace
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn spring_2d_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let mut spring: Spring2D<f64> = Spring2D::new(
            SpringConfig::gentle().with_initial_velocity(15.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(10.0, -5.0),
        ).unwrap();
        spring.attach();
        for frame in 0..500 {
            if frame == 200 {
                spring.set_to_position(Vec2::new(-3.0, 7.5));
            }
            spring.tick(frame as f64 * 16.6);
        }
        spring.current_position()
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].x, r.x);
        assert_eq!(results[0].y, r.y);
    }
}
