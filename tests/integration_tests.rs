use double_pendulum::*;

#[test]
fn pendulum_starts_swinging_from_rest() {
    let mut world = PendulumWorld::default();
    let start = world.frame();

    world.step();

    let after = world.frame();
    assert_eq!(world.steps(), 1);
    assert_ne!(after.bob1, start.bob1, "first bob should move after one step");
    assert_eq!(after.pivot, start.pivot);
}

#[test]
fn thousand_frames_render_without_losing_the_pendulum() {
    let mut world = PendulumWorld::new(PendulumParams::default(), Vec2::new(200.0, 200.0));
    let mut pipeline = RenderPipeline::default();
    let mut canvas = FrameBuffer::new(400, 400);

    for _ in 0..1000 {
        world.step();
        let frame = world.frame();
        pipeline.draw_frame(&mut canvas, &frame, &world.params);
    }

    assert!(world.state.is_finite(), "state went non-finite: {:?}", world.state);
    assert!(world.state.theta1.abs() < 4.0 * std::f32::consts::PI);
    assert_eq!(pipeline.trail().len(), 1000);
    assert!(pipeline.trail().iter().all(|p| p.is_finite()));

    let frame = world.frame();
    let reach = world.params.length1 + world.params.length2;
    assert!(frame.bob2.distance(frame.pivot) <= reach + 1e-2);
}

#[test]
fn bounded_trail_policy_caps_growth_in_the_loop() {
    let mut world = PendulumWorld::default();
    let mut pipeline = RenderPipeline::new(TrailPolicy::Bounded(64));
    let mut canvas = FrameBuffer::new(64, 64);

    for _ in 0..200 {
        world.step();
        pipeline.draw_frame(&mut canvas, &world.frame(), &world.params);
    }

    assert_eq!(pipeline.trail().len(), 64);
    assert_eq!(pipeline.trail().iter().last(), Some(world.frame().bob2));
}

#[test]
fn world_honours_the_selected_scheme() {
    let mut folded = PendulumWorld::default();
    let mut standard = PendulumWorld::default();
    standard.set_scheme(IntegrationScheme::Standard);

    folded.step();
    standard.step();

    assert_eq!(standard.integrator.scheme, IntegrationScheme::Standard);
    assert_ne!(folded.state, standard.state);
}
