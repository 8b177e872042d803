extern crate mandelbrot;
extern crate num;

use mandelbrot::{
    color_for, escape_time, render, Color, ConfigError, Pixel, PixelBuffer, Renderer, Strategy,
    ViewportConfig,
};
use num::Complex;

const ORANGE: Color = Color {
    r: 255,
    g: 153,
    b: 0,
    a: 255,
};
const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

fn render_all(config: &ViewportConfig) -> Vec<PixelBuffer> {
    Strategy::ALL
        .iter()
        .map(|strategy| render(&config.clone().with_strategy(*strategy)).unwrap())
        .collect()
}

#[test]
fn two_by_two_scenario_is_identical_across_strategies() {
    let config =
        ViewportConfig::new(2, 2, (-2.0, 1.0), (-2.0, 2.0), 10, Strategy::Sequential).unwrap();

    // (0,0) -> -2-2i, (0,1) -> -2+0i, (1,0) -> -0.5-2i all leave the
    // escape radius after one step; (1,1) -> -0.5+0i never does.
    let expected = [ORANGE, ORANGE, ORANGE, BLACK];
    for buffer in render_all(&config) {
        assert_eq!(buffer.cells(), &expected[..]);
        assert_eq!(buffer.get(Pixel(1, 1)), Some(BLACK));
    }
}

#[test]
fn strategies_agree_on_a_larger_view() {
    let config = ViewportConfig::new(
        120,
        90,
        (-0.75, -0.73),
        (0.10, 0.12),
        300,
        Strategy::Sequential,
    )
    .unwrap()
    .with_threads(4)
    .unwrap();

    let buffers = render_all(&config);
    assert_eq!(buffers[0], buffers[1]);
    assert_eq!(buffers[0], buffers[2]);
}

#[test]
fn degenerate_viewport_renders_identical_rows() {
    let config =
        ViewportConfig::new(6, 5, (0.3, 0.3), (-1.0, 1.0), 40, Strategy::PerRow).unwrap();
    let buffer = render(&config).unwrap();
    for row in 1..6 {
        for column in 0..5 {
            assert_eq!(
                buffer.get(Pixel(row, column)),
                buffer.get(Pixel(0, column))
            );
        }
    }
}

#[test]
fn origin_is_painted_black() {
    assert_eq!(escape_time(Complex::new(0.0, 0.0), 64), 64);
    assert_eq!(color_for(64, 64), BLACK);

    let config =
        ViewportConfig::new(4, 4, (-2.0, 2.0), (-2.0, 2.0), 64, Strategy::PerPixel).unwrap();
    let renderer = Renderer::new(config);
    assert_eq!(renderer.paint(&Pixel(2, 2)), BLACK);
}

#[test]
fn configuration_errors_come_before_rendering() {
    assert_eq!(
        ViewportConfig::from_selector(2, 2, (-2.0, 1.0), (-2.0, 2.0), 0, "seq"),
        Err(ConfigError::ZeroIterations)
    );
    assert_eq!(
        ViewportConfig::from_selector(2, 2, (-2.0, 1.0), (-2.0, 2.0), 10, "spiral"),
        Err(ConfigError::UnknownStrategy("spiral".to_string()))
    );
}
