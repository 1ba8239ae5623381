//! End-to-end chart pipeline tests (scene -> PNG -> base64).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};

use trimetric_core::encoding::decode_image;
use trimetric_core::render::{Figure, ImageArtifact, PngRenderer, SceneRenderer};
use trimetric_core::scene::{build_scene, SceneDescription};
use trimetric_core::{render_chart, ChartError, MetricsInput, Result};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn renderer() -> PngRenderer {
    PngRenderer::new(Figure {
        width_in: 6.0,
        height_in: 4.0,
        dpi: 40,
        ..Figure::default()
    })
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    let r = renderer();
    let scene = build_scene(&MetricsInput::new(10, 5, 8));
    let a = r.render(&scene).unwrap();
    let b = r.render(&scene).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_inputs_draw_different_charts() {
    let r = renderer();
    let a = r.render(&build_scene(&MetricsInput::new(10, 5, 8))).unwrap();
    let b = r.render(&build_scene(&MetricsInput::new(1, 14, 2))).unwrap();
    assert_ne!(a.bytes, b.bytes);
}

#[test]
fn encoded_chart_decodes_to_png() {
    let encoded = render_chart(&renderer(), &MetricsInput::new(10, 5, 8)).unwrap();
    assert!(!encoded.is_empty());
    let bytes = decode_image(&encoded).unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[test]
fn values_beyond_the_axis_still_render() {
    let encoded = render_chart(&renderer(), &MetricsInput::new(u32::MAX, 40, 0)).unwrap();
    assert!(decode_image(&encoded).unwrap().starts_with(PNG_SIGNATURE));
}

struct FailingRenderer {
    calls: AtomicUsize,
}

impl SceneRenderer for FailingRenderer {
    fn render(&self, _scene: &SceneDescription) -> Result<ImageArtifact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ChartError::Render("out of memory".into()))
    }
}

#[test]
fn render_failure_propagates_without_partial_output() {
    let r = FailingRenderer { calls: AtomicUsize::new(0) };
    let err = render_chart(&r, &MetricsInput::new(1, 2, 3)).unwrap_err();
    assert_eq!(err.client_code().as_str(), "INTERNAL");
    assert_eq!(r.calls.load(Ordering::SeqCst), 1);
}
