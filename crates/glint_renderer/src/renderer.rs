//! Progressive renderer.
//!
//! Owns the scene, camera, accumulation buffer and output pixels, and
//! reacts to the commands of an outer frame loop: rotate the camera, switch
//! scene, pause, reset, and tick. Each unpaused tick runs exactly one full
//! sampling pass (one sample per pixel) and then refreshes the RGBA frame,
//! so the frame never shows a partially sampled pass.

use glint_core::{presets, Scene, SceneError};
use rand::RngCore;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult};
use crate::error::{RenderError, SinkError};
use crate::{AccumulationBuffer, OrbitCamera, RenderConfig, Rng};

/// A finished frame handed to a display sink.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, row-major, top row first
    pub rgba: &'a [u8],
    /// Passes accumulated into this frame
    pub samples: u32,
}

/// Consumer of finished frames, such as a texture upload or an image file.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), SinkError>;
}

/// Renderer state for an external HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub samples: u32,
    pub scene_index: usize,
    pub scene_name: String,
    pub paused: bool,
}

/// Progressive path tracing session.
pub struct Renderer {
    config: RenderConfig,
    scene: Scene,
    scene_index: usize,
    camera: OrbitCamera,
    accumulator: AccumulationBuffer,
    pixels: Vec<[u8; 4]>,
    buckets: Vec<Bucket>,
    rng: Rng,
    paused: bool,
}

impl Renderer {
    /// Create a renderer showing preset `config.scene`.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let scene = presets::build(config.scene)?;
        let camera = OrbitCamera::new(&config.camera, config.width, config.height);
        let accumulator = AccumulationBuffer::new(config.width, config.height);
        let buckets = generate_buckets(config.width, config.height, config.bucket_size);

        log::info!(
            "Renderer initialized: {}x{}, {} buckets, seed {:#x}",
            config.width,
            config.height,
            buckets.len(),
            config.seed
        );

        Ok(Self {
            scene,
            scene_index: config.scene,
            camera,
            accumulator,
            pixels: vec![[0, 0, 0, 255]; config.pixel_count()],
            buckets,
            rng: Rng::seed(config.seed),
            paused: false,
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn accumulator(&self) -> &AccumulationBuffer {
        &self.accumulator
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Orbit the camera by `delta` radians. Any movement restarts
    /// accumulation. Zero and non-finite deltas are ignored.
    pub fn rotate(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::debug!("Ignoring non-finite rotation {}", delta);
            return;
        }
        if delta == 0.0 {
            return;
        }
        self.camera.rotate(delta);
        self.reset_accumulation("camera moved");
    }

    /// Switch to the next preset, wrapping around after the last one.
    pub fn next_scene(&mut self) -> Result<(), SceneError> {
        self.select_scene((self.scene_index + 1) % presets::count())
    }

    /// Switch to preset `index` and restart accumulation.
    pub fn select_scene(&mut self, index: usize) -> Result<(), SceneError> {
        self.scene = presets::build(index)?;
        self.scene_index = index;
        self.reset_accumulation("scene switched");
        Ok(())
    }

    /// Pause or resume sampling. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Rendering {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Discard all accumulated samples.
    pub fn reset(&mut self) {
        self.reset_accumulation("requested");
    }

    /// Frame signal from the outer loop. Runs one sampling pass unless
    /// paused; returns whether a pass ran.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.render_pass();
        true
    }

    /// Run one full-image sampling pass and refresh the output frame.
    pub fn render_pass(&mut self) {
        let pass_seed = self.rng.next_u64();
        let settings = self.config.trace_settings();
        let camera = &self.camera;
        let scene = &self.scene;

        let results: Vec<BucketResult> = self
            .buckets
            .par_iter()
            .map(|bucket| {
                let mut rng = Rng::stream(pass_seed, bucket.index as u64);
                render_bucket(bucket, camera, scene, &settings, &mut rng)
            })
            .collect();

        self.accumulator.accumulate_pass(&results);
        self.accumulator.resolve_into(&mut self.pixels);

        log::debug!("Pass {} complete", self.accumulator.samples());
    }

    /// Current frame as tightly packed RGBA8.
    pub fn frame(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Hand the current frame to `sink`.
    ///
    /// Sink failures are logged and otherwise ignored; accumulation state
    /// is unaffected. Returns whether the sink accepted the frame.
    pub fn present(&self, sink: &mut dyn FrameSink) -> bool {
        let frame = Frame {
            width: self.config.width,
            height: self.config.height,
            rgba: self.frame(),
            samples: self.accumulator.samples(),
        };
        match sink.present(&frame) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Display sink rejected frame: {}", e);
                false
            }
        }
    }

    pub fn status(&self) -> Status {
        Status {
            samples: self.accumulator.samples(),
            scene_index: self.scene_index,
            scene_name: self.scene.name().to_string(),
            paused: self.paused,
        }
    }

    fn reset_accumulation(&mut self, reason: &str) {
        self.accumulator.reset();
        self.accumulator.resolve_into(&mut self.pixels);
        if self.config.reseed_on_reset {
            self.rng = Rng::seed(self.config.seed);
        }
        log::debug!("Accumulation reset: {}", reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::tone_map;
    use crate::error::ConfigError;
    use crate::tracer::TraceSettings;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 24,
            height: 16,
            bucket_size: 7,
            ..Default::default()
        }
    }

    struct RecordingSink {
        frames: Vec<(u32, u32, usize, u32)>,
    }

    impl FrameSink for RecordingSink {
        fn present(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
            self.frames.push((frame.width, frame.height, frame.rgba.len(), frame.samples));
            Ok(())
        }
    }

    struct BrokenSink;

    impl FrameSink for BrokenSink {
        fn present(&mut self, _frame: &Frame<'_>) -> Result<(), SinkError> {
            Err(SinkError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn test_tick_accumulates() {
        let mut r = Renderer::new(small_config()).unwrap();
        assert_eq!(r.status().samples, 0);
        assert!(r.tick());
        assert!(r.tick());
        assert_eq!(r.status().samples, 2);
        assert_eq!(r.frame().len(), 24 * 16 * 4);
    }

    #[test]
    fn test_pause_skips_passes() {
        let mut r = Renderer::new(small_config()).unwrap();
        assert!(r.toggle_pause());
        assert!(!r.tick());
        assert_eq!(r.status().samples, 0);
        assert!(r.status().paused);
        assert!(!r.toggle_pause());
        assert!(r.tick());
        assert_eq!(r.status().samples, 1);
    }

    #[test]
    fn test_single_pass_frame_matches_sample() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        r.reset();

        // Replay the pass that the next tick will run
        let pass_seed = r.rng.clone().next_u64();
        r.tick();
        assert_eq!(r.status().samples, 1);

        let settings = r.config.trace_settings();
        for bucket in &r.buckets {
            let mut rng = Rng::stream(pass_seed, bucket.index as u64);
            let replay = render_bucket(bucket, &r.camera, &r.scene, &settings, &mut rng);
            for (i, color) in replay.pixels.iter().enumerate() {
                let x = bucket.x + i as u32 % bucket.width;
                let y = bucket.y + i as u32 / bucket.width;
                assert_eq!(r.accumulator.sum(x, y), *color);
                assert_eq!(r.accumulator.average(x, y), *color);
                assert_eq!(r.pixels[(y * 24 + x) as usize], tone_map(*color));
            }
        }
    }

    #[test]
    fn test_scene_switch_resets() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        r.tick();
        r.next_scene().unwrap();

        let status = r.status();
        assert_eq!(status.samples, 0);
        assert_eq!(status.scene_index, 1);
        assert_eq!(status.scene_name, presets::PRESETS[1].name);
        assert_eq!(r.scene().spheres().len(), presets::PRESETS[1].sphere_count);
        assert_eq!(r.scene().planes().len(), presets::PRESETS[1].plane_count);
        for y in 0..16 {
            for x in 0..24 {
                assert_eq!(r.accumulator().sum(x, y), glint_math::Color::ZERO);
            }
        }
        assert!(r.frame().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_next_scene_wraps() {
        let mut r = Renderer::new(small_config()).unwrap();
        for _ in 0..presets::count() {
            r.next_scene().unwrap();
        }
        assert_eq!(r.status().scene_index, 0);
    }

    #[test]
    fn test_select_unknown_scene_keeps_state() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        assert!(r.select_scene(99).is_err());
        assert_eq!(r.status().scene_index, 0);
        assert_eq!(r.status().samples, 1);
    }

    #[test]
    fn test_rotation_resets() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        r.rotate(0.0);
        assert_eq!(r.status().samples, 1);
        r.rotate(0.1);
        assert_eq!(r.status().samples, 0);
        assert!((r.camera().angle() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_oversized_resolution_rejected_before_allocation() {
        let config = RenderConfig {
            width: 100_000,
            height: 50_000,
            ..Default::default()
        };
        assert!(matches!(
            Renderer::new(config),
            Err(RenderError::Config(ConfigError::ResolutionTooLarge { .. }))
        ));
    }

    #[test]
    fn test_non_finite_rotation_ignored() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        r.rotate(f32::NAN);
        r.rotate(f32::INFINITY);
        assert_eq!(r.status().samples, 1);
        assert_eq!(r.camera().angle(), 0.0);

        r.rotate(0.5);
        assert!((r.camera().angle() - 0.5).abs() < 1e-6);
        assert!(r.camera().position().is_finite());
    }

    #[test]
    fn test_identical_renderers_match() {
        let mut a = Renderer::new(small_config()).unwrap();
        let mut b = Renderer::new(small_config()).unwrap();
        for _ in 0..3 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.frame(), b.frame());
    }

    #[test]
    fn test_bucket_size_does_not_change_sample_count() {
        let mut a = Renderer::new(small_config()).unwrap();
        let mut b = Renderer::new(RenderConfig {
            bucket_size: 64,
            ..small_config()
        })
        .unwrap();
        a.tick();
        b.tick();
        assert_eq!(a.status().samples, b.status().samples);
        assert_eq!(a.frame().len(), b.frame().len());
    }

    #[test]
    fn test_reset_continues_noise_by_default() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();
        let first = r.frame().to_vec();
        r.reset();
        r.tick();
        assert_ne!(r.frame(), &first[..]);
    }

    #[test]
    fn test_reseed_on_reset_repeats_noise() {
        let mut r = Renderer::new(RenderConfig {
            reseed_on_reset: true,
            ..small_config()
        })
        .unwrap();
        r.tick();
        let first = r.frame().to_vec();
        r.reset();
        r.tick();
        assert_eq!(r.frame(), &first[..]);
    }

    #[test]
    fn test_present_reports_sink_result() {
        let mut r = Renderer::new(small_config()).unwrap();
        r.tick();

        let mut sink = RecordingSink { frames: Vec::new() };
        assert!(r.present(&mut sink));
        assert_eq!(sink.frames, vec![(24, 16, 24 * 16 * 4, 1)]);

        assert!(!r.present(&mut BrokenSink));
        assert_eq!(r.status().samples, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Renderer::new(RenderConfig {
            height: 0,
            ..Default::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, RenderError::Config(_)));

        let err = Renderer::new(RenderConfig {
            scene: 42,
            ..small_config()
        })
        .err()
        .unwrap();
        assert_eq!(err, RenderError::Scene(SceneError::UnknownPreset(42)));
    }

    #[test]
    fn test_trace_settings_follow_config() {
        let r = Renderer::new(RenderConfig {
            max_bounces: 2,
            ..small_config()
        })
        .unwrap();
        let settings: TraceSettings = r.config().trace_settings();
        assert_eq!(settings.max_bounces, 2);
    }
}
