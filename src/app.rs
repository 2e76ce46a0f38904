use std::sync::{Arc, Mutex, Weak};

use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{Host, Stream, StreamConfig};
use eframe::{App, CreationContext, egui};
use ringbuf::traits::{Producer, Split};
use ringbuf::{HeapProd, HeapRb};

use crate::audio::devices::{default_output_device, preferred_output_config};
use crate::audio::{AudioState, PlaybackController, PlaybackState, SpectrumAnalyzer};
use crate::config::ANALYZER_RING_CAPACITY;
use crate::dsp::NoiseGraph;
use crate::error::EngineError;
use crate::ui::{ControlValues, SpectrumVisualizer, draw_controls};

pub struct NoiseCab {
    host: Host,
    audio_state: Arc<Mutex<AudioState>>,
    output_stream: Option<Stream>,
    analyzer: Option<SpectrumAnalyzer>,
    visualizer: SpectrumVisualizer,
    playback: PlaybackController,
    last_error: Option<String>,
}

impl NoiseCab {
    pub fn new(cc: &CreationContext) -> Self {
        let host = cpal::default_host();
        let audio_state = Arc::new(Mutex::new(AudioState::default()));

        let mut playback = PlaybackController::new();

        // repaint promptly on any playback transition so the UI echoes it
        let repaint_ctx = cc.egui_ctx.clone();
        playback.subscribe(move |_| repaint_ctx.request_repaint());

        Self {
            host,
            audio_state,
            output_stream: None,
            analyzer: None,
            visualizer: SpectrumVisualizer::new(),
            playback,
            last_error: None,
        }
    }

    /// Builds the stream, graph, and analyzer on first use. The session is
    /// memoized: later calls reuse it, and a failed build may be retried by
    /// pressing start again.
    fn ensure_session(&mut self) -> Result<(), EngineError> {
        if self.output_stream.is_some() {
            return Ok(());
        }

        let device = default_output_device(&self.host)?;
        let config = preferred_output_config(&device)?;

        if let Ok(mut state) = self.audio_state.lock() {
            state.sample_rate = config.sample_rate.0;
        }

        let ring = HeapRb::<f32>::new(ANALYZER_RING_CAPACITY);
        let (prod, cons) = ring.split();

        let stream = self.build_output_stream(&device, &config, prod)?;

        self.analyzer = Some(SpectrumAnalyzer::new(cons));
        self.output_stream = Some(stream);
        Ok(())
    }

    fn build_output_stream(
        &self,
        device: &cpal::Device,
        config: &StreamConfig,
        mut analyzer_prod: HeapProd<f32>,
    ) -> Result<Stream, EngineError> {
        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0;
        let audio_state_weak = Arc::downgrade(&self.audio_state);

        let mut graph = NoiseGraph::new(sample_rate, channels);
        let mut synced_generation = u64::MAX;

        let stream = device.build_output_stream(
            config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                sync_graph(&mut graph, &audio_state_weak, &mut synced_generation);
                graph.process_block(data);

                // fan out the mono mix to the analyzer; a full ring just
                // drops samples
                for frame in data.chunks(channels) {
                    let mono = frame.iter().sum::<f32>() / channels as f32;
                    let _ = analyzer_prod.try_push(mono);
                }
            },
            |err| eprintln!("Output stream error: {}", err),
            None,
        )?;

        Ok(stream)
    }

    fn toggle_play(&mut self) {
        match self.ensure_session() {
            Ok(()) => self.last_error = None,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return;
            }
        }

        let next = self.playback.toggle_play();
        self.apply_playback(next);
    }

    fn apply_playback(&mut self, state: PlaybackState) {
        match state {
            PlaybackState::Playing => {
                self.visualizer.start();
                if let Some(stream) = &self.output_stream {
                    if let Err(e) = stream.play() {
                        eprintln!("Failed to resume stream: {}", e);
                    }
                }
            }
            PlaybackState::Paused => {
                // stop the draw loop before releasing the analyzer input
                self.visualizer.request_cancel();
                if let Some(stream) = &self.output_stream {
                    if let Err(e) = stream.pause() {
                        eprintln!("Failed to suspend stream: {}", e);
                    }
                }
                if let Some(analyzer) = &mut self.analyzer {
                    analyzer.reset();
                }
            }
        }
    }

    fn handle_controls(&mut self, values: &ControlValues, shape: bool, volume: bool) {
        if let Ok(mut state) = self.audio_state.lock() {
            if shape {
                state.set_shape(values.angle, values.center);
            }
            if volume {
                state.set_volume(values.volume);
            }
        }

        if volume {
            if let Some(forced) = self.playback.set_volume_percent(values.volume) {
                self.apply_playback(forced);
            }
        }
    }
}

fn sync_graph(
    graph: &mut NoiseGraph,
    audio_state_weak: &Weak<Mutex<AudioState>>,
    synced_generation: &mut u64,
) {
    if let Some(state) = audio_state_weak.upgrade() {
        if let Ok(state) = state.lock() {
            if state.generation != *synced_generation {
                graph.set_gain_curve(&state.gain_curve);
                graph.set_volume_percent(state.volume);
                *synced_generation = state.generation;
            }
        }
    }
}

impl App for NoiseCab {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.playback.is_playing() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("noisecab");
                ui.separator();

                let label = if self.playback.is_playing() {
                    "stop"
                } else {
                    "start"
                };
                if ui.button(label).clicked() {
                    self.toggle_play();
                }

                ui.label(match self.playback.state() {
                    PlaybackState::Playing => "Status: Playing",
                    PlaybackState::Paused => "Status: Paused",
                });

                let sample_rate = self
                    .audio_state
                    .lock()
                    .map(|state| state.sample_rate)
                    .unwrap_or(0);
                if sample_rate > 0 {
                    ui.label(format!("{} Hz", sample_rate));
                }

                if let Some(error) = &self.last_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.visualizer.begin_frame() {
                if let Some(analyzer) = self.analyzer.as_mut() {
                    analyzer.update();
                }
                let snapshot = self.analyzer.as_ref().map(|a| a.snapshot());
                self.visualizer.draw(ui, snapshot);
            } else {
                self.visualizer.draw_idle(ui);
            }

            let mut values = {
                let state = self.audio_state.lock().unwrap();
                ControlValues {
                    angle: state.angle,
                    center: state.center,
                    volume: state.volume,
                }
            };

            let changed = draw_controls(ui, &mut values);
            if changed.shape || changed.volume {
                self.handle_controls(&values, changed.shape, changed.volume);
            }
        });
    }
}
