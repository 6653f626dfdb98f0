//! Desktop preview app for hub75-composer effects
//!
//! Simulates a HUB75 panel in a window. Frames go through the real
//! scheduler and bitplane encoder; the panel view decodes the bitplanes the
//! simulated driver received. All state changes are sent as intents.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use hub75_composer::{
    BitplaneEncoder, EffectId, EffectParams, FrameError, FrameScheduler, Instant, IntentChannel,
    IntentSender, OutputDriver, PanelGeometry, PinOrder, Renderer, RendererConfig, Rgb,
};

/// Simulated panel width
const PANEL_WIDTH: u16 = 64;

/// Simulated panel height
const PANEL_HEIGHT: u16 = 32;

const MAX_PIXELS: usize = PANEL_WIDTH as usize * PANEL_HEIGHT as usize;

/// Bitplane bytes for one frame at the default depth
const BITPLANE_LEN: usize = MAX_PIXELS / 2 * hub75_composer::COLOR_BIT_DEPTH;

/// Size of each pixel rectangle in points
const PIXEL_SIZE: f32 = 10.0;

/// Gap between pixels
const PIXEL_GAP: f32 = 1.0;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 16;

/// Frames rendered per UI update at most, so a stalled window doesn't spin
const MAX_TICKS_PER_UPDATE: usize = 8;

/// Static intent channel for communication between UI and renderer
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> = IntentChannel::new();

type Scheduler =
    FrameScheduler<'static, PanelSink, MAX_PIXELS, INTENT_CHANNEL_SIZE, BITPLANE_LEN>;

/// Output driver that keeps the last frame of bitplanes
struct PanelSink {
    bitplanes: Vec<u8>,
    frames: u64,
}

impl OutputDriver for PanelSink {
    fn write(&mut self, bitplanes: &[u8]) {
        self.bitplanes.clear();
        self.bitplanes.extend_from_slice(bitplanes);
        self.frames += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    /// Full color, decoded from all bitplanes
    Color,
    /// A single bitplane, lit where any of the pixel's channel bits is set
    Plane,
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_title("HUB75 Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "hub75-composer-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

struct PreviewApp {
    scheduler: Scheduler,
    /// Intent sender for UI changes
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,
    /// Decoder matching the renderer's encoder
    decoder: BitplaneEncoder<'static>,
    geometry: PanelGeometry,

    // UI state (tracked to detect changes and send intents)
    effect_id: EffectId,
    running: bool,
    params: EffectParams,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Deadline of the next frame on the synthetic clock
    next_deadline: Instant,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    pixel_size: f32,
    view: View,
    plane: usize,
}

impl PreviewApp {
    fn new() -> Result<Self, FrameError> {
        let geometry = PanelGeometry::new(PANEL_WIDTH, PANEL_HEIGHT)?;
        let effect_id = EffectId::Balatro;
        let params = EffectParams::default();

        let config = RendererConfig {
            geometry,
            effect: Some(effect_id),
            params,
            pin_order: PinOrder::LsbFirst,
            gamma: None,
        };
        let renderer = Renderer::new(INTENTS_CHANNEL.receiver(), &config)?;
        let sink = PanelSink {
            bitplanes: vec![0; geometry.bitplane_len(hub75_composer::COLOR_BIT_DEPTH)],
            frames: 0,
        };

        Ok(Self {
            scheduler: FrameScheduler::new(renderer, sink)?,
            intent_sender: INTENTS_CHANNEL.sender(),
            decoder: BitplaneEncoder::new().with_pin_order(config.pin_order),
            geometry,
            effect_id,
            running: true,
            params,
            t_ms: 0,
            next_deadline: Instant::from_millis(0),
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            pixel_size: PIXEL_SIZE,
            view: View::Color,
            plane: hub75_composer::COLOR_BIT_DEPTH - 1,
        })
    }

    fn send_start(&self, effect_id: EffectId) {
        let _ = self.intent_sender.start(effect_id);
    }

    fn send_stop(&self) {
        let _ = self.intent_sender.stop();
    }

    /// Advance the synthetic clock and run every frame that is due
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = (delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale))
            .clamp(0.0, 1000.0) as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);

        let now = Instant::from_millis(self.t_ms);
        for _ in 0..MAX_TICKS_PER_UPDATE {
            if now < self.next_deadline {
                break;
            }
            match self.scheduler.tick(now) {
                Ok(result) => self.next_deadline = result.next_deadline,
                Err(_) => break,
            }
        }
    }

    /// Colors to draw, decoded from the bitplanes the panel received
    fn decoded_pixels(&self) -> Vec<Rgb> {
        let bitplanes = &self.scheduler.output().bitplanes;
        let half = self.geometry.half_pixel_count();
        let mut pixels = vec![Rgb::default(); self.geometry.pixel_count()];

        for pair in 0..half {
            let Some((top, bottom)) = self.decoder.decode_pixel_pair(bitplanes, pair) else {
                break;
            };
            let (top, bottom) = match self.view {
                View::Color => (top, bottom),
                View::Plane => (plane_mask(top, self.plane), plane_mask(bottom, self.plane)),
            };
            pixels[pair] = top;
            pixels[pair + half] = bottom;
        }
        pixels
    }
}

/// Show only bit `plane` of each channel, at full intensity
fn plane_mask(color: Rgb, plane: usize) -> Rgb {
    let bit = |c: u8| if (c >> plane) & 1 == 1 { 255 } else { 0 };
    Rgb::new(bit(color.r), bit(color.g), bit(color.b))
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let pixels = self.decoded_pixels();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Restart").clicked() {
                            self.running = true;
                            self.send_start(self.effect_id);
                        }
                        if ui
                            .button(if self.running { "⏹ Stop" } else { "▶ Start" })
                            .clicked()
                        {
                            self.running = !self.running;
                            if self.running {
                                self.send_start(self.effect_id);
                            } else {
                                self.send_stop();
                            }
                        }
                    });

                    ui.add_space(4.0);

                    let state = self.scheduler.renderer().state();
                    ui.label(format!(
                        "Frame: {} (t = {})",
                        self.scheduler.output().frames,
                        state.time()
                    ));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <ViewControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.pixel_size, 2.0..=20.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("View:");
                        ui.selectable_value(&mut self.view, View::Color, "color");
                        ui.selectable_value(&mut self.view, View::Plane, "bitplane");
                        if self.view == View::Plane {
                            ui.add(egui::Slider::new(
                                &mut self.plane,
                                0..=hub75_composer::COLOR_BIT_DEPTH - 1,
                            ));
                        }
                    });
                });
                // </ViewControls>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Effect:");
                let mut selected_effect = self.effect_id;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(self.effect_id.as_str())
                    .show_ui(ui, |ui| {
                        for id in EffectId::ALL {
                            ui.selectable_value(&mut selected_effect, id, id.as_str());
                        }
                    });
                if selected_effect != self.effect_id {
                    self.effect_id = selected_effect;
                    self.running = true;
                    self.send_start(selected_effect);
                }

                ui.add_space(8.0);

                ui.label("Spin:");
                let old_spin = self.params.spin_speed;
                ui.add(egui::Slider::new(&mut self.params.spin_speed, 0..=16));
                if self.params.spin_speed != old_spin {
                    let _ = self.intent_sender.set_spin_speed(self.params.spin_speed);
                }

                ui.label("Warp:");
                let old_warp = self.params.warp_amount;
                ui.add(egui::Slider::new(&mut self.params.warp_amount, 0..=32));
                if self.params.warp_amount != old_warp {
                    let _ = self.intent_sender.set_warp_amount(self.params.warp_amount);
                }
            });

            ui.add_space(16.0);

            // === Panel Display ===
            let pitch = self.pixel_size + PIXEL_GAP;
            let width = usize::from(self.geometry.width());
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(
                width as f32 * pitch,
                f32::from(self.geometry.height()) * pitch,
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;
            painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(12));

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in pixels.iter().enumerate() {
                let x = origin.x + (i % width) as f32 * pitch;
                let y = origin.y + (i / width) as f32 * pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.pixel_size, self.pixel_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, self.pixel_size * 0.3, color);
            }
        });
    }
}
