use glam::Vec2;

use wolf_run_game::{
    canvas::{Color, TextAlign},
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// A line of text queued by the game for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub align: TextAlign,
    pub size: f32,
    pub color: Color,
}

/// Lays text out with egui and paints it in its own pass over the sprites.
pub struct TextRenderer {
    context: egui::Context,
    renderer: egui_wgpu::Renderer,
    primitives: Vec<egui::ClippedPrimitive>,
    textures_to_free: Vec<egui::TextureId>,
    screen_descriptor: egui_wgpu::ScreenDescriptor,
}

impl TextRenderer {
    pub fn new(device: &wgpu::Device, color_target_format: wgpu::TextureFormat) -> Self {
        Self {
            context: egui::Context::default(),
            renderer: egui_wgpu::Renderer::new(device, color_target_format, None, 1, false),
            primitives: Vec::new(),
            textures_to_free: Vec::new(),
            screen_descriptor: egui_wgpu::ScreenDescriptor {
                size_in_pixels: [SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32],
                pixels_per_point: 1.0,
            },
        }
    }

    /// Tessellates `labels` and uploads the glyph atlas and geometry. Returns
    /// any command buffers egui needs submitted ahead of `encoder`.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        labels: &[Label],
        size: winit::dpi::PhysicalSize<u32>,
    ) -> Vec<wgpu::CommandBuffer> {
        for id in self.textures_to_free.drain(..) {
            self.renderer.free_texture(&id);
        }

        // One game pixel is one egui point, whatever the surface size.
        let pixels_per_point = size.width as f32 / SCREEN_WIDTH;
        self.screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point,
        };

        let output = layout(&self.context, labels, pixels_per_point);
        self.primitives = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.textures_to_free = output.textures_delta.free;

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &self.primitives,
            &self.screen_descriptor,
        )
    }

    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.primitives.is_empty() {
            return;
        }

        self.renderer
            .render(render_pass, &self.primitives, &self.screen_descriptor);
    }
}

/// Runs one egui pass that paints every label onto a foreground layer
/// covering the whole game area.
fn layout(context: &egui::Context, labels: &[Label], pixels_per_point: f32) -> egui::FullOutput {
    let mut raw_input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(SCREEN_WIDTH, SCREEN_HEIGHT),
        )),
        ..Default::default()
    };
    raw_input
        .viewports
        .entry(egui::ViewportId::ROOT)
        .or_default()
        .native_pixels_per_point = Some(pixels_per_point);

    context.run(raw_input, |context| {
        let painter = context.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("labels"),
        ));
        for label in labels {
            painter.text(
                egui::pos2(label.position.x, label.position.y),
                anchor(label.align),
                &label.text,
                egui::FontId::proportional(label.size),
                to_color32(label.color),
            );
        }
    })
}

fn anchor(align: TextAlign) -> egui::Align2 {
    match align {
        TextAlign::Left => egui::Align2::LEFT_TOP,
        TextAlign::Center => egui::Align2::CENTER_TOP,
    }
}

// egui takes sRGB bytes and converts for sRGB targets itself.
fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
