use std::mem;

use glam::{vec2, Vec2};

use wolf_run_game::{
    bounding_box::BoundingBox,
    canvas::{Canvas, Color, Sprite, TextAlign},
};

use crate::text_renderer::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    White,
    Sprite(Sprite),
}

#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    position: Vec2,
    texture_coords: Vec2,
    color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: TextureKey,
    pub index_start: u32,
    pub index_count: u32,
}

/// One frame's worth of quads, grouped into runs that share a texture, plus
/// the text to paint over them.
pub struct SpriteBatch {
    clear_color: Color,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    draw_calls: Vec<DrawCall>,
    labels: Vec<Label>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            clear_color: Color::WHITE,
            vertices: Vec::new(),
            indices: Vec::new(),
            draw_calls: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = to_linear(self.clear_color);
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn push_quad(&mut self, texture: TextureKey, rect: BoundingBox, color: Color) {
        let color = to_linear(color);
        let base_index = self.vertices.len() as u32;

        let corners = [
            (vec2(rect.min.x, rect.min.y), vec2(0.0, 0.0)),
            (vec2(rect.max.x, rect.min.y), vec2(1.0, 0.0)),
            (vec2(rect.max.x, rect.max.y), vec2(1.0, 1.0)),
            (vec2(rect.min.x, rect.max.y), vec2(0.0, 1.0)),
        ];
        self.vertices
            .extend(corners.map(|(position, texture_coords)| Vertex {
                position,
                texture_coords,
                color,
            }));

        let index_start = self.indices.len() as u32;
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);

        if let Some(last) = self.draw_calls.last_mut() {
            if last.texture == texture {
                last.index_count += 6;
                return;
            }
        }
        self.draw_calls.push(DrawCall {
            texture,
            index_start,
            index_count: 6,
        });
    }
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SpriteBatch {
    /// Anything queued before the clear would be painted over, so drop it.
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.indices.clear();
        self.draw_calls.clear();
        self.labels.clear();
    }

    fn blit(&mut self, sprite: Sprite, rect: BoundingBox) {
        self.push_quad(TextureKey::Sprite(sprite), rect, Color::WHITE);
    }

    fn fill_rect(&mut self, rect: BoundingBox, color: Color) {
        self.push_quad(TextureKey::White, rect, color);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, align: TextAlign, size: f32, color: Color) {
        self.labels.push(Label {
            text: text.to_owned(),
            position,
            align,
            size,
            color,
        });
    }
}

// Colors are authored in sRGB but the surface format is sRGB-encoding, so
// the GPU expects linear values.
fn to_linear(color: Color) -> [f32; 4] {
    let channel = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let [r, g, b, a] = color.to_array();
    [channel(r), channel(g), channel(b), a]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32) -> BoundingBox {
        BoundingBox::from_position_size(vec2(x, y), vec2(10.0, 20.0))
    }

    #[test]
    fn quad_has_four_corners_and_two_triangles() {
        let mut batch = SpriteBatch::new();
        batch.blit(Sprite::Obstacle, rect(5.0, 7.0));

        let positions: Vec<Vec2> = batch.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                vec2(5.0, 7.0),
                vec2(15.0, 7.0),
                vec2(15.0, 27.0),
                vec2(5.0, 27.0)
            ]
        );
        assert_eq!(batch.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(
            batch.draw_calls(),
            &[DrawCall {
                texture: TextureKey::Sprite(Sprite::Obstacle),
                index_start: 0,
                index_count: 6,
            }]
        );
    }

    #[test]
    fn consecutive_quads_with_same_texture_share_a_draw_call() {
        let mut batch = SpriteBatch::new();
        batch.fill_rect(rect(0.0, 0.0), Color::BLACK);
        batch.fill_rect(rect(20.0, 0.0), Color::GRAY);
        batch.blit(Sprite::Actor(1), rect(40.0, 0.0));
        batch.blit(Sprite::Actor(2), rect(60.0, 0.0));
        batch.fill_rect(rect(80.0, 0.0), Color::BLACK);

        let calls: Vec<(TextureKey, u32, u32)> = batch
            .draw_calls()
            .iter()
            .map(|call| (call.texture, call.index_start, call.index_count))
            .collect();
        assert_eq!(
            calls,
            vec![
                (TextureKey::White, 0, 12),
                (TextureKey::Sprite(Sprite::Actor(1)), 12, 6),
                (TextureKey::Sprite(Sprite::Actor(2)), 18, 6),
                (TextureKey::White, 24, 6),
            ]
        );
        assert_eq!(batch.indices()[24..], [16, 17, 18, 16, 18, 19]);
    }

    #[test]
    fn clear_discards_queued_quads() {
        let mut batch = SpriteBatch::new();
        batch.blit(Sprite::Obstacle, rect(0.0, 0.0));
        batch.clear(Color::BLACK);

        assert!(batch.vertices().is_empty());
        assert!(batch.indices().is_empty());
        assert!(batch.draw_calls().is_empty());
        assert_eq!(batch.clear_color(), wgpu::Color::BLACK);
    }

    #[test]
    fn text_is_queued_apart_from_quads_until_cleared() {
        let mut batch = SpriteBatch::new();
        batch.draw_text(
            "Score: 10",
            vec2(10.0, 10.0),
            TextAlign::Left,
            26.0,
            Color::BLACK,
        );
        batch.fill_rect(rect(0.0, 0.0), Color::GRAY);

        assert_eq!(batch.draw_calls().len(), 1);
        assert_eq!(
            batch.labels(),
            &[Label {
                text: "Score: 10".to_owned(),
                position: vec2(10.0, 10.0),
                align: TextAlign::Left,
                size: 26.0,
                color: Color::BLACK,
            }]
        );

        batch.clear(Color::WHITE);
        assert!(batch.labels().is_empty());
    }

    #[test]
    fn sprites_are_untinted_and_fills_carry_their_color() {
        let mut batch = SpriteBatch::new();
        batch.blit(Sprite::Obstacle, rect(0.0, 0.0));
        batch.fill_rect(rect(0.0, 0.0), Color::BLACK);

        assert_eq!(batch.vertices()[0].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(batch.vertices()[4].color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn gray_is_darker_in_linear_space() {
        let [r, g, b, a] = to_linear(Color::GRAY);
        assert!(r < Color::GRAY.r && r > 0.5);
        assert_eq!((r, g, a), (b, b, 1.0));
    }
}
